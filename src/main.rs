use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};

mod copier;
mod disc_formats;
mod error;
mod formats;

use formats::bin::{BinImage, ConvertOptions};

const USAGE: &str = "bin2iso image.bin [image.iso]";

#[derive(Parser, Debug)]
#[command(name = "bin2iso", version, override_usage = USAGE)]
#[command(about = "Convert a raw BIN track image (Mode 1/2352, Mode 2/2352 or Mode 2/2336) to ISO")]
struct Cli {
    source: PathBuf,
    /// Defaults to the source name with `.bin` replaced by `.iso`
    destination: Option<PathBuf>,
    #[arg(long)]
    verbose: bool,
    /// Re-check the size of the written image
    #[arg(long)]
    validate: bool,
    /// Fail instead of dropping a trailing partial sector
    #[arg(long)]
    strict: bool,
}

/// `image.bin` becomes `image.iso`; any other name gets `.iso` appended.
fn default_destination(source: &Path) -> PathBuf {
    let bytes = source.as_os_str().as_encoded_bytes();
    let mut name = if bytes.len() >= 5 && bytes.ends_with(b".bin") {
        // SAFETY: the split falls right before the ASCII ".bin" suffix.
        OsString::from(unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[..bytes.len() - 4]) })
    } else {
        OsString::from(source.as_os_str())
    };
    name.push(".iso");
    PathBuf::from(name)
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    let mut cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            eprintln!("usage: {}", USAGE);
            std::process::exit(1);
        }
    };
    init_logging(cli.verbose);

    let destination = cli.destination.take().unwrap_or_else(|| default_destination(&cli.source));
    let options = ConvertOptions { strict: cli.strict, validate: cli.validate };

    let mut image = BinImage::open(&cli.source)?;
    debug!("Writing {} to {}", image.geometry().name, destination.display());
    let report = image.convert(&destination, options)?;

    info!(
        "{} sectors written, {} bytes dropped, {} mode mismatches, {} warnings",
        report.sectors,
        report.dropped_bytes,
        report.mode_mismatches,
        report.warnings()
    );
    println!("Converted {} sectors to {}", report.sectors, destination.display());
    Ok(())
}
