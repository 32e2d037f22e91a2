// src/formats/bin.rs
use crate::copier::{self, CopyReport};
use crate::disc_formats::{self, SectorGeometry};
use crate::error::{ConvertError, Result};
use crate::formats::iso;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Fail on a trailing partial sector instead of dropping it.
    pub strict: bool,
    /// Re-check the written image once conversion is done.
    pub validate: bool,
}

/// A raw track image whose layout has been detected.
pub struct BinImage {
    path: PathBuf,
    file: File,
    geometry: &'static SectorGeometry,
}

impl BinImage {
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(ConvertError::SourceOpen)?;
        let geometry = disc_formats::detect(&mut file)?;
        debug!("Detected {} in {}", geometry.name, path.display());
        Ok(BinImage { path: path.to_path_buf(), file, geometry })
    }

    pub fn geometry(&self) -> &'static SectorGeometry {
        self.geometry
    }

    /// Writes the user data of every sector to `output_path`.
    ///
    /// On failure the destination is left as far as it got.
    pub fn convert(&mut self, output_path: &Path, options: ConvertOptions) -> Result<CopyReport> {
        if self.is_same_file(output_path) {
            return Err(ConvertError::DestinationOpen(io::Error::new(
                io::ErrorKind::InvalidInput,
                "destination is the source image",
            )));
        }
        let dst = File::create(output_path).map_err(ConvertError::DestinationOpen)?;
        let mut writer = BufWriter::new(dst);
        let report = copier::strip_sectors(&mut self.file, &mut writer, self.geometry, options.strict)?;
        writer.flush().map_err(ConvertError::Write)?;
        drop(writer);

        if options.validate {
            iso::validate(output_path, report.sectors)?;
        }
        Ok(report)
    }

    fn is_same_file(&self, output_path: &Path) -> bool {
        match (fs::canonicalize(&self.path), fs::canonicalize(output_path)) {
            (Ok(source), Ok(output)) => source == output,
            _ => false,
        }
    }
}
