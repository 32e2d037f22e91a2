// src/formats/iso.rs
use crate::disc_formats::PAYLOAD_SIZE;
use crate::error::{ConvertError, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use tracing::warn;

pub const ISO_SECTOR_SIZE: u64 = PAYLOAD_SIZE as u64;
/// ISO-9660 keeps its primary volume descriptor in sector 16, after the system area.
const PVD_SECTOR: u64 = 16;
const PVD_SIGNATURE: &[u8; 5] = b"CD001";

/// Checks a written ISO image against the number of sectors that went into it.
///
/// A size mismatch is fatal. A missing volume descriptor only warns: a data track does
/// not have to hold an ISO-9660 filesystem.
pub fn validate(path: &Path, sectors: u64) -> Result<()> {
    let mut file = File::open(path).map_err(ConvertError::Read)?;
    let actual = file.metadata().map_err(ConvertError::Read)?.len();
    let expected = sectors * ISO_SECTOR_SIZE;
    if actual != expected {
        return Err(ConvertError::Validation { expected, actual });
    }

    if !has_volume_descriptor(&mut file)? {
        warn!("No ISO-9660 volume descriptor found in {}", path.display());
    }
    println!("Validation passed: {} bytes in {} sectors", actual, sectors);
    Ok(())
}

/// True if the image carries the `CD001` signature of a volume descriptor in sector 16.
pub fn has_volume_descriptor<R: Read + Seek>(reader: &mut R) -> Result<bool> {
    let len = reader.seek(SeekFrom::End(0)).map_err(ConvertError::SizeUnknown)?;
    // Type byte, then the signature.
    let offset = PVD_SECTOR * ISO_SECTOR_SIZE + 1;
    if len < offset + PVD_SIGNATURE.len() as u64 {
        return Ok(false);
    }
    reader.seek(SeekFrom::Start(offset)).map_err(ConvertError::Seek)?;
    let mut signature = [0u8; 5];
    reader.read_exact(&mut signature).map_err(ConvertError::Read)?;
    Ok(&signature == PVD_SIGNATURE)
}
