// src/copier.rs
use crate::disc_formats::{SectorGeometry, SectorHeader, MODE_OFFSET};
use crate::error::{ConvertError, Result};
use std::io::{Read, Seek, SeekFrom, Write};
use tracing::{debug, warn};

/// Outcome of a completed copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub sectors: u64,
    /// Trailing bytes of an incomplete final sector, left out of the output.
    pub dropped_bytes: u64,
    pub mode_mismatches: u64,
}

impl CopyReport {
    pub fn warnings(&self) -> u64 {
        self.mode_mismatches + u64::from(self.dropped_bytes > 0)
    }
}

/// Streams every whole sector of `src` into `dst`, keeping only the user data.
///
/// The source is sized by seeking to its end and rewound before the first sector is read,
/// so it may be handed over straight after detection. Only one sector is held in memory.
/// A sector whose mode byte disagrees with the geometry is reported and still stripped
/// with the detected layout. With `strict` set, an image that is not a whole number of
/// sectors fails before anything is written.
pub fn strip_sectors<R, W>(src: &mut R, dst: &mut W, geometry: &SectorGeometry, strict: bool) -> Result<CopyReport>
where
    R: Read + Seek,
    W: Write,
{
    let image_size = src.seek(SeekFrom::End(0)).map_err(ConvertError::SizeUnknown)?;
    let tail = geometry.tail_bytes(image_size);
    if tail != 0 {
        if strict {
            return Err(ConvertError::TruncatedImage { sector_size: geometry.sector_size, tail });
        }
        warn!(
            "Image size is not a factor of sector size {}, last {} bytes will be dropped",
            geometry.sector_size, tail
        );
    }
    let sector_count = geometry.sector_count(image_size);
    src.seek(SeekFrom::Start(0)).map_err(ConvertError::Seek)?;

    debug!("{}: {} sectors in {} bytes", geometry.name, sector_count, image_size);

    let mut report = CopyReport { dropped_bytes: tail, ..CopyReport::default() };
    let mut buf = vec![0u8; geometry.sector_size];
    let payload = geometry.payload_range();

    for i in 0..sector_count {
        src.read_exact(&mut buf).map_err(ConvertError::Read)?;

        if let Some(expected) = geometry.expected_mode {
            let found = buf[MODE_OFFSET];
            if found != expected {
                warn!("Sector {} has different mode ({} instead of {})", i, found, expected);
                if let Ok(header) = SectorHeader::read_from(&mut &buf[..]) {
                    let (m, s, f) = header.msf();
                    debug!("  sector {} address {:02}:{:02}:{:02}", i, m, s, f);
                }
                report.mode_mismatches += 1;
            }
        }

        dst.write_all(&buf[payload.clone()]).map_err(ConvertError::Write)?;
        report.sectors += 1;
    }

    Ok(report)
}
