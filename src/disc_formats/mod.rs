// src/disc_formats/mod.rs

pub mod header;
pub mod mode1;
pub mod mode2;

pub use header::{SectorHeader, MODE_OFFSET};
#[cfg(test)]
pub use header::{HEADER_SIZE, SYNC_HEADER};
pub use mode1::MODE1_2352;
pub use mode2::{MODE2_2336, MODE2_2352};

use crate::error::{ConvertError, Result};
use std::io::Read;
use std::ops::Range;

/// User data carried by every supported sector layout.
pub const PAYLOAD_SIZE: usize = 2048;

/// Layout of a raw track image, fixed for the whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorGeometry {
    pub sector_size: usize,
    /// Bytes preceding the user data within a sector.
    pub header_size: usize,
    /// `None` disables the per-sector mode check.
    pub expected_mode: Option<u8>,
    pub name: &'static str,
}

impl SectorGeometry {
    pub fn payload_range(&self) -> Range<usize> {
        self.header_size..self.header_size + PAYLOAD_SIZE
    }

    /// Number of whole sectors in an image of `image_size` bytes.
    pub fn sector_count(&self, image_size: u64) -> u64 {
        image_size / self.sector_size as u64
    }

    /// Bytes of an incomplete final sector.
    pub fn tail_bytes(&self, image_size: u64) -> u64 {
        image_size % self.sector_size as u64
    }
}

/// Picks the layout from the 16-byte header of the first sector, read from `reader`.
///
/// Without a sync field the image is taken as headerless Mode 2 / 2336, whatever the
/// remaining probe bytes hold. With one, the mode byte selects the layout.
pub fn detect<R: Read>(reader: &mut R) -> Result<&'static SectorGeometry> {
    let header = SectorHeader::read_from(reader).map_err(ConvertError::Read)?;
    if !header.has_sync() {
        return Ok(&MODE2_2336);
    }
    match header.mode {
        1 => Ok(&MODE1_2352),
        2 => Ok(&MODE2_2352),
        mode => Err(ConvertError::UnsupportedMode(mode)),
    }
}

/// Builds one raw sector whose payload is `fill` repeated and whose other bytes are
/// marker values, so a wrong payload offset shows up in the output.
#[cfg(test)]
pub(crate) fn build_sector(geometry: &SectorGeometry, mode: u8, fill: u8) -> Vec<u8> {
    let mut sector = vec![0xEE; geometry.sector_size];
    let subheader_start = if geometry.expected_mode.is_some() {
        sector[..SYNC_HEADER.len()].copy_from_slice(&SYNC_HEADER);
        sector[SYNC_HEADER.len()..MODE_OFFSET].copy_from_slice(&[0x00, 0x02, 0x00]);
        sector[MODE_OFFSET] = mode;
        HEADER_SIZE
    } else {
        0
    };
    sector[subheader_start..geometry.header_size].fill(0xAA);
    sector[geometry.payload_range()].fill(fill);
    sector
}

/// `count` sectors, sector `i` carrying payload byte `i % 256`.
#[cfg(test)]
pub(crate) fn build_image(geometry: &SectorGeometry, count: usize) -> Vec<u8> {
    let mode = geometry.expected_mode.unwrap_or(0);
    (0..count)
        .flat_map(|i| build_sector(geometry, mode, i as u8))
        .collect()
}
