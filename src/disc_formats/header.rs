// src/disc_formats/header.rs
use byteorder::ReadBytesExt;
use std::io::{self, Read};

/// Synchronization field that opens every raw 2352-byte data sector.
pub const SYNC_HEADER: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];
pub const ADDRESS_SIZE: usize = 3;
/// Sync (12) + address (3), then the mode byte.
pub const MODE_OFFSET: usize = SYNC_HEADER.len() + ADDRESS_SIZE;
pub const HEADER_SIZE: usize = MODE_OFFSET + 1;

/// The sync/address/mode header of a raw sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectorHeader {
    pub sync: [u8; 12],
    pub address: [u8; ADDRESS_SIZE],
    pub mode: u8,
}

impl SectorHeader {
    /// Reads exactly `HEADER_SIZE` bytes from `reader`.
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut raw = [0u8; HEADER_SIZE];
        reader.read_exact(&mut raw)?;
        let mut fields = &raw[..];
        let mut sync = [0u8; 12];
        fields.read_exact(&mut sync)?;
        let mut address = [0u8; ADDRESS_SIZE];
        fields.read_exact(&mut address)?;
        let mode = fields.read_u8()?;
        Ok(SectorHeader { sync, address, mode })
    }

    pub fn has_sync(&self) -> bool {
        self.sync == SYNC_HEADER
    }

    /// Decodes the BCD address into (minute, second, frame).
    pub fn msf(&self) -> (u8, u8, u8) {
        (from_bcd(self.address[0]), from_bcd(self.address[1]), from_bcd(self.address[2]))
    }
}

fn from_bcd(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_mode_offset_is_fifteen() {
        assert_eq!(MODE_OFFSET, 15);
        assert_eq!(HEADER_SIZE, 16);
    }

    #[test]
    fn test_read_header_fields() {
        let mut raw = SYNC_HEADER.to_vec();
        raw.extend_from_slice(&[0x00, 0x02, 0x16, 0x01]);
        let header = SectorHeader::read_from(&mut Cursor::new(raw)).unwrap();
        assert!(header.has_sync());
        assert_eq!(header.mode, 1);
        assert_eq!(header.msf(), (0, 2, 16));
    }

    #[test]
    fn test_read_consumes_one_header() {
        let mut raw = SYNC_HEADER.to_vec();
        raw.extend_from_slice(&[0x00, 0x02, 0x00, 0x02, 0xAA, 0xBB]);
        let mut cursor = Cursor::new(raw);
        let header = SectorHeader::read_from(&mut cursor).unwrap();
        assert_eq!(header.mode, 2);
        assert_eq!(cursor.position(), HEADER_SIZE as u64);
    }

    #[test]
    fn test_short_header_is_an_error() {
        let raw = [0u8; HEADER_SIZE - 1];
        let err = SectorHeader::read_from(&mut &raw[..]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
