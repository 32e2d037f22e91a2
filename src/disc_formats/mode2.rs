// src/disc_formats/mode2.rs

use super::SectorGeometry;

/// Mode 2 raw sector: sync (12), address (3), mode (1), subheader (8), data (2048), EDC/ECC (280).
pub const MODE2_2352: SectorGeometry = SectorGeometry {
    sector_size: 2352,
    header_size: 24,
    expected_mode: Some(2),
    name: "Mode 2 / 2352",
};

/// Mode 2 without the sync/address/mode header: subheader (8), data (2048), EDC/ECC (280).
/// No mode byte is stored, so sectors are never checked.
pub const MODE2_2336: SectorGeometry = SectorGeometry {
    sector_size: 2336,
    header_size: 8,
    expected_mode: None,
    name: "Mode 2 / 2336",
};
