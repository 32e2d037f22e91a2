// src/disc_formats/mode1.rs

use super::SectorGeometry;

/// Mode 1 raw sector: sync (12), address (3), mode (1), data (2048), EDC/ECC (288).
pub const MODE1_2352: SectorGeometry = SectorGeometry {
    sector_size: 2352,
    header_size: 16,
    expected_mode: Some(1),
    name: "Mode 1 / 2352",
};
