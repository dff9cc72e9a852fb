//! Zone-based fare calculation.

use crate::domain::Station;

/// Flat zone-based fare table, in rupees.
///
/// Same-zone trips are priced by the zone number; any cross-zone trip
/// pays one flat rate regardless of how many zones it spans. Stations
/// without a declared zone price as zone 1.
#[derive(Debug, Clone)]
pub struct FareTable {
    /// Same-zone fare for zones 1, 2 and 3.
    pub zone_fares: [u32; 3],

    /// Flat fare for any trip crossing a zone boundary.
    pub cross_zone: u32,
}

impl Default for FareTable {
    fn default() -> Self {
        Self {
            zone_fares: [5, 10, 15],
            cross_zone: 20,
        }
    }
}

impl FareTable {
    /// Fare between two stations.
    ///
    /// Symmetric in its arguments: zone comparison does not depend on
    /// travel direction.
    pub fn fare(&self, from: &Station, to: &Station) -> u32 {
        let a = from.zone_or_default();
        let b = to.zone_or_default();
        if a == b {
            let idx = (a as usize).clamp(1, self.zone_fares.len()) - 1;
            self.zone_fares[idx]
        } else {
            self.cross_zone
        }
    }
}
