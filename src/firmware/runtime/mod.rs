#[cfg(feature = "esp-hal-runtime")]
pub mod scan_task;
pub mod scheduler;

use heapless::Vec;

use super::config::SCAN_MAX_NETWORKS;
use super::graph::geometry::{self, SpectrumLobe};
use super::scan::merge::RankedList;
use super::view::table::{self, TableRow};

/// Everything the render side needs from one scan cycle: the ranked list,
/// its spectrum geometry and its table rows. Replaced wholesale under the
/// frame mutex so a redraw never observes a partially merged cycle.
pub struct RadarFrame {
    pub ranked: RankedList,
    pub lobes: Vec<SpectrumLobe, SCAN_MAX_NETWORKS>,
    pub rows: Vec<TableRow, SCAN_MAX_NETWORKS>,
}

impl RadarFrame {
    pub const fn new() -> Self {
        Self {
            ranked: RankedList::new(),
            lobes: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Installs one merged cycle and derives its presentation data. Callers
    /// merge and log outside the frame mutex and hold it only for this call.
    pub fn replace(&mut self, ranked: RankedList) {
        self.lobes = geometry::project(&ranked);
        self.rows = table::table_rows(&ranked);
        self.ranked = ranked;
    }

    pub fn clear(&mut self) {
        self.ranked.clear();
        self.lobes.clear();
        self.rows.clear();
    }
}

impl Default for RadarFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
