use heapless::Vec;

use super::super::config::SCAN_MAX_NETWORKS;
use super::super::types::ScanRecord;

pub type RankedList = Vec<ScanRecord, SCAN_MAX_NETWORKS>;

#[derive(Clone, Copy)]
struct Slot {
    record: ScanRecord,
    valid: bool,
}

impl Slot {
    const EMPTY: Self = Self {
        record: ScanRecord::EMPTY,
        valid: false,
    };
}

/// Bounded identity table backing persistence mode.
///
/// Slots are reused through a validity flag instead of compaction, so
/// insertion and eviction never shift entries. The table is the single owner
/// of retained networks; callers only see the ranked snapshot returned by
/// [`NetworkTable::merge`].
pub struct NetworkTable {
    slots: [Slot; SCAN_MAX_NETWORKS],
}

impl NetworkTable {
    pub const fn new() -> Self {
        Self {
            slots: [Slot::EMPTY; SCAN_MAX_NETWORKS],
        }
    }

    /// Consolidates one scan cycle into a ranked list, strongest first.
    ///
    /// With persistence disabled the output depends only on `scan`. With it
    /// enabled, re-observed networks are refreshed in place keeping their
    /// best-ever signal strength, unseen networks are retained indefinitely,
    /// and a full table evicts its weakest entry for a strictly stronger
    /// newcomer. Equal-strength ranking order is unspecified.
    pub fn merge(&mut self, scan: &[ScanRecord], persistence_enabled: bool) -> RankedList {
        if !persistence_enabled {
            return Self::ranked_from_scan(scan);
        }
        for observed in scan {
            self.upsert(observed);
        }
        self.ranked()
    }

    /// Drops every retained network. Invoked when persistence is switched
    /// off; never a side effect of `merge`.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.valid = false;
        }
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.valid).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ranked_from_scan(scan: &[ScanRecord]) -> RankedList {
        let mut ranked = RankedList::new();
        for record in scan.iter().take(SCAN_MAX_NETWORKS) {
            let _ = ranked.push(*record);
        }
        sort_by_signal(&mut ranked);
        ranked
    }

    fn ranked(&self) -> RankedList {
        let mut ranked = RankedList::new();
        for slot in self.slots.iter().filter(|slot| slot.valid) {
            if ranked.push(slot.record).is_err() {
                break;
            }
        }
        sort_by_signal(&mut ranked);
        ranked
    }

    fn upsert(&mut self, observed: &ScanRecord) {
        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.valid && slot.record.bssid == observed.bssid)
        {
            // Re-observed network: take every field from the new sighting,
            // but remember the best signal strength ever seen.
            let best_rssi = slot.record.rssi.max(observed.rssi);
            slot.record = *observed;
            slot.record.rssi = best_rssi;
            return;
        }

        if let Some(slot) = self.slots.iter_mut().find(|slot| !slot.valid) {
            *slot = Slot {
                record: *observed,
                valid: true,
            };
            return;
        }

        // Full table: only a strictly stronger newcomer evicts the weakest
        // entry. Equal strength is discarded.
        if let Some(weakest) = self.weakest_index() {
            if observed.rssi > self.slots[weakest].record.rssi {
                self.slots[weakest] = Slot {
                    record: *observed,
                    valid: true,
                };
            }
        }
    }

    fn weakest_index(&self) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.valid)
            .min_by_key(|(_, slot)| slot.record.rssi)
            .map(|(index, _)| index)
    }
}

impl Default for NetworkTable {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_by_signal(ranked: &mut RankedList) {
    ranked.sort_unstable_by(|a, b| b.rssi.cmp(&a.rssi));
}
