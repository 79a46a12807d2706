use embedded_storage::{ReadStorage, Storage};
use esp_storage::FlashStorage;

use super::super::config::SPEED_STORE_RECORD_LEN;
use super::record::{encode_record, parse_record};

/// Persisted scan-speed slider position, kept in the last flash sector as a
/// small checksummed record.
pub struct SpeedStore<'d> {
    flash: FlashStorage<'d>,
    offset: u32,
}

impl<'d> SpeedStore<'d> {
    pub fn new(flash_peripheral: esp_hal::peripherals::FLASH<'d>) -> Self {
        let flash = FlashStorage::new(flash_peripheral).multicore_auto_park();
        let capacity = flash.capacity() as u32;
        let offset = capacity.saturating_sub(FlashStorage::SECTOR_SIZE);
        Self { flash, offset }
    }

    pub fn load_step(&mut self) -> Option<u8> {
        let mut record = [0u8; SPEED_STORE_RECORD_LEN];
        self.flash.read(self.offset, &mut record).ok()?;
        parse_record(&record)
    }

    pub fn save_step(&mut self, step: u8) {
        if self.load_step() == Some(step) {
            return;
        }
        let _ = self.flash.write(self.offset, &encode_record(step));
    }
}
