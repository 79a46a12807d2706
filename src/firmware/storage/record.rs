use super::super::config::{
    SCAN_DWELL_STEPS, SPEED_STORE_MAGIC, SPEED_STORE_RECORD_LEN, SPEED_STORE_VERSION,
};
use super::super::runtime::scheduler::normalize_speed_byte;

/// Byte layout of the persisted scan-speed record: little-endian magic,
/// format version, step byte, 0xFF padding, trailing checksum.
pub fn encode_record(step: u8) -> [u8; SPEED_STORE_RECORD_LEN] {
    let mut record = [0xFFu8; SPEED_STORE_RECORD_LEN];
    record[0..4].copy_from_slice(&SPEED_STORE_MAGIC.to_le_bytes());
    record[4] = SPEED_STORE_VERSION;
    record[5] = step.min(SCAN_DWELL_STEPS);
    record[SPEED_STORE_RECORD_LEN - 1] = checksum8(&record[..SPEED_STORE_RECORD_LEN - 1]);
    record
}

/// Validates a raw record and returns the dwell step it carries. The two
/// earlier format versions stored wider speed encodings; their bytes are
/// rescaled into the current step range instead of being discarded.
pub fn parse_record(record: &[u8; SPEED_STORE_RECORD_LEN]) -> Option<u8> {
    if record.iter().all(|&byte| byte == 0xFF) {
        return None;
    }
    if u32::from_le_bytes([record[0], record[1], record[2], record[3]]) != SPEED_STORE_MAGIC {
        return None;
    }
    let expected = checksum8(&record[..SPEED_STORE_RECORD_LEN - 1]);
    if record[SPEED_STORE_RECORD_LEN - 1] != expected {
        return None;
    }
    match record[4] {
        1 | 2 => Some(normalize_speed_byte(record[5])),
        SPEED_STORE_VERSION => (record[5] <= SCAN_DWELL_STEPS).then_some(record[5]),
        _ => None,
    }
}

fn checksum8(bytes: &[u8]) -> u8 {
    let mut acc = 0xC3u8;
    for &byte in bytes {
        acc ^= byte.rotate_left(3);
    }
    acc
}

#[cfg(test)]
mod tests;
