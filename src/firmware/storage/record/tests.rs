use super::*;

fn record_with_version(version: u8, raw: u8) -> [u8; SPEED_STORE_RECORD_LEN] {
    let mut record = encode_record(0);
    record[4] = version;
    record[5] = raw;
    record[SPEED_STORE_RECORD_LEN - 1] = checksum8(&record[..SPEED_STORE_RECORD_LEN - 1]);
    record
}

#[test]
fn round_trips_every_slider_step() {
    for step in 0..=SCAN_DWELL_STEPS {
        assert_eq!(parse_record(&encode_record(step)), Some(step));
    }
}

#[test]
fn erased_sector_reads_as_absent() {
    assert_eq!(parse_record(&[0xFF; SPEED_STORE_RECORD_LEN]), None);
}

#[test]
fn wrong_magic_is_rejected() {
    let mut record = encode_record(9);
    record[0] ^= 0x01;
    assert_eq!(parse_record(&record), None);
}

#[test]
fn stale_checksum_is_rejected() {
    // Payload changed without refreshing the trailing checksum.
    let mut record = encode_record(9);
    record[5] = 7;
    assert_eq!(parse_record(&record), None);
}

#[test]
fn legacy_versions_rescale_their_speed_byte() {
    // Version 2 stored 0..=19.
    assert_eq!(parse_record(&record_with_version(2, 19)), Some(18));
    assert_eq!(parse_record(&record_with_version(2, 9)), Some(9));
    // Version 1 stored 0..=100.
    assert_eq!(parse_record(&record_with_version(1, 50)), Some(9));
    assert_eq!(parse_record(&record_with_version(1, 100)), Some(18));
}

#[test]
fn unknown_version_is_rejected() {
    assert_eq!(parse_record(&record_with_version(4, 9)), None);
}

#[test]
fn out_of_range_current_step_is_rejected() {
    let record = record_with_version(SPEED_STORE_VERSION, SCAN_DWELL_STEPS + 1);
    assert_eq!(parse_record(&record), None);
}
