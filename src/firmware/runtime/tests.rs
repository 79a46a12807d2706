use super::*;
use crate::firmware::config::NETWORK_PALETTE;
use crate::firmware::scan::merge::NetworkTable;
use crate::firmware::types::{AuthMode, Bssid, ScanRecord, SecondaryChannel, Ssid};
use crate::firmware::view::console;

fn record(id: u8, name: &[u8], rssi: i8, channel: u8) -> ScanRecord {
    ScanRecord {
        bssid: Bssid([id, 0, 0, 0, 0, 1]),
        ssid: Ssid::from_bytes(name),
        rssi,
        channel,
        second: SecondaryChannel::None,
        auth: AuthMode::Wpa2,
    }
}

#[test]
fn replace_publishes_ranked_geometry_and_rows_together() {
    let mut table = NetworkTable::new();
    let mut frame = RadarFrame::new();
    let scan = [
        record(0xBB, b"office", -60, 11),
        record(0xAA, b"home", -45, 6),
    ];

    frame.replace(table.merge(&scan, false));

    assert_eq!(frame.ranked.len(), 2);
    assert_eq!(frame.lobes.len(), 2);
    assert_eq!(frame.rows.len(), 2);

    // Strongest first, and every derived view follows that order.
    assert_eq!(frame.ranked[0].rssi, -45);
    assert_eq!(frame.rows[0].cells()[1], "6");
    assert_eq!(frame.rows[1].cells()[1], "11");
    assert_eq!(frame.lobes[0].color, NETWORK_PALETTE[0]);
    assert_eq!(frame.lobes[1].color, NETWORK_PALETTE[1]);
}

#[test]
fn next_cycle_replaces_the_frame_wholesale() {
    let mut table = NetworkTable::new();
    let mut frame = RadarFrame::new();

    frame.replace(table.merge(&[record(1, b"a", -40, 1)], false));
    frame.replace(table.merge(&[record(2, b"b", -70, 3)], false));

    assert_eq!(frame.ranked.len(), 1);
    assert_eq!(frame.ranked[0].bssid, Bssid([2, 0, 0, 0, 0, 1]));
    assert_eq!(frame.rows[0].cells()[0], "b");
}

#[test]
fn persistent_cycles_accumulate_until_cleared() {
    let mut table = NetworkTable::new();
    let mut frame = RadarFrame::new();

    frame.replace(table.merge(&[record(1, b"a", -40, 1)], true));
    frame.replace(table.merge(&[record(2, b"b", -70, 3)], true));
    assert_eq!(frame.ranked.len(), 2);

    // Persistence switched off: explicit clear, then a fresh scan-only cycle.
    table.clear();
    frame.clear();
    assert!(frame.ranked.is_empty());
    assert!(frame.rows.is_empty());

    frame.replace(table.merge(&[record(3, b"c", -50, 5)], false));
    assert_eq!(frame.ranked.len(), 1);
}

#[test]
fn console_dump_from_the_merged_snapshot_matches_the_published_frame() {
    // The scan task logs from its task-local ranked list before installing
    // the frame, so the dump must not depend on reading the frame back.
    let mut table = NetworkTable::new();
    let mut frame = RadarFrame::new();
    let scan = [
        record(0xAA, b"home", -45, 6),
        record(0xBB, b"office", -60, 11),
    ];

    let ranked = table.merge(&scan, false);
    let mut from_snapshot: heapless::String<1024> = heapless::String::new();
    console::write_network_table(&mut from_snapshot, &ranked).unwrap();

    frame.replace(ranked);
    let mut from_frame: heapless::String<1024> = heapless::String::new();
    console::write_network_table(&mut from_frame, &frame.ranked).unwrap();

    assert_eq!(from_snapshot, from_frame);
}
