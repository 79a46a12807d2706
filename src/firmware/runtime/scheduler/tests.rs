use super::*;

#[test]
fn dwell_steps_map_to_milliseconds() {
    assert_eq!(dwell_ms_for_step(0), 120);
    assert_eq!(dwell_ms_for_step(9), 1020);
    assert_eq!(dwell_ms_for_step(18), 1920);
    // Out-of-range steps saturate at the top position.
    assert_eq!(dwell_ms_for_step(200), 1920);
}

#[test]
fn dwell_is_clamped_to_radio_limits() {
    assert_eq!(clamp_dwell_ms(0), 120);
    assert_eq!(clamp_dwell_ms(120), 120);
    assert_eq!(clamp_dwell_ms(1500), 1500);
    assert_eq!(clamp_dwell_ms(5000), 2000);
}

#[test]
fn legacy_speed_bytes_rescale_linearly() {
    // Current encoding passes through.
    assert_eq!(normalize_speed_byte(0), 0);
    assert_eq!(normalize_speed_byte(9), 9);
    assert_eq!(normalize_speed_byte(18), 18);
    // 0..=19 encoding from the previous revision.
    assert_eq!(normalize_speed_byte(19), 18);
    // 0..=100 encoding from the first revision.
    assert_eq!(normalize_speed_byte(20), 3);
    assert_eq!(normalize_speed_byte(50), 9);
    assert_eq!(normalize_speed_byte(100), 18);
    // Corrupt bytes saturate instead of escaping the step range.
    assert_eq!(normalize_speed_byte(255), 18);
}

#[test]
fn pause_toggle_flips_between_scanning_and_paused() {
    let mut scheduler = ScanScheduler::default();
    assert!(!scheduler.is_paused());

    scheduler.handle(UiCommand::TogglePause);
    assert!(scheduler.is_paused());

    scheduler.handle(UiCommand::TogglePause);
    assert!(!scheduler.is_paused());
}

#[test]
fn disabling_persistence_requests_a_table_clear() {
    let mut scheduler = ScanScheduler::default();

    let enable = scheduler.handle(UiCommand::TogglePersistence);
    assert!(scheduler.persistence_enabled());
    assert!(!enable.clear_table);

    let disable = scheduler.handle(UiCommand::TogglePersistence);
    assert!(!scheduler.persistence_enabled());
    assert!(disable.clear_table);
}

#[test]
fn dwell_changes_request_a_flash_write_once() {
    let mut scheduler = ScanScheduler::default();

    let changed = scheduler.handle(UiCommand::SetDwellStep(12));
    assert_eq!(changed.persist_step, Some(12));
    assert_eq!(scheduler.dwell_ms(), 1320);

    let unchanged = scheduler.handle(UiCommand::SetDwellStep(12));
    assert_eq!(unchanged.persist_step, None);
}

#[test]
fn dwell_step_is_clamped_to_the_slider_range() {
    let mut scheduler = ScanScheduler::default();
    let effects = scheduler.handle(UiCommand::SetDwellStep(40));
    assert_eq!(effects.persist_step, Some(18));
    assert_eq!(scheduler.dwell_step(), 18);
}

#[test]
fn settings_still_apply_while_paused() {
    let mut scheduler = ScanScheduler::default();
    scheduler.handle(UiCommand::TogglePause);

    scheduler.handle(UiCommand::TogglePersistence);
    assert!(scheduler.persistence_enabled());
    assert!(scheduler.is_paused());

    let effects = scheduler.handle(UiCommand::SetDwellStep(3));
    assert_eq!(effects.persist_step, Some(3));
}
