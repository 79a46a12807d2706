use embassy_time::{Duration, Instant, Ticker, Timer};
use esp_println::{println, Printer};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController};

use super::super::config::{
    channels::{APP_EVENTS, RADAR_FRAME, UI_COMMANDS},
    SCAN_CHANNEL_COUNT_2G4, SCAN_DWELL_DEFAULT_STEP, SCAN_INTERVAL_MS, SCAN_MAX_NETWORKS,
};
use super::super::scan::{driver, merge::NetworkTable};
use super::super::storage::SpeedStore;
use super::super::types::{AppEvent, ScanRecord};
use super::super::view::console;
use super::scheduler::ScanScheduler;

/// Periodic scan loop. Each tick drains pending UI commands, runs one radio
/// scan at the selected dwell, merges it into the network table and publishes
/// the resulting frame.
#[embassy_executor::task]
pub async fn scan_task(
    mut controller: WifiController<'static>,
    mut speed_store: SpeedStore<'static>,
) {
    let initial_step = speed_store.load_step().unwrap_or(SCAN_DWELL_DEFAULT_STEP);
    let mut scheduler = ScanScheduler::new(initial_step);
    let mut table = NetworkTable::new();

    // Scanning only; the station config is never used to associate.
    if let Err(err) = controller.set_config(&ModeConfig::Client(ClientConfig::default())) {
        println!("scan: wifi station config err={:?}", err);
    }
    println!(
        "scan: start dwell_step={} dwell_ms={}",
        scheduler.dwell_step(),
        scheduler.dwell_ms()
    );

    let mut ticker = Ticker::every(Duration::from_millis(SCAN_INTERVAL_MS));
    loop {
        ticker.next().await;

        while let Ok(command) = UI_COMMANDS.try_receive() {
            let effects = scheduler.handle(command);
            if effects.clear_table {
                table.clear();
                RADAR_FRAME.lock().await.clear();
                let _ = APP_EVENTS.try_send(AppEvent::FrameUpdated { networks: 0 });
                println!("scan: persistence off; table cleared");
            }
            if let Some(step) = effects.persist_step {
                speed_store.save_step(step);
                println!(
                    "scan: dwell_step={} dwell_ms={}",
                    step,
                    scheduler.dwell_ms()
                );
            }
        }

        if scheduler.is_paused() {
            continue;
        }

        if !ensure_started(&mut controller).await {
            let _ = APP_EVENTS.try_send(AppEvent::ScanFailed);
            continue;
        }

        let dwell_ms = scheduler.dwell_ms();
        let config = driver::spectrum_scan_config(dwell_ms);
        let started = Instant::now();
        match controller.scan_with_config_async(config).await {
            Ok(results) => {
                let mut scan: heapless::Vec<ScanRecord, SCAN_MAX_NETWORKS> = heapless::Vec::new();
                for ap in results.iter().take(SCAN_MAX_NETWORKS) {
                    let _ = scan.push(driver::record_from_ap(ap));
                }

                let took_ms = started.elapsed().as_millis();
                let expected_ms = u64::from(dwell_ms) * SCAN_CHANNEL_COUNT_2G4;
                println!(
                    "scan: found={} dwell_ms={} took_ms={} expected_ms={}",
                    scan.len(),
                    dwell_ms,
                    took_ms,
                    expected_ms
                );

                // A zero-result scan is no update, not an empty update; the
                // frame keeps its prior contents until the next cycle.
                if scan.is_empty() {
                    continue;
                }

                // Merge and log from the task-local snapshot; the frame
                // mutex is held only long enough to install the cycle, so a
                // redraw never waits on the UART dump.
                let ranked = table.merge(&scan, scheduler.persistence_enabled());
                let networks = ranked.len() as u16;
                let _ = console::write_network_table(&mut Printer, &ranked);
                RADAR_FRAME.lock().await.replace(ranked);
                let _ = APP_EVENTS.try_send(AppEvent::FrameUpdated { networks });
            }
            Err(err) => {
                println!("scan: err={:?}", err);
                let _ = APP_EVENTS.try_send(AppEvent::ScanFailed);
            }
        }
    }
}

async fn ensure_started(controller: &mut WifiController<'static>) -> bool {
    match controller.is_started() {
        Ok(true) => true,
        Ok(false) => match controller.start_async().await {
            Ok(()) => {
                Timer::after(Duration::from_millis(800)).await;
                true
            }
            Err(err) => {
                println!("scan: wifi start err={:?}", err);
                Timer::after(Duration::from_secs(3)).await;
                false
            }
        },
        Err(err) => {
            println!("scan: wifi status err={:?}", err);
            Timer::after(Duration::from_secs(3)).await;
            false
        }
    }
}
