use esp_hal::timer::timg::TimerGroup;
use esp_println::println;
use static_cell::StaticCell;
use wifiradar::firmware::{
    config::channels::APP_EVENTS, runtime::scan_task::scan_task, storage::SpeedStore,
    types::AppEvent,
};

const HEAP_BYTES: usize = 96 * 1024;

pub(crate) fn run() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    esp_alloc::heap_allocator!(size: HEAP_BYTES);

    let speed_store = SpeedStore::new(peripherals.FLASH);

    static RADIO_CTRL: StaticCell<esp_radio::Controller<'static>> = StaticCell::new();
    let radio_ctrl = match esp_radio::init() {
        Ok(controller) => RADIO_CTRL.init(controller),
        Err(err) => {
            println!("app: esp_radio::init err={:?}", err);
            halt_forever();
        }
    };
    let (wifi_controller, _ifaces) = match esp_radio::wifi::new(
        radio_ctrl,
        peripherals.WIFI,
        esp_radio::wifi::Config::default(),
    ) {
        Ok(parts) => parts,
        Err(err) => {
            println!("app: wifi init err={:?}", err);
            halt_forever();
        }
    };

    let mut executor = esp_rtos::embassy::Executor::new();
    let executor = unsafe { make_static(&mut executor) };
    executor.run(move |spawner| {
        spawner.must_spawn(scan_task(wifi_controller, speed_store));
        spawner.must_spawn(frame_event_task());
    });
}

/// Drains scan-cycle notifications. The panel redraw hangs off these events;
/// without a panel attached the loop records the outcome on the console.
#[embassy_executor::task]
async fn frame_event_task() {
    loop {
        match APP_EVENTS.receive().await {
            AppEvent::FrameUpdated { networks } => {
                println!("render: frame networks={}", networks);
            }
            AppEvent::ScanFailed => {
                println!("render: scan failed; keeping last frame");
            }
        }
    }
}

unsafe fn make_static<T>(value: &mut T) -> &'static mut T {
    unsafe { core::mem::transmute(value) }
}

fn halt_forever() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
