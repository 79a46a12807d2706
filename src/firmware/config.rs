pub mod channels;

use embedded_graphics::pixelcolor::Rgb565;

// UI layout: 800x480 panel split into a 640px info window and a 160px menu bar.
pub const INFO_WINDOW_WIDTH: i32 = 640;
pub const INFO_WINDOW_HEIGHT: i32 = 480;
pub const MENU_BAR_WIDTH: i32 = 160;

// Graph placement inside the info window. Margins leave room for the RSSI
// scale on the left and the channel scale plus axis title below.
pub const GRAPH_LEFT_MARGIN: i32 = 60;
pub const GRAPH_RIGHT_MARGIN: i32 = 10;
pub const GRAPH_TOP_OFFSET: i32 = 10;
pub const GRAPH_BOTTOM_MARGIN: i32 = 40;
pub const GRAPH_WIDTH: i32 = INFO_WINDOW_WIDTH - GRAPH_LEFT_MARGIN - GRAPH_RIGHT_MARGIN;
pub const GRAPH_HEIGHT: i32 = INFO_WINDOW_HEIGHT - GRAPH_TOP_OFFSET - GRAPH_BOTTOM_MARGIN;

// Display range of the graph axes. RSSI outside this window is clamped for
// drawing only; merge and ranking always see the raw value.
pub const RSSI_MIN: i32 = -100;
pub const RSSI_MAX: i32 = -30;
pub const CHANNEL_MIN: i32 = -1;
pub const CHANNEL_MAX: i32 = 15;

// Scan limits. 64 matches the single-scan bound of the radio's scan API.
pub const SCAN_MAX_NETWORKS: usize = 64;
pub const SCAN_INTERVAL_MS: u64 = 1000;
pub const SCAN_CHANNEL_COUNT_2G4: u64 = 14;

// Per-channel dwell, selected by a 19-position slider: 120ms + step * 100ms.
pub const SCAN_DWELL_MIN_MS: u16 = 120;
pub const SCAN_DWELL_MAX_MS: u16 = 2000;
pub const SCAN_DWELL_STEP_MS: u16 = 100;
pub const SCAN_DWELL_STEPS: u8 = 18;
pub const SCAN_DWELL_DEFAULT_STEP: u8 = 9;

pub const SSID_MAX: usize = 32;
pub const SSID_TABLE_TRUNCATE: usize = 25;
pub const HIDDEN_SSID_LABEL: &str = "(hidden)";

const fn rgb888(hex: u32) -> Rgb565 {
    Rgb565::new(
        ((hex >> 16 & 0xFF) >> 3) as u8,
        ((hex >> 8 & 0xFF) >> 2) as u8,
        ((hex & 0xFF) >> 3) as u8,
    )
}

// Lobe colors cycle by rank position, not by network identity.
pub const NETWORK_PALETTE: [Rgb565; 5] = [
    rgb888(0x4a6670),
    rgb888(0x668f80),
    rgb888(0xa0af84),
    rgb888(0xc3b59f),
    rgb888(0xd6a2ad),
];

pub const AXIS_COLOR: Rgb565 = rgb888(0x444444);
pub const GRIDLINE_COLOR: Rgb565 = rgb888(0x333333);
pub const SCALE_LABEL_COLOR: Rgb565 = rgb888(0x888888);

// Flash record wrapping the persisted scan-speed byte.
pub const SPEED_STORE_MAGIC: u32 = 0x5746_5251; // "WFRQ"
pub const SPEED_STORE_VERSION: u8 = 3;
pub const SPEED_STORE_RECORD_LEN: usize = 8;
