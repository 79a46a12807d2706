use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel, mutex::Mutex};

use super::super::runtime::RadarFrame;
use super::super::types::{AppEvent, UiCommand};

/// Latest scan cycle output. The scan task replaces the whole frame under
/// this mutex; the render side only ever observes a complete cycle.
pub static RADAR_FRAME: Mutex<CriticalSectionRawMutex, RadarFrame> = Mutex::new(RadarFrame::new());

pub static APP_EVENTS: Channel<CriticalSectionRawMutex, AppEvent, 8> = Channel::new();
pub static UI_COMMANDS: Channel<CriticalSectionRawMutex, UiCommand, 8> = Channel::new();
