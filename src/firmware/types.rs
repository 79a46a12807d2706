use super::config::{HIDDEN_SSID_LABEL, SSID_MAX};

/// Hardware address of an access point, the sole identity key for merging.
/// Network names may be duplicated or hidden and never identify anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bssid(pub [u8; 6]);

impl Bssid {
    pub const ZERO: Self = Self([0; 6]);
}

/// Network name as reported by the scan. Empty or oversized names collapse
/// to the empty form at construction and render as the hidden placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ssid {
    bytes: [u8; SSID_MAX],
    len: u8,
}

impl Ssid {
    pub const fn empty() -> Self {
        Self {
            bytes: [0; SSID_MAX],
            len: 0,
        }
    }

    pub fn from_bytes(raw: &[u8]) -> Self {
        if raw.is_empty() || raw.len() > SSID_MAX {
            return Self::empty();
        }
        let mut bytes = [0u8; SSID_MAX];
        bytes[..raw.len()].copy_from_slice(raw);
        Self {
            bytes,
            len: raw.len() as u8,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.len == 0
    }

    pub fn display_name(&self) -> &str {
        if self.len == 0 {
            return HIDDEN_SSID_LABEL;
        }
        core::str::from_utf8(&self.bytes[..self.len as usize]).unwrap_or(HIDDEN_SSID_LABEL)
    }
}

/// Whether the primary channel bonds with the adjacent channel above or
/// below it, doubling the occupied bandwidth to 40 MHz.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryChannel {
    None,
    Above,
    Below,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Open,
    Wep,
    Wpa,
    Wpa2,
    WpaWpa2,
    Wpa2Enterprise,
    Wpa3,
    Wpa2Wpa3,
    Wapi,
    Unknown,
}

/// One observed access point from a single scan cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanRecord {
    pub bssid: Bssid,
    pub ssid: Ssid,
    pub rssi: i8,
    pub channel: u8,
    pub second: SecondaryChannel,
    pub auth: AuthMode,
}

impl ScanRecord {
    pub const EMPTY: Self = Self {
        bssid: Bssid::ZERO,
        ssid: Ssid::empty(),
        rssi: 0,
        channel: 0,
        second: SecondaryChannel::None,
        auth: AuthMode::Unknown,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEvent {
    FrameUpdated { networks: u16 },
    ScanFailed,
}

/// Settings-view interactions forwarded to the scan task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiCommand {
    TogglePause,
    TogglePersistence,
    SetDwellStep(u8),
}
