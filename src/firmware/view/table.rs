use core::fmt::Write as _;

use heapless::{String, Vec};

use super::super::config::{SCAN_MAX_NETWORKS, SSID_TABLE_TRUNCATE};
use super::super::types::{AuthMode, ScanRecord, SecondaryChannel};

pub const TABLE_COLUMNS: usize = 5;

/// Column pixel widths handed to the external table widget, sized to fill
/// the 640px info window with room for a scrollbar.
pub const TABLE_COLUMN_WIDTHS: [u16; TABLE_COLUMNS] = [220, 60, 85, 95, 150];

/// One formatted row for the external table widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub ssid: String<SSID_TABLE_TRUNCATE>,
    pub channel: String<4>,
    pub rssi: String<8>,
    pub bandwidth: &'static str,
    pub security: &'static str,
}

impl TableRow {
    pub fn cells(&self) -> [&str; TABLE_COLUMNS] {
        [
            self.ssid.as_str(),
            self.channel.as_str(),
            self.rssi.as_str(),
            self.bandwidth,
            self.security,
        ]
    }
}

pub fn table_rows(ranked: &[ScanRecord]) -> Vec<TableRow, SCAN_MAX_NETWORKS> {
    ranked.iter().take(SCAN_MAX_NETWORKS).map(row_for).collect()
}

pub fn row_for(record: &ScanRecord) -> TableRow {
    let mut channel: String<4> = String::new();
    let _ = write!(channel, "{}", record.channel);
    let mut rssi: String<8> = String::new();
    let _ = write!(rssi, "{}", record.rssi);
    TableRow {
        ssid: truncated_name(record),
        channel,
        rssi,
        bandwidth: bandwidth_label(record.second),
        security: security_label(record.auth),
    }
}

fn truncated_name(record: &ScanRecord) -> String<SSID_TABLE_TRUNCATE> {
    let mut name = String::new();
    for character in record.ssid.display_name().chars() {
        if name.push(character).is_err() {
            break;
        }
    }
    name
}

pub fn bandwidth_label(second: SecondaryChannel) -> &'static str {
    match second {
        SecondaryChannel::None => "20MHz",
        SecondaryChannel::Above => "40MHz+",
        SecondaryChannel::Below => "40MHz-",
    }
}

pub fn security_label(auth: AuthMode) -> &'static str {
    match auth {
        AuthMode::Open => "Open",
        AuthMode::Wep => "WEP",
        AuthMode::Wpa => "WPA",
        AuthMode::Wpa2 => "WPA2",
        AuthMode::WpaWpa2 => "WPA/WPA2",
        AuthMode::Wpa2Enterprise => "WPA2 Ent",
        AuthMode::Wpa3 => "WPA3",
        AuthMode::Wpa2Wpa3 => "WPA2/3",
        AuthMode::Wapi => "WAPI",
        AuthMode::Unknown => "Unknown",
    }
}
