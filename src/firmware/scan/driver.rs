use embassy_time::Duration;
use esp_radio::wifi::{
    AccessPointInfo, AuthMethod, ScanConfig, ScanTypeConfig,
    SecondaryChannel as RadioSecondaryChannel,
};

use super::super::config::SCAN_MAX_NETWORKS;
use super::super::runtime::scheduler::clamp_dwell_ms;
use super::super::types::{AuthMode, Bssid, ScanRecord, SecondaryChannel, Ssid};

/// Active scan over all channels with a fixed per-channel dwell. Hidden
/// networks are included; they render under the placeholder name.
pub fn spectrum_scan_config(dwell_ms: u16) -> ScanConfig<'static> {
    let dwell = Duration::from_millis(u64::from(clamp_dwell_ms(dwell_ms)));
    ScanConfig::default()
        .with_show_hidden(true)
        .with_max(SCAN_MAX_NETWORKS)
        .with_scan_type(ScanTypeConfig::Active {
            min: dwell.into(),
            max: dwell.into(),
        })
}

pub fn record_from_ap(ap: &AccessPointInfo) -> ScanRecord {
    ScanRecord {
        bssid: Bssid(ap.bssid),
        ssid: Ssid::from_bytes(ap.ssid.as_bytes()),
        rssi: ap.signal_strength,
        channel: ap.channel,
        second: secondary_from(ap.secondary_channel),
        auth: auth_from(ap.auth_method),
    }
}

fn secondary_from(second: RadioSecondaryChannel) -> SecondaryChannel {
    match second {
        RadioSecondaryChannel::None => SecondaryChannel::None,
        RadioSecondaryChannel::Above => SecondaryChannel::Above,
        RadioSecondaryChannel::Below => SecondaryChannel::Below,
    }
}

fn auth_from(method: Option<AuthMethod>) -> AuthMode {
    match method {
        Some(AuthMethod::None) => AuthMode::Open,
        Some(AuthMethod::Wep) => AuthMode::Wep,
        Some(AuthMethod::Wpa) => AuthMode::Wpa,
        Some(AuthMethod::Wpa2Personal) => AuthMode::Wpa2,
        Some(AuthMethod::WpaWpa2Personal) => AuthMode::WpaWpa2,
        Some(AuthMethod::Wpa2Enterprise) => AuthMode::Wpa2Enterprise,
        Some(AuthMethod::Wpa3Personal) => AuthMode::Wpa3,
        Some(AuthMethod::Wpa2Wpa3Personal) => AuthMode::Wpa2Wpa3,
        Some(AuthMethod::WapiPersonal) => AuthMode::Wapi,
        _ => AuthMode::Unknown,
    }
}
