use embedded_graphics::pixelcolor::Rgb565;
use fixed::types::I16F16;
use fixed_sqrt::FixedSqrt;
use heapless::Vec;

use super::super::config::{
    CHANNEL_MAX, CHANNEL_MIN, GRAPH_HEIGHT, GRAPH_LEFT_MARGIN, GRAPH_TOP_OFFSET, GRAPH_WIDTH,
    NETWORK_PALETTE, RSSI_MAX, RSSI_MIN, SCAN_MAX_NETWORKS,
};
use super::super::types::{ScanRecord, SecondaryChannel, Ssid};

pub type Fx = I16F16;

/// Drawing geometry for one ranked network: a half-oval "energy" lobe that
/// is widest at the channel baseline and tapers to a point at the RSSI apex.
///
/// Recomputed from the ranked list on every redraw, never persisted. The
/// color follows the entry's rank, so a network may change color between
/// redraws when its rank shifts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpectrumLobe {
    pub x_center: i32,
    pub width_pixels: i32,
    pub y_top: i32,
    pub y_bottom: i32,
    pub color: Rgb565,
    pub ssid: Ssid,
}

impl SpectrumLobe {
    pub fn height(&self) -> i32 {
        self.y_bottom - self.y_top
    }

    /// Lobe width at row `y`: `width_pixels * sqrt(progress)` where progress
    /// runs 0 at the apex to 1 at the baseline.
    pub fn width_at(&self, y: i32) -> i32 {
        let height = self.height();
        if height <= 0 || y < self.y_top || y > self.y_bottom {
            return 0;
        }
        let progress = Fx::from_num(y - self.y_top) / Fx::from_num(height);
        let factor = FixedSqrt::sqrt(progress);
        (Fx::from_num(self.width_pixels) * factor).to_num::<i32>()
    }

    /// Horizontal span of the lobe at row `y`, clamped to the graph bounds.
    /// `None` when the clamped span is empty.
    pub fn extent_at(&self, y: i32) -> Option<(i32, i32)> {
        let width = self.width_at(y);
        Self::clamped_span(self.x_center - width / 2, self.x_center + width / 2)
    }

    /// Span of the straight bottom edge at the baseline.
    pub fn baseline_extent(&self) -> Option<(i32, i32)> {
        Self::clamped_span(
            self.x_center - self.width_pixels / 2,
            self.x_center + self.width_pixels / 2,
        )
    }

    fn clamped_span(x_start: i32, x_end: i32) -> Option<(i32, i32)> {
        let x_start = x_start.max(GRAPH_LEFT_MARGIN);
        let x_end = x_end.min(GRAPH_LEFT_MARGIN + GRAPH_WIDTH);
        (x_end > x_start).then_some((x_start, x_end))
    }
}

/// Linear channel-to-pixel map across the graph width.
pub const fn channel_to_x(channel: i32) -> i32 {
    GRAPH_LEFT_MARGIN + (channel - CHANNEL_MIN) * GRAPH_WIDTH / (CHANNEL_MAX - CHANNEL_MIN)
}

/// Linear RSSI-to-pixel map. Out-of-range values are clamped, not rejected.
pub const fn rssi_to_y(rssi: i32) -> i32 {
    let clamped = if rssi < RSSI_MIN {
        RSSI_MIN
    } else if rssi > RSSI_MAX {
        RSSI_MAX
    } else {
        rssi
    };
    GRAPH_TOP_OFFSET + GRAPH_HEIGHT - (clamped - RSSI_MIN) * GRAPH_HEIGHT / (RSSI_MAX - RSSI_MIN)
}

pub const fn baseline_y() -> i32 {
    GRAPH_TOP_OFFSET + GRAPH_HEIGHT
}

/// Center of the occupied span and its width in channel units: 20 MHz covers
/// 4 channels around the primary, 40 MHz covers 8 shifted toward the bonded
/// secondary.
pub fn occupied_span(channel: u8, second: SecondaryChannel) -> (i32, i32) {
    let channel = channel as i32;
    match second {
        SecondaryChannel::None => (channel, 4),
        SecondaryChannel::Above => (channel + 2, 8),
        SecondaryChannel::Below => (channel - 2, 8),
    }
}

pub fn lobe_for(record: &ScanRecord, rank: usize) -> SpectrumLobe {
    let (center_channel, width_channels) = occupied_span(record.channel, record.second);
    SpectrumLobe {
        x_center: channel_to_x(center_channel),
        width_pixels: width_channels * GRAPH_WIDTH / (CHANNEL_MAX - CHANNEL_MIN),
        y_top: rssi_to_y(record.rssi as i32),
        y_bottom: baseline_y(),
        color: NETWORK_PALETTE[rank % NETWORK_PALETTE.len()],
        ssid: record.ssid,
    }
}

pub fn project(ranked: &[ScanRecord]) -> Vec<SpectrumLobe, SCAN_MAX_NETWORKS> {
    ranked
        .iter()
        .take(SCAN_MAX_NETWORKS)
        .enumerate()
        .map(|(rank, record)| lobe_for(record, rank))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RssiTick {
    pub rssi: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelTick {
    pub channel: i32,
    pub x: i32,
    pub labelled: bool,
}

/// Scale ticks every 10 dB across the displayed RSSI range, inclusive.
pub fn rssi_ticks() -> impl Iterator<Item = RssiTick> {
    (RSSI_MIN..=RSSI_MAX).step_by(10).map(|rssi| RssiTick {
        rssi,
        y: rssi_to_y(rssi),
    })
}

/// One tick per integer channel across the displayed range. Labels only
/// appear for channels in real-world regulatory use: 1..=11 and 13.
pub fn channel_ticks() -> impl Iterator<Item = ChannelTick> {
    (CHANNEL_MIN..=CHANNEL_MAX).map(|channel| ChannelTick {
        channel,
        x: channel_to_x(channel),
        labelled: channel_has_label(channel),
    })
}

pub const fn channel_has_label(channel: i32) -> bool {
    (channel >= 1 && channel <= 11) || channel == 13
}

/// X positions of the vertical gridlines, one per channel 0..=15.
pub fn channel_gridlines() -> impl Iterator<Item = i32> {
    (0..=15).map(channel_to_x)
}
