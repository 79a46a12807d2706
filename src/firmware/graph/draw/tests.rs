use super::*;
use crate::firmware::config::{
    INFO_WINDOW_HEIGHT, INFO_WINDOW_WIDTH, NETWORK_PALETTE,
};
use crate::firmware::graph::geometry::{channel_to_x, lobe_for};
use crate::firmware::types::{AuthMode, Bssid, ScanRecord, SecondaryChannel, Ssid};

struct Framebuffer {
    pixels: std::vec::Vec<Rgb565>,
}

impl Framebuffer {
    fn new() -> Self {
        Self {
            pixels: std::vec![
                Rgb565::new(31, 0, 31);
                (INFO_WINDOW_WIDTH * INFO_WINDOW_HEIGHT) as usize
            ],
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Rgb565 {
        self.pixels[(y * INFO_WINDOW_WIDTH + x) as usize]
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(INFO_WINDOW_WIDTH as u32, INFO_WINDOW_HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if (0..INFO_WINDOW_WIDTH).contains(&point.x)
                && (0..INFO_WINDOW_HEIGHT).contains(&point.y)
            {
                self.pixels[(point.y * INFO_WINDOW_WIDTH + point.x) as usize] = color;
            }
        }
        Ok(())
    }
}

#[test]
fn empty_frame_draws_canvas_axes_and_gridlines() {
    let mut framebuffer = Framebuffer::new();
    draw_spectrum(&mut framebuffer, &[]).unwrap();

    // Interior pixel off any gridline or tick row stays canvas black.
    assert_eq!(framebuffer.pixel(channel_to_x(6) + 3, 100), Rgb565::BLACK);
    // Left axis column.
    assert_eq!(
        framebuffer.pixel(GRAPH_LEFT_MARGIN - 1, GRAPH_TOP_OFFSET + 50),
        AXIS_COLOR
    );
    // Vertical gridline for channel 6, on a row between the 10 dB lines.
    assert_eq!(framebuffer.pixel(channel_to_x(6), 100), GRIDLINE_COLOR);
}

#[test]
fn lobe_fill_and_outline_land_inside_the_graph() {
    let record = ScanRecord {
        bssid: Bssid([0xAA; 6]),
        ssid: Ssid::from_bytes(b"net"),
        rssi: -50,
        channel: 6,
        second: SecondaryChannel::None,
        auth: AuthMode::Wpa2,
    };
    let lobe = lobe_for(&record, 0);

    let mut framebuffer = Framebuffer::new();
    draw_spectrum(&mut framebuffer, &[lobe]).unwrap();

    // A row well below the apex is filled with the dimmed rank-0 color at
    // the lobe center.
    let fill_row = lobe.y_bottom - 10;
    assert_eq!(
        framebuffer.pixel(lobe.x_center, fill_row),
        dimmed(NETWORK_PALETTE[0])
    );
    // Far from the lobe, on a row and column between gridlines, the canvas
    // stays black.
    assert_eq!(framebuffer.pixel(channel_to_x(13) + 3, 250), Rgb565::BLACK);
    // The baseline edge carries the full-strength color.
    assert_eq!(
        framebuffer.pixel(lobe.x_center, lobe.y_bottom),
        NETWORK_PALETTE[0]
    );
}
