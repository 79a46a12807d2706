use core::fmt::Write as _;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Alignment, Text},
};
use heapless::String;

use super::super::config::{
    AXIS_COLOR, GRAPH_HEIGHT, GRAPH_LEFT_MARGIN, GRAPH_TOP_OFFSET, GRAPH_WIDTH, GRIDLINE_COLOR,
    INFO_WINDOW_HEIGHT, INFO_WINDOW_WIDTH, SCALE_LABEL_COLOR,
};
use super::geometry::{self, SpectrumLobe};

/// Renders the full spectrum view into the drawing backend: black canvas,
/// axis frame, gridlines, scale labels and one lobe per ranked network.
pub fn draw_spectrum<D>(target: &mut D, lobes: &[SpectrumLobe]) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::zero(),
        Size::new(INFO_WINDOW_WIDTH as u32, INFO_WINDOW_HEIGHT as u32),
    )
    .into_styled(PrimitiveStyle::with_fill(Rgb565::BLACK))
    .draw(target)?;

    draw_gridlines(target)?;
    draw_axis_frame(target)?;
    draw_scale_labels(target)?;
    draw_axis_titles(target)?;

    for lobe in lobes {
        draw_lobe(target, lobe)?;
    }
    Ok(())
}

fn draw_axis_frame<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_fill(AXIS_COLOR);
    let frame = [
        // Left axis.
        Rectangle::new(
            Point::new(GRAPH_LEFT_MARGIN - 1, GRAPH_TOP_OFFSET),
            Size::new(2, GRAPH_HEIGHT as u32),
        ),
        // Bottom axis.
        Rectangle::new(
            Point::new(GRAPH_LEFT_MARGIN, GRAPH_TOP_OFFSET + GRAPH_HEIGHT),
            Size::new(GRAPH_WIDTH as u32, 2),
        ),
        // Top border.
        Rectangle::new(
            Point::new(GRAPH_LEFT_MARGIN, GRAPH_TOP_OFFSET),
            Size::new(GRAPH_WIDTH as u32, 2),
        ),
        // Right border.
        Rectangle::new(
            Point::new(GRAPH_LEFT_MARGIN + GRAPH_WIDTH, GRAPH_TOP_OFFSET),
            Size::new(2, GRAPH_HEIGHT as u32),
        ),
    ];
    for rect in frame {
        rect.into_styled(style).draw(target)?;
    }
    Ok(())
}

fn draw_gridlines<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(GRIDLINE_COLOR, 1);
    for x in geometry::channel_gridlines() {
        Line::new(
            Point::new(x, GRAPH_TOP_OFFSET),
            Point::new(x, GRAPH_TOP_OFFSET + GRAPH_HEIGHT),
        )
        .into_styled(style)
        .draw(target)?;
    }
    for tick in geometry::rssi_ticks() {
        Line::new(
            Point::new(GRAPH_LEFT_MARGIN, tick.y),
            Point::new(GRAPH_LEFT_MARGIN + GRAPH_WIDTH, tick.y),
        )
        .into_styled(style)
        .draw(target)?;
    }
    Ok(())
}

fn draw_scale_labels<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&FONT_6X10, SCALE_LABEL_COLOR);
    for tick in geometry::rssi_ticks() {
        let mut label: String<8> = String::new();
        let _ = write!(label, "{}", tick.rssi);
        Text::with_alignment(
            &label,
            Point::new(GRAPH_LEFT_MARGIN - 8, tick.y + 3),
            style,
            Alignment::Right,
        )
        .draw(target)?;
    }
    for tick in geometry::channel_ticks().filter(|tick| tick.labelled) {
        let mut label: String<4> = String::new();
        let _ = write!(label, "{}", tick.channel);
        Text::with_alignment(
            &label,
            Point::new(tick.x, GRAPH_TOP_OFFSET + GRAPH_HEIGHT + 15),
            style,
            Alignment::Center,
        )
        .draw(target)?;
    }
    Ok(())
}

fn draw_axis_titles<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = MonoTextStyle::new(&FONT_6X10, SCALE_LABEL_COLOR);
    Text::with_alignment(
        "Wifi Channel",
        Point::new(
            GRAPH_LEFT_MARGIN + GRAPH_WIDTH / 2,
            GRAPH_TOP_OFFSET + GRAPH_HEIGHT + 30,
        ),
        style,
        Alignment::Center,
    )
    .draw(target)?;
    // Drawn horizontally above the scale; the backend has no rotated text.
    Text::new("RSSI (dB)", Point::new(2, GRAPH_TOP_OFFSET + 8), style).draw(target)?;
    Ok(())
}

fn draw_lobe<D>(target: &mut D, lobe: &SpectrumLobe) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if lobe.height() <= 0 {
        return Ok(());
    }

    // Translucent-looking fill: the backend has no alpha, so the fill uses a
    // dimmed palette color under the full-strength outline.
    let fill = PrimitiveStyle::with_fill(dimmed(lobe.color));
    for y in lobe.y_top..=lobe.y_bottom {
        if let Some((x_start, x_end)) = lobe.extent_at(y) {
            Rectangle::new(Point::new(x_start, y), Size::new((x_end - x_start) as u32, 1))
                .into_styled(fill)
                .draw(target)?;
        }
    }

    let outline = PrimitiveStyle::with_stroke(lobe.color, 2);
    draw_curved_edge(target, lobe, outline, -1)?;
    draw_curved_edge(target, lobe, outline, 1)?;
    if let Some((x_start, x_end)) = lobe.baseline_extent() {
        Line::new(
            Point::new(x_start, lobe.y_bottom),
            Point::new(x_end, lobe.y_bottom),
        )
        .into_styled(outline)
        .draw(target)?;
    }

    let label_style = MonoTextStyle::new(&FONT_6X10, lobe.color);
    Text::with_alignment(
        lobe.ssid.display_name(),
        Point::new(lobe.x_center, lobe.y_top - 4),
        label_style,
        Alignment::Center,
    )
    .draw(target)?;
    Ok(())
}

fn draw_curved_edge<D>(
    target: &mut D,
    lobe: &SpectrumLobe,
    style: PrimitiveStyle<Rgb565>,
    sign: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut previous: Option<Point> = None;
    for y in lobe.y_top..=lobe.y_bottom {
        let point = Point::new(lobe.x_center + sign * lobe.width_at(y) / 2, y);
        if let Some(from) = previous {
            Line::new(from, point).into_styled(style).draw(target)?;
        }
        previous = Some(point);
    }
    Ok(())
}

fn dimmed(color: Rgb565) -> Rgb565 {
    Rgb565::new(color.r() >> 2, color.g() >> 2, color.b() >> 2)
}

#[cfg(test)]
mod tests;
