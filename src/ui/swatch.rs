/// Paints a gradient descriptor into terminal cells.
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::color::Color;
use crate::gradient::{GradientDescriptor, GradientKind, REPEATING_BAND_PX};

use super::helpers::to_term_color;

/// CSS pixels covered by one terminal pixel when drawing repeating bands.
const CSS_PX_PER_PIXEL: f32 = 4.0;

type Rgb = (u8, u8, u8);

/// Each cell holds two vertically stacked pixels drawn with an upper half
/// block, so pixels stay roughly square on common terminal fonts.
pub struct Swatch<'a> {
    pub descriptor: &'a GradientDescriptor,
}

impl Widget for Swatch<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = f32::from(area.width);
        let height = f32::from(area.height) * 2.0;
        for row in 0..area.height {
            for col in 0..area.width {
                let x = f32::from(col) + 0.5;
                let top_y = f32::from(row) * 2.0 + 0.5;
                let top = sample(self.descriptor, x, top_y, width, height);
                let bottom = sample(self.descriptor, x, top_y + 1.0, width, height);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol("▀")
                        .set_fg(to_term_color(top))
                        .set_bg(to_term_color(bottom));
                }
            }
        }
    }
}

/// Color of the gradient at pixel `(x, y)` in a `width` x `height` box.
pub fn sample(descriptor: &GradientDescriptor, x: f32, y: f32, width: f32, height: f32) -> Rgb {
    let stops = &descriptor.stops;
    if stops.is_empty() {
        return (0, 0, 0);
    }
    let cx = x - width / 2.0;
    let cy = y - height / 2.0;
    match descriptor.kind {
        GradientKind::Linear | GradientKind::MultiColor => {
            let t = linear_position(descriptor.angle, cx, cy, width, height);
            interpolate(stops, t)
        }
        GradientKind::Radial => {
            let farthest = (width * width + height * height).sqrt() / 2.0;
            let t = if farthest > 0.0 {
                (cx * cx + cy * cy).sqrt() / farthest
            } else {
                0.0
            };
            interpolate(stops, t)
        }
        GradientKind::Conic => {
            // Clockwise from twelve o'clock, as CSS measures it.
            let theta = cx.atan2(-cy).to_degrees();
            let t = (theta - f32::from(descriptor.angle)).rem_euclid(360.0) / 360.0;
            interpolate(stops, t)
        }
        GradientKind::Repeating => {
            let t = linear_position(descriptor.angle, cx, cy, width, height);
            let length = gradient_length(descriptor.angle, width, height);
            let band = REPEATING_BAND_PX as f32;
            let offset = (t * length * CSS_PX_PER_PIXEL).rem_euclid(band * 2.0);
            let index = if offset < band { 0 } else { 1 };
            stops
                .get(index)
                .or(stops.first())
                .map(|color| color.to_rgb())
                .unwrap_or((0, 0, 0))
        }
    }
}

fn gradient_length(angle: u16, width: f32, height: f32) -> f32 {
    let radians = f32::from(angle).to_radians();
    (width * radians.sin()).abs() + (height * radians.cos()).abs()
}

/// Position along a CSS linear gradient line: 0 at the start corner, 1 at the end.
fn linear_position(angle: u16, cx: f32, cy: f32, width: f32, height: f32) -> f32 {
    let radians = f32::from(angle).to_radians();
    let (dx, dy) = (radians.sin(), -radians.cos());
    let length = gradient_length(angle, width, height);
    if length <= f32::EPSILON {
        return 0.5;
    }
    (cx * dx + cy * dy) / length + 0.5
}

/// Evenly spaced stops, linear interpolation in sRGB.
fn interpolate(stops: &[Color], t: f32) -> Rgb {
    let first = stops[0].to_rgb();
    if stops.len() == 1 {
        return first;
    }
    let t = t.clamp(0.0, 1.0);
    let segments = (stops.len() - 1) as f32;
    let scaled = t * segments;
    let index = (scaled.floor() as usize).min(stops.len() - 2);
    let local = scaled - index as f32;
    mix(stops[index].to_rgb(), stops[index + 1].to_rgb(), local)
}

fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let lerp = |from: u8, to: u8| -> u8 {
        (f32::from(from) + (f32::from(to) - f32::from(from)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    };
    (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::{Palette, build_descriptor};

    const BLACK: Color = Color::Hex(0x000000);
    const WHITE: Color = Color::Hex(0xffffff);
    const RED: Color = Color::Hex(0xff0000);
    const BLUE: Color = Color::Hex(0x0000ff);

    fn descriptor(kind: GradientKind, angle: u16) -> GradientDescriptor {
        build_descriptor(kind, &Palette([BLACK, WHITE, RED, BLUE]), angle)
    }

    #[test]
    fn linear_to_right_runs_from_first_to_last_stop() {
        let d = descriptor(GradientKind::Linear, 90);
        assert_eq!(sample(&d, 0.0, 5.0, 10.0, 10.0), (0, 0, 0));
        assert_eq!(sample(&d, 10.0, 5.0, 10.0, 10.0), (255, 255, 255));
        let (r, g, b) = sample(&d, 5.0, 5.0, 10.0, 10.0);
        assert!((126..=129).contains(&r) && r == g && g == b);
    }

    #[test]
    fn linear_zero_degrees_points_up() {
        let d = descriptor(GradientKind::Linear, 0);
        assert_eq!(sample(&d, 5.0, 10.0, 10.0, 10.0), (0, 0, 0));
        assert_eq!(sample(&d, 5.0, 0.0, 10.0, 10.0), (255, 255, 255));
    }

    #[test]
    fn multi_color_reaches_every_stop() {
        let d = descriptor(GradientKind::MultiColor, 90);
        assert_eq!(sample(&d, 0.0, 5.0, 12.0, 10.0), BLACK.to_rgb());
        assert_eq!(sample(&d, 12.0, 5.0, 12.0, 10.0), BLUE.to_rgb());
        assert_eq!(sample(&d, 8.0, 5.0, 12.0, 10.0), RED.to_rgb());
    }

    #[test]
    fn radial_starts_at_center() {
        let d = descriptor(GradientKind::Radial, 0);
        assert_eq!(sample(&d, 5.0, 5.0, 10.0, 10.0), (0, 0, 0));
        assert_eq!(sample(&d, 0.0, 0.0, 10.0, 10.0), (255, 255, 255));
    }

    #[test]
    fn conic_starts_at_its_angle() {
        let d = descriptor(GradientKind::Conic, 90);
        // Just clockwise of three o'clock is the first stop.
        assert_eq!(sample(&d, 10.0, 5.01, 10.0, 10.0), (0, 0, 0));
        // Nine o'clock is halfway round: the middle stop.
        assert_eq!(sample(&d, 0.0, 5.0, 10.0, 10.0), WHITE.to_rgb());
    }

    #[test]
    fn repeating_only_uses_two_colors() {
        let d = descriptor(GradientKind::Repeating, 45);
        let mut seen = std::collections::HashSet::new();
        for x in 0..40 {
            for y in 0..20 {
                seen.insert(sample(&d, x as f32 + 0.5, y as f32 + 0.5, 40.0, 20.0));
            }
        }
        assert_eq!(seen.len(), 2);
        assert!(seen.contains(&BLACK.to_rgb()));
        assert!(seen.contains(&WHITE.to_rgb()));
    }

    #[test]
    fn widget_fills_area_with_half_blocks() {
        let d = descriptor(GradientKind::Linear, 90);
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        Swatch { descriptor: &d }.render(area, &mut buf);
        for y in 0..3u16 {
            for x in 0..6u16 {
                assert_eq!(buf[(x, y)].symbol(), "▀");
            }
        }
    }
}
