/// Color generation for gradient stops.
use std::fmt;

use rand::RngExt;

/// Upper bound (exclusive) of a hue in degrees.
pub const HUE_RANGE: u16 = 360;
/// Saturation draws land in `[65, 90)` percent.
pub const SATURATION_RANGE: std::ops::Range<u8> = 65..90;
/// Lightness draws land in `[45, 60)` percent.
pub const LIGHTNESS_RANGE: std::ops::Range<u8> = 45..60;
/// Size of the 24-bit RGB space (256^3).
pub const RGB_SPACE: u32 = 0x0100_0000;

/// Which color space the generator draws from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Palette derived from a base hue with clamped saturation/lightness.
    #[default]
    Hsl,
    /// Independent uniform draws over the full 24-bit space.
    Hex,
}

impl ColorMode {
    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Hsl => "hsl",
            ColorMode::Hex => "hex",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ColorMode::Hsl => ColorMode::Hex,
            ColorMode::Hex => ColorMode::Hsl,
        }
    }
}

/// A single generated color. Immutable once produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Hsl {
        hue: u16,
        saturation: u8,
        lightness: u8,
    },
    Hex(u32),
}

impl Color {
    /// Convert to an `(r, g, b)` byte triple for painting.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Hex(value) => (
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            ),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => hsl_to_rgb(hue, saturation, lightness),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {saturation}%, {lightness}%)"),
            Color::Hex(value) => write!(f, "#{value:06x}"),
        }
    }
}

/// Draw a hue uniformly from `[0, 360)`.
pub fn random_hue<R: RngExt + ?Sized>(rng: &mut R) -> u16 {
    rng.random_range(0..HUE_RANGE)
}

/// Generate a color under `mode`. `base_hue` anchors HSL colors and is
/// ignored in hex mode.
pub fn generate_color<R: RngExt + ?Sized>(
    rng: &mut R,
    mode: ColorMode,
    base_hue: Option<u16>,
) -> Color {
    match mode {
        ColorMode::Hsl => generate_hsl(rng, base_hue),
        ColorMode::Hex => generate_hex(rng),
    }
}

pub fn generate_hsl<R: RngExt + ?Sized>(rng: &mut R, base_hue: Option<u16>) -> Color {
    let hue = match base_hue {
        Some(hue) => hue % HUE_RANGE,
        None => random_hue(rng),
    };
    Color::Hsl {
        hue,
        saturation: rng.random_range(SATURATION_RANGE),
        lightness: rng.random_range(LIGHTNESS_RANGE),
    }
}

pub fn generate_hex<R: RngExt + ?Sized>(rng: &mut R) -> Color {
    Color::Hex(rng.random_range(0..RGB_SPACE))
}

/// CSS HSL to sRGB conversion.
fn hsl_to_rgb(hue: u16, saturation: u8, lightness: u8) -> (u8, u8, u8) {
    let hue = f32::from(hue % HUE_RANGE);
    let sat = f32::from(saturation.min(100)) / 100.;
    let light = f32::from(lightness.min(100)) / 100.;
    let a = sat * light.min(1. - light);
    let f = |n: f32| -> u8 {
        let k = (n + hue / 30.) % 12.;
        let channel = light - a * (k - 3.).min(9. - k).clamp(-1., 1.);
        (channel * 255.).round().clamp(0., 255.) as u8
    };
    (f(0.), f(8.), f(4.))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn hsl_colors_stay_in_pleasant_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2_000 {
            match generate_hsl(&mut rng, None) {
                Color::Hsl {
                    hue,
                    saturation,
                    lightness,
                } => {
                    assert!(hue < 360);
                    assert!((65..90).contains(&saturation));
                    assert!((45..60).contains(&lightness));
                }
                other => panic!("expected hsl, got {other:?}"),
            }
        }
    }

    #[test]
    fn base_hue_is_kept_and_wrapped() {
        let mut rng = StdRng::seed_from_u64(1);
        let Color::Hsl { hue, .. } = generate_hsl(&mut rng, Some(120)) else {
            panic!("expected hsl");
        };
        assert_eq!(hue, 120);
        let Color::Hsl { hue, .. } = generate_hsl(&mut rng, Some(400)) else {
            panic!("expected hsl");
        };
        assert_eq!(hue, 40);
    }

    #[test]
    fn hex_colors_are_six_lowercase_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..2_000 {
            let color = generate_color(&mut rng, ColorMode::Hex, Some(10));
            let text = color.to_string();
            assert_eq!(text.len(), 7, "{text}");
            assert!(text.starts_with('#'));
            assert!(text[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
            let value = u32::from_str_radix(&text[1..], 16).unwrap();
            assert!(value < RGB_SPACE);
        }
    }

    #[test]
    fn hex_formatting_pads_small_values() {
        assert_eq!(Color::Hex(0).to_string(), "#000000");
        assert_eq!(Color::Hex(0xab).to_string(), "#0000ab");
        assert_eq!(Color::Hex(0xff_ffff).to_string(), "#ffffff");
    }

    #[test]
    fn hsl_formatting() {
        let color = Color::Hsl {
            hue: 210,
            saturation: 70,
            lightness: 50,
        };
        assert_eq!(color.to_string(), "hsl(210, 70%, 50%)");
    }

    #[test]
    fn rgb_conversion_matches_css() {
        let red = Color::Hsl {
            hue: 0,
            saturation: 100,
            lightness: 50,
        };
        assert_eq!(red.to_rgb(), (255, 0, 0));
        let green = Color::Hsl {
            hue: 120,
            saturation: 100,
            lightness: 50,
        };
        assert_eq!(green.to_rgb(), (0, 255, 0));
        let blue = Color::Hsl {
            hue: 240,
            saturation: 100,
            lightness: 50,
        };
        assert_eq!(blue.to_rgb(), (0, 0, 255));
        assert_eq!(Color::Hex(0x336699).to_rgb(), (0x33, 0x66, 0x99));
    }

    #[test]
    fn mode_toggles_between_strategies() {
        assert_eq!(ColorMode::default(), ColorMode::Hsl);
        assert_eq!(ColorMode::Hsl.toggle(), ColorMode::Hex);
        assert_eq!(ColorMode::Hex.toggle(), ColorMode::Hsl);
    }
}
