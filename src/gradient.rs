/// Gradient building: palettes, CSS expressions and declarations.
use std::fmt;
use std::num::NonZeroUsize;

use rand::RngExt;
use thiserror::Error;

use crate::color::{self, Color, ColorMode};

/// Width of a single color band in a repeating gradient, in px.
pub const REPEATING_BAND_PX: u32 = 20;

/// Largest set a single request may ask for.
pub const MAX_COUNT: usize = 10_000;

/// Hue offsets applied to the base hue when building an HSL palette.
const HUE_STEPS: [u16; 4] = [0, 40, 80, 120];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerationError {
    #[error("gradient count must be at least 1 (got {0})")]
    NonPositiveCount(i64),
    #[error("gradient count must be at most {max} (got {count})")]
    CountTooLarge { count: i64, max: usize },
    #[error("no gradient at index {index} (set has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
    MultiColor,
    Repeating,
}

impl GradientKind {
    pub const ALL: [GradientKind; 5] = [
        GradientKind::Linear,
        GradientKind::Radial,
        GradientKind::Conic,
        GradientKind::MultiColor,
        GradientKind::Repeating,
    ];

    /// Parse a kind name; unknown names fall back to `Linear`.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "linear" => GradientKind::Linear,
            "radial" => GradientKind::Radial,
            "conic" => GradientKind::Conic,
            "multi" | "multi-color" | "multicolor" | "multi_color" => GradientKind::MultiColor,
            "repeating" => GradientKind::Repeating,
            other => {
                tracing::warn!(kind = other, "unknown gradient kind, using linear");
                GradientKind::Linear
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GradientKind::Linear => "Linear",
            GradientKind::Radial => "Radial",
            GradientKind::Conic => "Conic",
            GradientKind::MultiColor => "Multi Color",
            GradientKind::Repeating => "Repeating",
        }
    }

    /// Cycle to the next kind in display order.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|kind| *kind == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What to generate. `count` is always in `1..=MAX_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    pub count: NonZeroUsize,
    pub kind: GradientKind,
    pub mode: ColorMode,
}

impl GenerationRequest {
    /// Build a request, rejecting counts outside `1..=MAX_COUNT`.
    pub fn new(count: i64, kind: GradientKind, mode: ColorMode) -> Result<Self, GenerationError> {
        let value = usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(GenerationError::NonPositiveCount(count))?;
        if value.get() > MAX_COUNT {
            return Err(GenerationError::CountTooLarge {
                count,
                max: MAX_COUNT,
            });
        }
        Ok(Self {
            count: value,
            kind,
            mode,
        })
    }

    /// Build a request, clamping the count into `1..=MAX_COUNT`. The error
    /// describes the rejected count when clamping happened.
    pub fn clamped(
        count: i64,
        kind: GradientKind,
        mode: ColorMode,
    ) -> (Self, Option<GenerationError>) {
        match Self::new(count, kind, mode) {
            Ok(request) => (request, None),
            Err(err) => {
                let count = match &err {
                    GenerationError::CountTooLarge { .. } => {
                        NonZeroUsize::new(MAX_COUNT).unwrap_or(NonZeroUsize::MIN)
                    }
                    _ => NonZeroUsize::MIN,
                };
                (Self { count, kind, mode }, Some(err))
            }
        }
    }
}

/// Four related colors drawn for one gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette(pub [Color; 4]);

impl Palette {
    pub fn derive<R: RngExt + ?Sized>(rng: &mut R, mode: ColorMode, base_hue: u16) -> Self {
        Palette(HUE_STEPS.map(|step| {
            color::generate_color(rng, mode, Some((base_hue + step) % color::HUE_RANGE))
        }))
    }
}

/// One generated gradient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientDescriptor {
    pub kind: GradientKind,
    pub expression: String,
    pub declaration: String,
    /// Direction (linear/repeating) or start angle (conic) in degrees.
    pub angle: u16,
    /// Colors used by the expression, in stop order.
    pub stops: Vec<Color>,
}

pub type GeneratedSet = Vec<GradientDescriptor>;

/// Wrap an expression into a copy-ready CSS declaration.
pub fn declaration(expression: &str) -> String {
    format!("background: {expression};")
}

pub fn build_descriptor(kind: GradientKind, palette: &Palette, angle: u16) -> GradientDescriptor {
    let [c1, c2, c3, c4] = palette.0;
    let (expression, stops) = match kind {
        GradientKind::Linear => (
            format!("linear-gradient({angle}deg, {c1}, {c2})"),
            vec![c1, c2],
        ),
        GradientKind::Radial => (
            format!("radial-gradient(circle at center, {c1}, {c2})"),
            vec![c1, c2],
        ),
        GradientKind::Conic => (
            format!("conic-gradient(from {angle}deg, {c1}, {c2}, {c3})"),
            vec![c1, c2, c3],
        ),
        GradientKind::MultiColor => (
            format!("linear-gradient({angle}deg, {c1}, {c2}, {c3}, {c4})"),
            vec![c1, c2, c3, c4],
        ),
        GradientKind::Repeating => {
            let band = REPEATING_BAND_PX;
            let end = band * 2;
            (
                format!(
                    "repeating-linear-gradient({angle}deg, {c1} 0px, {c1} {band}px, {c2} {band}px, {c2} {end}px)"
                ),
                vec![c1, c2],
            )
        }
    };
    GradientDescriptor {
        kind,
        declaration: declaration(&expression),
        expression,
        angle,
        stops,
    }
}

/// Generate `request.count` independent gradients.
pub fn build_gradients<R: RngExt + ?Sized>(
    request: &GenerationRequest,
    rng: &mut R,
) -> GeneratedSet {
    (0..request.count.get())
        .map(|_| {
            let base_hue = color::random_hue(rng);
            let palette = Palette::derive(rng, request.mode, base_hue);
            let angle = rng.random_range(0..color::HUE_RANGE);
            build_descriptor(request.kind, &palette, angle)
        })
        .collect()
}
