use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Mix, Srgb};

use crate::data::model::{MagnitudeRange, TsunamiFlag};

pub const TSUNAMI_YES: Color32 = Color32::from_rgb(0xFF, 0x5E, 0x5E);
pub const TSUNAMI_NO: Color32 = Color32::from_rgb(0x4F, 0x9D, 0x9D);
pub const TREND_LINE: Color32 = Color32::from_rgb(0xFF, 0x6B, 0x6B);

pub fn tsunami_color(flag: TsunamiFlag) -> Color32 {
    match flag {
        TsunamiFlag::Yes => TSUNAMI_YES,
        TsunamiFlag::No => TSUNAMI_NO,
    }
}

// ---------------------------------------------------------------------------
// Continuous magnitude scale (light → deep red)
// ---------------------------------------------------------------------------

/// Maps a magnitude inside `bounds` onto a sequential red scale.
#[derive(Debug, Clone, Copy)]
pub struct MagnitudeScale {
    bounds: MagnitudeRange,
    light: Hsl,
    dark: Hsl,
}

impl MagnitudeScale {
    pub fn new(bounds: MagnitudeRange) -> Self {
        MagnitudeScale {
            bounds,
            light: Hsl::new(8.0, 0.85, 0.92),
            dark: Hsl::new(356.0, 0.90, 0.30),
        }
    }

    /// Position of `magnitude` in the scale, `0.0 ..= 1.0`.
    pub fn position(&self, magnitude: f64) -> f32 {
        let span = self.bounds.high - self.bounds.low;
        if span.abs() < f64::EPSILON {
            return 1.0;
        }
        ((magnitude - self.bounds.low) / span).clamp(0.0, 1.0) as f32
    }

    pub fn color_for(&self, magnitude: f64) -> Color32 {
        let hsl = self.light.mix(self.dark, self.position(magnitude));
        let rgb: Srgb = hsl.into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}
