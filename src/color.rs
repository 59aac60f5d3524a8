use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| hsl_color((i as f32 / n as f32) * 360.0, 0.75, 0.55))
        .collect()
}

fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

// ---------------------------------------------------------------------------
// Level badges
// ---------------------------------------------------------------------------

/// Badge style for a course's level label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Green,
    Red,
    Yellow,
    Outline,
}

impl BadgeVariant {
    /// Pick the badge for a raw section label by keyword.
    pub fn for_section(section: &str) -> Self {
        let normalized = section.trim().to_lowercase();
        if normalized.contains("professional") {
            BadgeVariant::Green
        } else if normalized.contains("specialty") {
            BadgeVariant::Red
        } else if normalized.contains("expert") {
            BadgeVariant::Yellow
        } else {
            BadgeVariant::Outline
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            BadgeVariant::Green => hsl_color(142.0, 0.6, 0.42),
            BadgeVariant::Red => hsl_color(0.0, 0.7, 0.5),
            BadgeVariant::Yellow => hsl_color(45.0, 0.9, 0.5),
            BadgeVariant::Outline => Color32::GRAY,
        }
    }
}

// ---------------------------------------------------------------------------
// Zone colours: zone name → Color32
// ---------------------------------------------------------------------------

/// Maps each zone tab to a distinct accent colour.
#[derive(Debug, Clone)]
pub struct ZoneColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ZoneColors {
    pub fn new(zones: &[String]) -> Self {
        let palette = generate_palette(zones.len());
        let mapping = zones.iter().cloned().zip(palette).collect();
        ZoneColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, zone: &str) -> Color32 {
        self.mapping
            .get(zone)
            .copied()
            .unwrap_or(self.default_color)
    }
}
