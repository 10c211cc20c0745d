use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.45);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category colours
// ---------------------------------------------------------------------------

/// Maps each distinct job category to a colour.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(values: &BTreeSet<String>) -> Self {
        let mapping = values
            .iter()
            .cloned()
            .zip(generate_palette(values.len()))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    pub fn color_for(&self, value: &str) -> Color32 {
        self.mapping
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_and_distinctness() {
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        assert_ne!(p[0], p[1]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn unknown_value_gets_default() {
        let values: BTreeSet<String> = ["Gaming", "Office"].iter().map(|s| s.to_string()).collect();
        let cm = ColorMap::new(&values);
        assert_ne!(cm.color_for("Gaming"), Color32::GRAY);
        assert_ne!(cm.color_for("Gaming"), cm.color_for("Office"));
        assert_eq!(cm.color_for("Nope"), Color32::GRAY);
    }
}
