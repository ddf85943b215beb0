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
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
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
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (e.g. the work-arrangement values) to distinct
/// colours, stable for a given label set.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map for the given labels. Assignment order is
    /// sorted-label order so the same set always gets the same colours.
    pub fn new<'a>(labels: impl Iterator<Item = &'a str>) -> Self {
        let sorted: BTreeMap<String, ()> = labels.map(|l| (l.to_string(), ())).collect();
        let palette = generate_palette(sorted.len());
        ColorMap {
            mapping: sorted
                .into_keys()
                .zip(palette)
                .collect(),
        }
    }

    /// Look up the colour for a label; unknown labels fall back to gray.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_matches_request() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn same_labels_get_same_colors_regardless_of_order() {
        let a = ColorMap::new(["Remote", "Hybrid", "On-site"].into_iter());
        let b = ColorMap::new(["On-site", "Remote", "Hybrid"].into_iter());
        for label in ["Remote", "Hybrid", "On-site"] {
            assert_eq!(a.color_for(label), b.color_for(label));
        }
    }

    #[test]
    fn unknown_label_is_gray() {
        let map = ColorMap::new(std::iter::empty());
        assert_eq!(map.color_for("anything"), Color32::GRAY);
    }
}
