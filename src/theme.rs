use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::survey::model::{Mode, Rgb};

// ---------------------------------------------------------------------------
// Per-mode colour tables
// ---------------------------------------------------------------------------

pub struct Theme {
    pub name: &'static str,
    pub colors: &'static [Rgb],
}

/// VLF themes: two colours each (in-phase, quadrature).
pub const VLF_THEMES: &[Theme] = &[
    Theme {
        name: "Ocean (Blue/Orange)",
        colors: &[Rgb(14, 165, 233), Rgb(249, 115, 22)],
    },
    Theme {
        name: "Forest (Green/Gold)",
        colors: &[Rgb(16, 185, 129), Rgb(234, 179, 8)],
    },
    Theme {
        name: "Sunset (Purple/Red)",
        colors: &[Rgb(139, 92, 246), Rgb(239, 68, 68)],
    },
];

/// Resistivity themes: five colours cycled across spacing levels.
pub const RES_THEMES: &[Theme] = &[
    Theme {
        name: "Scientific (Rainbow)",
        colors: &[
            Rgb(59, 130, 246),
            Rgb(16, 185, 129),
            Rgb(245, 158, 11),
            Rgb(239, 68, 68),
            Rgb(139, 92, 246),
        ],
    },
    Theme {
        name: "Cool (Blues)",
        colors: &[
            Rgb(8, 47, 73),
            Rgb(3, 105, 161),
            Rgb(14, 165, 233),
            Rgb(56, 189, 248),
            Rgb(125, 211, 252),
        ],
    },
    Theme {
        name: "Warm (Reds)",
        colors: &[
            Rgb(69, 10, 10),
            Rgb(153, 27, 27),
            Rgb(220, 38, 38),
            Rgb(248, 113, 113),
            Rgb(252, 165, 165),
        ],
    },
];

/// Slate gray for the dashed KH overlay, outside the cycled palette.
pub const OVERLAY: Rgb = Rgb(100, 116, 139);

pub fn themes(mode: Mode) -> &'static [Theme] {
    match mode {
        Mode::Vlf => VLF_THEMES,
        Mode::Resistivity => RES_THEMES,
    }
}

/// The active palette for a plot cycle. Out-of-range indices clamp to the
/// first theme; dark mode lifts lightness so lines read against a dark
/// background (the darkest "Cool"/"Warm" entries are near-black otherwise).
pub fn active_palette(mode: Mode, theme_index: usize, dark_mode: bool) -> Vec<Rgb> {
    let table = themes(mode);
    let theme = table.get(theme_index).unwrap_or(&table[0]);
    theme
        .colors
        .iter()
        .map(|&c| if dark_mode { lighten(c, 0.15) } else { c })
        .collect()
}

fn lighten(c: Rgb, amount: f32) -> Rgb {
    let srgb = Srgb::new(
        c.0 as f32 / 255.0,
        c.1 as f32 / 255.0,
        c.2 as f32 / 255.0,
    );
    let mut hsl: Hsl = srgb.into_color();
    hsl.lightness = (hsl.lightness + amount).min(0.9);
    let rgb: Srgb = hsl.into_color();
    Rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

pub fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}
