// File: crates/pie-render-skia/src/theme.rs
// Summary: Light/Dark theming for pie rendering: background, label color, and wedge palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub label: skia::Color,
    /// Wedge fills, cycled by item index.
    pub palette: [skia::Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            label: skia::Color::from_argb(255, 235, 235, 245),
            palette: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 40, 200, 120),
                skia::Color::from_argb(255, 255, 190, 60),
                skia::Color::from_argb(255, 220, 80, 80),
                skia::Color::from_argb(255, 170, 110, 230),
                skia::Color::from_argb(255, 60, 210, 210),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            label: skia::Color::from_argb(255, 20, 20, 30),
            palette: [
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 20, 160, 90),
                skia::Color::from_argb(255, 230, 150, 20),
                skia::Color::from_argb(255, 200, 60, 60),
                skia::Color::from_argb(255, 130, 80, 200),
                skia::Color::from_argb(255, 20, 160, 170),
            ],
        }
    }

    pub fn solarized_dark() -> Self {
        // Accent colors from the Solarized palette
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            label: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),      // base2
            palette: [
                skia::Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
                skia::Color::from_argb(255, 0x85, 0x99, 0x00), // green
                skia::Color::from_argb(255, 0xb5, 0x89, 0x00), // yellow
                skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
                skia::Color::from_argb(255, 0x6c, 0x71, 0xc4), // violet
                skia::Color::from_argb(255, 0x2a, 0xa1, 0x98), // cyan
            ],
        }
    }

    /// Fill color for the wedge at `index`.
    pub fn color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
