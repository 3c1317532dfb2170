// File: crates/plot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 10],
}

// Ten-colour categorical cycle ("tab10").
const TAB10: [skia::Color; 10] = [
    skia::Color::from_argb(255, 0x1f, 0x77, 0xb4),
    skia::Color::from_argb(255, 0xff, 0x7f, 0x0e),
    skia::Color::from_argb(255, 0x2c, 0xa0, 0x2c),
    skia::Color::from_argb(255, 0xd6, 0x27, 0x28),
    skia::Color::from_argb(255, 0x94, 0x67, 0xbd),
    skia::Color::from_argb(255, 0x8c, 0x56, 0x4b),
    skia::Color::from_argb(255, 0xe3, 0x77, 0xc2),
    skia::Color::from_argb(255, 0x7f, 0x7f, 0x7f),
    skia::Color::from_argb(255, 0xbc, 0xbd, 0x22),
    skia::Color::from_argb(255, 0x17, 0xbe, 0xcf),
];

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 225, 225, 230),
            axis_line: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 70, 70, 80),
            title: skia::Color::from_argb(255, 10, 10, 15),
            legend_fill: skia::Color::from_argb(230, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 205),
            palette: TAB10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            title: skia::Color::from_argb(255, 240, 240, 250),
            legend_fill: skia::Color::from_argb(220, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 78),
            palette: TAB10,
        }
    }

    /// Colour for the `index`-th series, cycling through the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
