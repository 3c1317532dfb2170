// File: crates/plot-core/src/text.rs
// Summary: Chart text: each piece of text has a role (title, axis label, tick, legend) fixing its size
// and face; callers pick an anchor and a baseline point.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

const PROSE_FACES: &[&str] = &["DejaVu Sans", "Liberation Sans", "Noto Sans", "Helvetica", "Arial", "sans-serif"];
// Tick numbers line up better in a fixed-width face.
const NUMERIC_FACES: &[&str] = &["DejaVu Sans Mono", "Liberation Mono", "Noto Sans Mono", "Menlo", "Consolas", "monospace"];

// Single-line labels only; wider than any chart we render.
const LAYOUT_WIDTH: f32 = 8192.0;

/// What a piece of chart text is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Title,
    AxisLabel,
    Tick,
    Legend,
}

impl Role {
    pub fn size(self) -> f32 {
        match self {
            Role::Title => 16.0,
            Role::AxisLabel => 14.0,
            Role::Legend => 12.0,
            Role::Tick => 11.0,
        }
    }

    fn numeric(self) -> bool {
        matches!(self, Role::Tick)
    }
}

/// Which point of the text sits on the given x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn shape(&self, text: &str, role: Role, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(role.size());
        style.set_color(color);
        style.set_font_families(if role.numeric() { NUMERIC_FACES } else { PROSE_FACES });

        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        pstyle.set_max_lines(1);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(LAYOUT_WIDTH);
        paragraph
    }

    /// Advance width of `text` as `role` would draw it.
    pub fn width(&self, text: &str, role: Role) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.shape(text, role, skia::Color::TRANSPARENT).longest_line()
    }

    /// Draw `text` with its baseline at `y`, placed on `x` according to `anchor`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, role: Role, anchor: Anchor, (x, y): (f32, f32), color: skia::Color) {
        if text.is_empty() {
            return;
        }
        let mut p = self.shape(text, role, color);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        // Paragraphs paint from their top edge.
        let top = y - p.alphabetic_baseline();
        p.paint(canvas, (left, top));
    }
}
