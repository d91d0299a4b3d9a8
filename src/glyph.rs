//! Built-in glyph art and the generic code that positions it.
//!
//! Every glyph is data: an anchor shift from the requested center, a click-area
//! offset and one or more relative sub-paths. Each sub-path starts with a move to
//! `anchor + (dx, dy)`; the rest of its path data is relative.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::geometry::ScaleAbout;
use crate::settings::Settings;
use crate::svg::{Element, fmt_num};
use crate::symbol::Symbol;

pub const CLICK_AREA_SIZE: f32 = 20.0;
pub const PLACEHOLDER_RADIUS: f32 = 8.0;
pub const PLACEHOLDER_STROKE: &str = "#ffff00";
pub const PLACEHOLDER_FILL: &str = "#ff0000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    None,
    /// Filled with the glyph's stroke color.
    Solid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPart {
    pub dx: f32,
    pub dy: f32,
    pub path: String,
    pub fill: FillMode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlyphSpec {
    pub symbol: Symbol,
    pub x_shift: f32,
    pub y_shift: f32,
    pub click_offset: (f32, f32),
    pub parts: Vec<GlyphPart>,
}

impl GlyphSpec {
    fn new(symbol: Symbol, x_shift: f32, y_shift: f32) -> Self {
        Self {
            symbol,
            x_shift,
            y_shift,
            click_offset: (-x_shift - 9.0, -y_shift - 9.0),
            parts: Vec::new(),
        }
    }

    fn part(mut self, dx: f32, dy: f32, path: impl Into<String>) -> Self {
        self.parts.push(GlyphPart {
            dx,
            dy,
            path: path.into(),
            fill: FillMode::None,
        });
        self
    }

    fn solid(mut self, dx: f32, dy: f32, path: impl Into<String>) -> Self {
        self.parts.push(GlyphPart {
            dx,
            dy,
            path: path.into(),
            fill: FillMode::Solid,
        });
        self
    }

    fn click(mut self, dx: f32, dy: f32) -> Self {
        self.click_offset = (dx, dy);
        self
    }

    /// Pixel anchor for a glyph requested at `(x, y)`.
    pub fn anchor(&self, x: f32, y: f32) -> (f32, f32) {
        ((x + self.x_shift).round(), (y + self.y_shift).round())
    }
}

static GLYPHS: Lazy<HashMap<Symbol, GlyphSpec>> = Lazy::new(|| {
    build_glyph_table()
        .into_iter()
        .map(|spec| (spec.symbol, spec))
        .collect()
});

pub fn glyph_spec(symbol: Symbol) -> Option<&'static GlyphSpec> {
    GLYPHS.get(&symbol)
}

/// Draws a glyph centered on `(x, y)`, scaled about its anchor.
pub fn draw_glyph(spec: &GlyphSpec, x: f32, y: f32, settings: &Settings) -> Element {
    let (ax, ay) = spec.anchor(x, y);
    let (color, stroke) = settings.category_style(spec.symbol.category());
    let mut group = Element::group().with_attr(
        "transform",
        ScaleAbout::new(ax, ay, settings.symbol_scale).to_attr(),
    );
    for part in &spec.parts {
        let d = format!(
            "m{},{} {}",
            fmt_num(ax + part.dx),
            fmt_num(ay + part.dy),
            part.path
        );
        let fill = match part.fill {
            FillMode::None => "none",
            FillMode::Solid => color,
        };
        group.append_child(
            Element::new("path")
                .with_attr("d", d)
                .with_attr("stroke", color)
                .with_attr("stroke-width", fmt_num(stroke))
                .with_attr("fill", fill),
        );
    }
    if settings.add_click_area {
        group.append_child(click_area(
            ax + spec.click_offset.0,
            ay + spec.click_offset.1,
            settings,
        ));
    }
    group
}

/// Transparent hit target that makes thin glyphs easier to click.
pub fn click_area(x: f32, y: f32, settings: &Settings) -> Element {
    Element::new("rect")
        .with_attr("x", fmt_num(x - settings.signs_stroke))
        .with_attr("y", fmt_num(y - settings.signs_stroke))
        .with_attr("width", fmt_num(CLICK_AREA_SIZE))
        .with_attr("height", fmt_num(CLICK_AREA_SIZE))
        .with_attr("fill", "transparent")
}

/// Marker drawn for names that resolve to no glyph.
pub fn placeholder(x: f32, y: f32) -> Element {
    Element::group().with_child(
        Element::new("circle")
            .with_attr("cx", fmt_num(x))
            .with_attr("cy", fmt_num(y))
            .with_attr("r", fmt_num(PLACEHOLDER_RADIUS))
            .with_attr("stroke", PLACEHOLDER_STROKE)
            .with_attr("stroke-width", "1")
            .with_attr("fill", PLACEHOLDER_FILL),
    )
}

/// Full circle drawn from its leftmost point, ending where it started.
fn ring(r: f32) -> String {
    let k = r * 0.5523;
    let n = fmt_num;
    format!(
        "c 0,{} {},{} {},{} c {},0 {},{} {},{} c 0,{} {},{} {},{} c {},0 {},{} {},{}",
        n(-k),
        n(r - k),
        n(-r),
        n(r),
        n(-r),
        n(k),
        n(r),
        n(r - k),
        n(r),
        n(r),
        n(k),
        n(-(r - k)),
        n(r),
        n(-r),
        n(r),
        n(-k),
        n(-r),
        n(-(r - k)),
        n(-r),
        n(-r),
    )
}

const S_LETTER: &str = "c -0.5,-1 -1.5,-1.5 -2.5,-1.5 c -1.5,0 -2.5,0.8 -2.5,2 c 0,2.5 5,1.5 5,4 c 0,1.2 -1,2 -2.5,2 c -1,0 -2,-0.5 -2.5,-1.5";
const C_LETTER: &str = "c -0.5,-1 -1.5,-1.5 -2.5,-1.5 c -2,0 -3,1.5 -3,3.5 c 0,2 1,3.5 3,3.5 c 1,0 2,-0.5 2.5,-1.5";
const M_ARCHES: &str = "c 1,0 2,1 2,2.5 l 0,10 m 0,-9 c 0,-2 1,-3.5 2.5,-3.5 c 1.5,0 2.5,1.5 2.5,3.5 l 0,9 m 0,-9 c 0,-2 1,-3.5 2.5,-3.5 c 1.5,0 2.5,1.5 2.5,3.5";

/// Numeral strokes in a 4x8 cell: start offset inside the cell plus relative path.
fn digit(ch: char) -> ((f32, f32), &'static str) {
    match ch {
        '0' => (
            (2.0, 0.0),
            "c -1.5,0 -2,2 -2,4 c 0,2 0.5,4 2,4 c 1.5,0 2,-2 2,-4 c 0,-2 -0.5,-4 -2,-4 z",
        ),
        '1' => ((0.5, 1.5), "l 2,-1.5 l 0,8"),
        '2' => (
            (0.0, 1.5),
            "c 0,-1 1,-1.5 2,-1.5 c 1.2,0 2,0.8 2,2 c 0,2 -4,4 -4,6 l 4,0",
        ),
        '3' => (
            (0.0, 0.5),
            "c 0.5,-0.3 1.2,-0.5 2,-0.5 c 1.2,0 2,0.8 2,1.8 c 0,1.2 -1,2 -2.5,2 c 1.7,0 2.5,0.9 2.5,2.1 c 0,1.3 -1,2.1 -2.2,2.1 c -0.8,0 -1.4,-0.2 -1.8,-0.5",
        ),
        '4' => ((3.0, 8.0), "l 0,-8 l -3,5.5 l 4,0"),
        '5' => (
            (4.0, 0.0),
            "l -3.5,0 l -0.5,3.5 c 0.5,-0.3 1.2,-0.5 1.8,-0.5 c 1.4,0 2.2,1 2.2,2.3 c 0,1.4 -1,2.7 -2.3,2.7 c -0.7,0 -1.3,-0.2 -1.7,-0.6",
        ),
        '6' => (
            (3.5, 0.3),
            "c -2,0 -3.5,2 -3.5,4.7 c 0,2 0.8,3 2,3 c 1.2,0 2,-1 2,-2.3 c 0,-1.3 -0.8,-2.2 -2,-2.2 c -1,0 -1.7,0.6 -2,1.4",
        ),
        '7' => ((0.0, 0.0), "l 4,0 l -2.5,8"),
        '8' => (
            (2.0, 0.0),
            "c -1.1,0 -1.8,0.7 -1.8,1.8 c 0,1.1 0.7,1.9 1.8,1.9 c 1.1,0 1.8,-0.8 1.8,-1.9 c 0,-1.1 -0.7,-1.8 -1.8,-1.8 z m 0,3.7 c -1.2,0 -2,0.9 -2,2.1 c 0,1.3 0.8,2.2 2,2.2 c 1.2,0 2,-0.9 2,-2.2 c 0,-1.2 -0.8,-2.1 -2,-2.1 z",
        ),
        _ => (
            (0.5, 7.7),
            "c 2,0 3.5,-2 3.5,-4.7 c 0,-2 -0.8,-3 -2,-3 c -1.2,0 -2,1 -2,2.3 c 0,1.3 0.8,2.2 2,2.2 c 1,0 1.7,-0.6 2,-1.4",
        ),
    }
}

/// House numeral built from centered digit cells.
fn numeral(symbol: Symbol) -> GlyphSpec {
    const CELL: f32 = 5.0;
    let label = symbol.default_name();
    let width = CELL * label.chars().count() as f32 - 1.0;
    let starts: Vec<((f32, f32), &'static str)> = label
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            let ((sx, sy), path) = digit(ch);
            ((-width / 2.0 + CELL * idx as f32 + sx, -4.0 + sy), path)
        })
        .collect();
    let ((x_shift, y_shift), _) = starts[0];
    let mut spec = GlyphSpec::new(symbol, x_shift, y_shift);
    for ((sx, sy), path) in starts {
        spec = spec.part(sx - x_shift, sy - y_shift, path);
    }
    spec
}

fn build_glyph_table() -> Vec<GlyphSpec> {
    let mut table = vec![
        GlyphSpec::new(Symbol::Sun, -7.0, 0.0)
            .part(0.0, 0.0, ring(7.0))
            .solid(6.0, 0.0, ring(1.0)),
        GlyphSpec::new(Symbol::Moon, 4.0, -7.0).part(
            0.0,
            0.0,
            "c -3.5,1.2 -5.5,4 -5.5,7 c 0,3 2,5.8 5.5,7 c -5.5,0.5 -9,-3 -9,-7 c 0,-4 3.5,-7.5 9,-7 z",
        ),
        GlyphSpec::new(Symbol::Mercury, -4.0, 0.0)
            .part(0.0, 0.0, ring(4.0))
            .part(0.0, -8.0, "c 1,2.5 2.5,3.5 4,3.5 c 1.5,0 3,-1 4,-3.5")
            .part(4.0, 4.0, "l 0,7 m -3,-3.5 l 6,0")
            .click(-5.0, -10.0),
        GlyphSpec::new(Symbol::Venus, -5.0, -3.0).part(
            0.0,
            0.0,
            format!("{} m 5,5 l 0,8 m -3.5,-4 l 7,0", ring(5.0)),
        ),
        GlyphSpec::new(Symbol::Mars, -5.0, 3.0).part(
            0.0,
            0.0,
            format!("{} m 8.5,-3.5 l 5.5,-5.5 m -4.5,0 l 4.5,0 l 0,4.5", ring(5.0)),
        ),
        GlyphSpec::new(Symbol::Jupiter, -6.0, -4.0).part(
            0.0,
            0.0,
            "c 0,-2.5 1.5,-3.5 3,-3.5 c 2,0 3,1.5 3,3 c 0,3 -3,6 -6.5,9 l 11,0 m -3,-12 l 0,15",
        ),
        GlyphSpec::new(Symbol::Saturn, -3.0, -8.0).part(
            0.0,
            0.0,
            "l 0,15 m -2.5,-12 l 5,0 m -2.5,6 c 1,-2 3,-3 5,-2.5 c 2,0.5 2.5,2.5 1.5,4.5 c -1,2 -3,3.5 -1.5,6",
        ),
        GlyphSpec::new(Symbol::Uranus, -6.0, -8.0)
            .part(0.0, 0.0, "l 0,10 m 12,-10 l 0,10 m -12,-5 l 12,0")
            .part(6.0, 0.0, "l 0,12")
            .part(4.0, 14.0, ring(2.0)),
        GlyphSpec::new(Symbol::Neptune, -6.0, -7.0).part(
            0.0,
            0.0,
            "c 0,5 2,8 6,8 c 4,0 6,-3 6,-8 m -6,-1 l 0,16 m -3.5,-4 l 7,0",
        ),
        GlyphSpec::new(Symbol::Pluto, -6.0, -7.0)
            .part(0.0, 0.0, "c 0,4 2.5,6.5 6,6.5 c 3.5,0 6,-2.5 6,-6.5")
            .part(3.5, 1.0, ring(2.5))
            .part(6.0, 6.5, "l 0,9.5 m -3.5,-4 l 7,0"),
        GlyphSpec::new(Symbol::Chiron, -1.0, -9.0)
            .part(0.0, 0.0, "l 0,11 m 0,-5.5 l 4.5,-4.5 m -4.5,4.5 l 4.5,4")
            .part(-3.0, 14.0, ring(3.0)),
        GlyphSpec::new(Symbol::Lilith, 3.0, -9.0).solid(
            0.0,
            0.0,
            "c -2.5,1 -4,3 -4,5.5 c 0,2.5 1.5,4.5 4,5.5 c -4,0.5 -7,-2.5 -7,-5.5 c 0,-3.5 3,-6 7,-5.5 z m -2.5,11 l 0,6 m -2.5,-3 l 5,0",
        ),
        GlyphSpec::new(Symbol::NNode, -4.0, 5.0).part(
            0.0,
            0.0,
            format!(
                "c -2,-2 -3,-4 -3,-6.5 c 0,-3.5 3.1,-6 7,-6 c 3.9,0 7,2.5 7,6 c 0,2.5 -1,4.5 -3,6.5 m -10,2 {} m 8,0 {}",
                ring(2.0),
                ring(2.0)
            ),
        ),
        GlyphSpec::new(Symbol::SNode, -4.0, -5.0).part(
            0.0,
            0.0,
            format!(
                "c -2,2 -3,4 -3,6.5 c 0,3.5 3.1,6 7,6 c 3.9,0 7,-2.5 7,-6 c 0,-2.5 -1,-4.5 -3,-6.5 m -10,-2 {} m 8,0 {}",
                ring(2.0),
                ring(2.0)
            ),
        ),
        GlyphSpec::new(Symbol::Fortune, -7.0, 0.0)
            .part(0.0, 0.0, ring(7.0))
            .part(2.0, -5.0, "l 10,10")
            .part(12.0, -5.0, "l -10,10"),
        GlyphSpec::new(Symbol::Aries, -7.0, -3.0).part(
            0.0,
            0.0,
            "c 0,-3 1.5,-5 3.5,-5 c 2.5,0 3.5,2.5 3.5,5 l 0,11 m 0,-11 c 0,-2.5 1,-5 3.5,-5 c 2,0 3.5,2 3.5,5",
        ),
        GlyphSpec::new(Symbol::Taurus, -5.0, 3.0).part(
            0.0,
            0.0,
            format!(
                "{} m -2,-10 c 1,3 3.5,4.5 7,4.5 c 3.5,0 6,-1.5 7,-4.5",
                ring(5.0)
            ),
        ),
        GlyphSpec::new(Symbol::Gemini, -7.0, -7.0).part(
            0.0,
            0.0,
            "c 4.5,1.5 9.5,1.5 14,0 m -14,14 c 4.5,-1.5 9.5,-1.5 14,0 m -10,-12.5 l 0,11 m 6,-11 l 0,11",
        ),
        GlyphSpec::new(Symbol::Cancer, -4.0, -5.0)
            .part(0.0, 0.0, "c 3,-2 8,-2 11,1 m -3,9 c -3,2 -8,2 -11,-1")
            .solid(-2.0, 2.0, format!("{} m 8,6 {}", ring(2.0), ring(2.0))),
        GlyphSpec::new(Symbol::Leo, -7.0, 3.0).part(
            0.0,
            0.0,
            format!(
                "{} m 3,-3 c -1,-2 -1.5,-3.5 -1.5,-5 c 0,-2.5 2,-4 4.5,-4 c 2.5,0 4.5,2 4.5,4.5 c 0,3 -3,5 -3,8.5 c 0,2 1.5,3 3,3 c 1,0 2,-0.5 2.5,-1.5",
                ring(3.0)
            ),
        ),
        GlyphSpec::new(Symbol::Virgo, -7.0, -6.0).part(
            0.0,
            0.0,
            format!("{M_ARCHES} l 0,6 c 0,2.5 -1.5,4.5 -4,5.5 m 4,-9 c 1.5,1 3,2 2,5"),
        ),
        GlyphSpec::new(Symbol::Libra, -7.0, 6.0).part(
            0.0,
            0.0,
            "l 14,0 m -14,-4 l 4,0 c -1,-1.5 -1.5,-3 -1.5,-4.5 c 0,-3 2,-5 4.5,-5 c 2.5,0 4.5,2 4.5,5 c 0,1.5 -0.5,3 -1.5,4.5 l 4,0",
        ),
        GlyphSpec::new(Symbol::Scorpio, -7.0, -6.0).part(
            0.0,
            0.0,
            format!("{M_ARCHES} l 0,8 c 0,1 0.5,1.5 1.5,1.5 l 2,0 m -2,-2 l 2,2 l -2,2"),
        ),
        GlyphSpec::new(Symbol::Sagittarius, -7.0, 7.0).part(
            0.0,
            0.0,
            "l 14,-14 m -7,0 l 7,0 l 0,7 m -12,-1 l 6,6",
        ),
        GlyphSpec::new(Symbol::Capricorn, -7.0, -6.0).part(
            0.0,
            0.0,
            "c 1.5,0 3,1.5 3,4 l 0,8 m 0,-8 c 0,-2.5 1.5,-4 3.5,-4 c 2,0 3.5,1.5 3.5,4 l 0,5 c 0,2 1.5,3.5 3,3.5 c 1.5,0 2.5,-1 2.5,-2.5 c 0,-1.5 -1,-2.5 -2.5,-2.5 c -2,0 -3,2 -3,4.5 c 0,2.5 -1.5,4 -3.5,4.5",
        ),
        GlyphSpec::new(Symbol::Aquarius, -7.0, -1.0).part(
            0.0,
            0.0,
            "l 3.5,-3 l 3.5,3 l 3.5,-3 l 3.5,3 m -14,6 l 3.5,-3 l 3.5,3 l 3.5,-3 l 3.5,3",
        ),
        GlyphSpec::new(Symbol::Pisces, -6.0, -7.0).part(
            0.0,
            0.0,
            "c 2.5,3.5 2.5,10.5 0,14 m 12,-14 c -2.5,3.5 -2.5,10.5 0,14 m -12,-7 l 12,0",
        ),
        GlyphSpec::new(Symbol::As, -8.0, 5.0).part(
            0.0,
            0.0,
            format!("l 3.5,-10 l 3.5,10 m -5.5,-3.5 l 4,0 m 9.5,-2.5 {S_LETTER}"),
        ),
        GlyphSpec::new(Symbol::Ds, -8.0, -5.0).part(
            0.0,
            0.0,
            format!("l 0,10 l 2.5,0 c 3,0 4.5,-2 4.5,-5 c 0,-3 -1.5,-5 -4.5,-5 z m 15,4 {S_LETTER}"),
        ),
        GlyphSpec::new(Symbol::Mc, -9.0, 5.0).part(
            0.0,
            0.0,
            format!("l 0,-10 l 4,6 l 4,-6 l 0,10 m 8,-5.5 {C_LETTER}"),
        ),
        GlyphSpec::new(Symbol::Ic, -5.0, -5.0).part(
            0.0,
            0.0,
            format!("l 0,10 m 12,-5.5 {C_LETTER}"),
        ),
    ];
    table.extend(Symbol::CUSPS.iter().map(|symbol| numeral(*symbol)));
    table
}
