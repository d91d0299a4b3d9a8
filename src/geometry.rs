use crate::settings::Settings;
use crate::svg::{Element, fmt_num};

/// Converts a chart angle to radians under the configured zero-angle convention.
/// Angles grow counter-clockwise on screen.
pub fn chart_radians(angle: f32, settings: &Settings) -> f32 {
    ((settings.shift_in_degrees - angle) % 360.0).to_radians()
}

pub fn point_position(cx: f32, cy: f32, radius: f32, angle: f32, settings: &Settings) -> (f32, f32) {
    let rad = chart_radians(angle, settings);
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Uniform scale about a fixed anchor: `translate(-ax*(s-1), -ay*(s-1)) scale(s)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleAbout {
    pub anchor: (f32, f32),
    pub scale: f32,
}

impl ScaleAbout {
    pub fn new(ax: f32, ay: f32, scale: f32) -> Self {
        Self {
            anchor: (ax, ay),
            scale,
        }
    }

    pub fn translation(&self) -> (f32, f32) {
        (
            -self.anchor.0 * (self.scale - 1.0),
            -self.anchor.1 * (self.scale - 1.0),
        )
    }

    pub fn apply(&self, point: (f32, f32)) -> (f32, f32) {
        let (tx, ty) = self.translation();
        (point.0 * self.scale + tx, point.1 * self.scale + ty)
    }

    pub fn to_attr(&self) -> String {
        let (tx, ty) = self.translation();
        format!(
            "translate({},{}) scale({})",
            fmt_num(tx),
            fmt_num(ty),
            fmt_num(self.scale)
        )
    }
}

#[allow(clippy::too_many_arguments)]
pub fn segment_path(
    cx: f32,
    cy: f32,
    radius: f32,
    angle_from: f32,
    angle_to: f32,
    thickness: f32,
    large_arc: bool,
    sweep: bool,
    settings: &Settings,
) -> String {
    let a1 = chart_radians(angle_from, settings);
    let a2 = chart_radians(angle_to, settings);
    let start = (cx + thickness * a1.cos(), cy + thickness * a1.sin());
    let outer_start = (cx + radius * a1.cos(), cy + radius * a1.sin());
    let outer_end = (cx + radius * a2.cos(), cy + radius * a2.sin());
    let inner_end = (cx + thickness * a2.cos(), cy + thickness * a2.sin());
    let large = u8::from(large_arc);
    format!(
        "M {},{} L {},{} A {},{} 0 {},{} {},{} L {},{} A {},{} 0 {},1 {},{}",
        fmt_num(start.0),
        fmt_num(start.1),
        fmt_num(outer_start.0),
        fmt_num(outer_start.1),
        fmt_num(radius),
        fmt_num(radius),
        large,
        u8::from(sweep),
        fmt_num(outer_end.0),
        fmt_num(outer_end.1),
        fmt_num(inner_end.0),
        fmt_num(inner_end.1),
        fmt_num(thickness),
        fmt_num(thickness),
        large,
        fmt_num(start.0),
        fmt_num(start.1),
    )
}

/// Annular wedge between `thickness` (inner radius) and `radius`.
#[allow(clippy::too_many_arguments)]
pub fn segment(
    cx: f32,
    cy: f32,
    radius: f32,
    angle_from: f32,
    angle_to: f32,
    thickness: f32,
    large_arc: bool,
    sweep: bool,
    settings: &Settings,
) -> Element {
    Element::new("path")
        .with_attr(
            "d",
            segment_path(
                cx, cy, radius, angle_from, angle_to, thickness, large_arc, sweep, settings,
            ),
        )
        .with_attr("fill", "none")
}

pub fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Element {
    Element::new("line")
        .with_attr("x1", fmt_num(x1))
        .with_attr("y1", fmt_num(y1))
        .with_attr("x2", fmt_num(x2))
        .with_attr("y2", fmt_num(y2))
}

pub fn circle(cx: f32, cy: f32, radius: f32) -> Element {
    Element::new("circle")
        .with_attr("cx", fmt_num(cx))
        .with_attr("cy", fmt_num(cy))
        .with_attr("r", fmt_num(radius))
}

/// Text wrapped in a group that keeps it anchored when the symbol scale changes.
pub fn text(content: &str, x: f32, y: f32, size: f32, color: &str, settings: &Settings) -> Element {
    let label = Element::new("text")
        .with_attr("x", fmt_num(x))
        .with_attr("y", fmt_num(y))
        .with_attr("font-family", settings.font_family.as_str())
        .with_attr("font-size", fmt_num(size))
        .with_attr("fill", color)
        .with_attr("text-anchor", "middle")
        .with_attr("dominant-baseline", "central")
        .with_text(content);
    Element::group()
        .with_attr(
            "transform",
            ScaleAbout::new(x, y, settings.symbol_scale).to_attr(),
        )
        .with_child(label)
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum PathToken {
    Command(char),
    Number(f32),
}

fn tokenize_path(d: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    let mut number = String::new();
    let flush = |number: &mut String, tokens: &mut Vec<PathToken>| {
        if !number.is_empty() {
            if let Ok(value) = number.parse::<f32>() {
                tokens.push(PathToken::Number(value));
            }
            number.clear();
        }
    };
    for ch in d.chars() {
        match ch {
            '0'..='9' => number.push(ch),
            '.' => {
                if number.contains('.') && !number.contains(|c: char| c == 'e' || c == 'E') {
                    flush(&mut number, &mut tokens);
                }
                number.push(ch);
            }
            '-' | '+' => {
                if !(number.ends_with('e') || number.ends_with('E')) {
                    flush(&mut number, &mut tokens);
                }
                number.push(ch);
            }
            'e' | 'E' if !number.is_empty() => number.push(ch),
            c if c.is_ascii_alphabetic() => {
                flush(&mut number, &mut tokens);
                tokens.push(PathToken::Command(c));
            }
            _ => flush(&mut number, &mut tokens),
        }
    }
    flush(&mut number, &mut tokens);
    tokens
}

/// Absolute end and control points visited by a path, in drawing order.
/// The bounding box of these points contains the drawn outline.
pub fn path_vertices(d: &str) -> Vec<(f32, f32)> {
    let tokens = tokenize_path(d);
    let mut out = Vec::new();
    let (mut cx, mut cy) = (0.0_f32, 0.0_f32);
    let (mut sx, mut sy) = (0.0_f32, 0.0_f32);
    let mut command: Option<char> = None;
    let mut idx = 0;

    while idx < tokens.len() {
        if let PathToken::Command(c) = tokens[idx] {
            idx += 1;
            if c == 'z' || c == 'Z' {
                cx = sx;
                cy = sy;
                command = None;
            } else {
                command = Some(c);
            }
            continue;
        }
        let Some(cmd) = command else {
            break;
        };
        let arity = match cmd.to_ascii_lowercase() {
            'm' | 'l' | 't' => 2,
            'h' | 'v' => 1,
            'c' => 6,
            's' | 'q' => 4,
            'a' => 7,
            _ => break,
        };
        let args: Vec<f32> = tokens[idx..]
            .iter()
            .take(arity)
            .map_while(|token| match token {
                PathToken::Number(value) => Some(*value),
                PathToken::Command(_) => None,
            })
            .collect();
        if args.len() < arity {
            break;
        }
        idx += arity;
        let relative = cmd.is_ascii_lowercase();
        let (bx, by) = if relative { (cx, cy) } else { (0.0, 0.0) };
        match cmd.to_ascii_lowercase() {
            'm' | 'l' | 't' => {
                cx = bx + args[0];
                cy = by + args[1];
                out.push((cx, cy));
                if cmd.eq_ignore_ascii_case(&'m') {
                    sx = cx;
                    sy = cy;
                    command = Some(if relative { 'l' } else { 'L' });
                }
            }
            'h' => {
                cx = bx + args[0];
                out.push((cx, cy));
            }
            'v' => {
                cy = if relative { cy + args[0] } else { args[0] };
                out.push((cx, cy));
            }
            'c' | 's' | 'q' => {
                for pair in args.chunks(2) {
                    out.push((bx + pair[0], by + pair[1]));
                }
                cx = bx + args[arity - 2];
                cy = by + args[arity - 1];
            }
            'a' => {
                cx = bx + args[5];
                cy = by + args[6];
                out.push((cx, cy));
            }
            _ => break,
        }
    }
    out
}

/// `(min_x, min_y, max_x, max_y)` of a set of points.
pub fn bounds(points: &[(f32, f32)]) -> Option<(f32, f32, f32, f32)> {
    let first = points.first()?;
    Some(points.iter().skip(1).fold(
        (first.0, first.1, first.0, first.1),
        |(x0, y0, x1, y1), (x, y)| (x0.min(*x), y0.min(*y), x1.max(*x), y1.max(*y)),
    ))
}
