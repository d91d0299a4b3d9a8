//! Natal (radix) chart: zodiac ring, houses, axes, points and aspects.

use crate::aspects::{Aspect, find_aspects};
use crate::chart::ChartData;
use crate::config::RadixConfig;
use crate::error::Result;
use crate::geometry::{circle, line, point_position, segment, text};
use crate::paper::{Paper, wrapper_id};
use crate::settings::Settings;
use crate::svg::{Element, fmt_num};
use crate::symbol::Symbol;

/// Radii and rotation of one radix drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadixGeometry {
    pub cx: f32,
    pub cy: f32,
    /// Outer edge of the zodiac ring.
    pub radius: f32,
    /// Inner edge of the zodiac ring.
    pub ring_inner: f32,
    /// Depth of the degree ruler inside the ring.
    pub ruler: f32,
    /// Circle the point glyphs sit on.
    pub point_radius: f32,
    /// Aspect circle; cusp lines start here.
    pub indoor: f32,
    /// Added to ecliptic degrees so the Ascendant lands on the reference angle.
    pub shift: f32,
}

impl RadixGeometry {
    pub fn new(
        width: f32,
        height: f32,
        ascendant: f32,
        config: &RadixConfig,
        settings: &Settings,
    ) -> Self {
        let radius = (width.min(height) / 2.0 - config.margin).max(1.0);
        let band = radius / config.inner_circle_ratio;
        let ring_inner = radius - band;
        let ruler = band / config.ruler_ratio;
        let indoor = radius / config.indoor_circle_ratio;
        let point_radius =
            (ring_inner - 2.0 * ruler - config.padding * settings.symbol_scale).max(indoor);
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            radius,
            ring_inner,
            ruler,
            point_radius,
            indoor,
            shift: (360.0 - ascendant).rem_euclid(360.0),
        }
    }

    /// Ecliptic degree to chart angle.
    pub fn chart_angle(&self, degree: f32) -> f32 {
        (degree + self.shift).rem_euclid(360.0)
    }

    pub fn band(&self) -> f32 {
        self.radius - self.ring_inner
    }
}

/// A chart point after collision spreading.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedPoint {
    pub name: String,
    pub degree: f32,
    pub retrograde: bool,
    /// Chart angle of the real position.
    pub true_angle: f32,
    /// Chart angle the glyph is drawn at.
    pub angle: f32,
}

#[derive(Debug, Clone)]
pub struct RadixLayout {
    pub geometry: RadixGeometry,
    pub points: Vec<LocatedPoint>,
    pub aspects: Vec<Aspect>,
}

/// Smallest angle between two glyph centers of `collision_radius` on a circle of `radius`.
pub fn collision_angle(collision_radius: f32, radius: f32) -> f32 {
    if collision_radius <= 0.0 || radius <= 0.0 {
        return 0.0;
    }
    let ratio = (collision_radius / radius).min(1.0);
    2.0 * ratio.asin().to_degrees()
}

/// Moves angles apart until neighbours are at least `min_gap` degrees from each other.
///
/// Circular order is preserved, including the pair that meets across 0/360. When the
/// circle is too crowded for a local fit, points are spaced evenly. Output is
/// index-aligned with `angles`, normalized to `0..360`.
pub fn spread_angles(angles: &[f32], min_gap: f32) -> Vec<f32> {
    let n = angles.len();
    if n < 2 || min_gap <= 0.0 {
        return angles.iter().map(|a| a.rem_euclid(360.0)).collect();
    }
    let gap = min_gap.min(360.0 / n as f32);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|a, b| {
        angles[*a]
            .rem_euclid(360.0)
            .total_cmp(&angles[*b].rem_euclid(360.0))
            .then(a.cmp(b))
    });
    let sorted: Vec<f32> = order.iter().map(|i| angles[*i].rem_euclid(360.0)).collect();

    // cut the circle open at its widest gap
    let mut start = 0;
    let mut widest = sorted[0] + 360.0 - sorted[n - 1];
    for k in 0..n - 1 {
        let g = sorted[k + 1] - sorted[k];
        if g > widest {
            widest = g;
            start = k + 1;
        }
    }
    let linear: Vec<f32> = (0..n)
        .map(|t| {
            let idx = (start + t) % n;
            if idx < start {
                sorted[idx] + 360.0
            } else {
                sorted[idx]
            }
        })
        .collect();

    let mut placed = isotonic_spacing(&linear, gap);
    if placed[n - 1] - placed[0] > 360.0 - gap {
        // the fit wrapped past its own start: no room left, space evenly around the mean
        placed = even_spacing(&linear);
    }
    let mut out = vec![0.0; n];
    for (t, angle) in placed.into_iter().enumerate() {
        out[order[(start + t) % n]] = angle.rem_euclid(360.0);
    }
    out
}

/// Pool-adjacent-violators on `v[i] - i * gap`, so consecutive outputs differ by `>= gap`.
fn isotonic_spacing(values: &[f32], gap: f32) -> Vec<f32> {
    let mut blocks: Vec<(f32, usize)> = Vec::with_capacity(values.len());
    for (i, v) in values.iter().enumerate() {
        blocks.push((v - i as f32 * gap, 1));
        while blocks.len() >= 2 {
            let (s2, c2) = blocks[blocks.len() - 1];
            let (s1, c1) = blocks[blocks.len() - 2];
            if s1 / c1 as f32 <= s2 / c2 as f32 {
                break;
            }
            blocks.pop();
            if let Some(last) = blocks.last_mut() {
                *last = (s1 + s2, c1 + c2);
            }
        }
    }
    let mut out = Vec::with_capacity(values.len());
    for (sum, count) in blocks {
        let mean = sum / count as f32;
        for _ in 0..count {
            let i = out.len();
            out.push(mean + i as f32 * gap);
        }
    }
    out
}

/// `values[t] ≈ c + t * 360 / n` with `c` the least-squares offset.
fn even_spacing(values: &[f32]) -> Vec<f32> {
    let step = 360.0 / values.len() as f32;
    let offset = values
        .iter()
        .enumerate()
        .map(|(t, v)| v - t as f32 * step)
        .sum::<f32>()
        / values.len() as f32;
    (0..values.len()).map(|t| offset + t as f32 * step).collect()
}

pub fn locate_points(
    data: &ChartData,
    geometry: &RadixGeometry,
    config: &RadixConfig,
    settings: &Settings,
) -> Vec<LocatedPoint> {
    let points = data.points();
    let true_angles: Vec<f32> = points
        .iter()
        .map(|p| geometry.chart_angle(p.degree))
        .collect();
    let min_gap = collision_angle(
        config.collision_radius * settings.symbol_scale,
        geometry.point_radius,
    );
    let spread = spread_angles(&true_angles, min_gap);
    points
        .into_iter()
        .zip(true_angles)
        .zip(spread)
        .map(|((point, true_angle), angle)| LocatedPoint {
            name: point.name,
            degree: point.degree,
            retrograde: point.retrograde,
            true_angle,
            angle,
        })
        .collect()
}

/// Draws the whole radix into `paper` under `{root}-{radix}`.
pub fn draw_radix(paper: &mut Paper, data: &ChartData, config: &RadixConfig) -> Result<RadixLayout> {
    data.validate()?;
    config.validate()?;
    let settings = paper.settings();
    let ascendant = data.cusps[0];
    let geometry = RadixGeometry::new(paper.width(), paper.height(), ascendant, config, settings);
    let points = locate_points(data, &geometry, config, settings);
    let aspects = if config.draw_aspects {
        find_aspects(&data.points(), &config.aspects)
    } else {
        Vec::new()
    };

    let mut radix = Element::group().with_id(format!("{}-{}", paper.root_id(), settings.id_radix));
    radix.append_child(draw_background(paper, &geometry));
    radix.append_child(draw_signs(paper, &geometry));
    if config.draw_ruler {
        radix.append_child(draw_ruler(paper, &geometry));
    }
    radix.append_child(draw_cusps(paper, &geometry, &data.cusps, config));
    radix.append_child(draw_axis(paper, &geometry, &data.cusps, config));
    radix.append_child(draw_points(paper, &geometry, &points, config));
    if config.draw_aspects {
        radix.append_child(draw_aspects(paper, &geometry, &points, &aspects));
    }

    tracing::debug!(
        root = paper.root_id(),
        points = points.len(),
        aspects = aspects.len(),
        radius = geometry.radius,
        "radix drawn"
    );
    paper.append(radix);
    Ok(RadixLayout {
        geometry,
        points,
        aspects,
    })
}

fn category_group(paper: &Paper, category_id: &str) -> Element {
    Element::group().with_id(format!(
        "{}-{}-{}",
        paper.root_id(),
        paper.settings().id_radix,
        category_id
    ))
}

fn stroked(element: Element, color: &str, width: f32) -> Element {
    element
        .with_attr("stroke", color)
        .with_attr("stroke-width", fmt_num(width))
}

fn draw_background(paper: &Paper, g: &RadixGeometry) -> Element {
    let s = paper.settings();
    let mut group = category_group(paper, &s.id_bg);
    group.append_child(stroked(
        circle(g.cx, g.cy, g.radius).with_attr("fill", s.background.as_str()),
        &s.circle_color,
        s.circle_strong,
    ));
    group
}

fn draw_signs(paper: &Paper, g: &RadixGeometry) -> Element {
    let s = paper.settings();
    let mut group = category_group(paper, &s.id_signs);
    for (idx, color) in s.sign_colors.iter().enumerate() {
        let start = g.chart_angle(idx as f32 * 30.0);
        let band = segment(
            g.cx, g.cy, g.radius, start, start + 30.0, g.ring_inner, false, false, s,
        )
        .with_attr("fill", color.as_str());
        group.append_child(stroked(band, &s.circle_color, s.cusps_stroke));
    }
    for (idx, sign) in Symbol::SIGNS.iter().enumerate() {
        let middle = g.chart_angle(idx as f32 * 30.0 + 15.0);
        let (x, y) = point_position(g.cx, g.cy, g.radius - g.band() / 2.0, middle, s);
        let name = s.symbols.name(*sign);
        let mut wrapper = Element::group().with_id(paper.sign_wrapper_id(name));
        wrapper.append_child(paper.draw_symbol(*sign, x, y));
        group.append_child(wrapper);
    }
    group
}

fn draw_ruler(paper: &Paper, g: &RadixGeometry) -> Element {
    let s = paper.settings();
    let mut group = category_group(paper, "ruler");
    for step in 0..72 {
        let angle = g.chart_angle(step as f32 * 5.0);
        let depth = if step % 2 == 0 { g.ruler } else { g.ruler / 2.0 };
        let (x1, y1) = point_position(g.cx, g.cy, g.ring_inner, angle, s);
        let (x2, y2) = point_position(g.cx, g.cy, g.ring_inner - depth, angle, s);
        group.append_child(stroked(line(x1, y1, x2, y2), &s.line_color, s.cusps_stroke));
    }
    group.append_child(stroked(
        circle(g.cx, g.cy, g.ring_inner - g.ruler).with_attr("fill", "none"),
        &s.circle_color,
        s.cusps_stroke,
    ));
    group
}

fn draw_cusps(paper: &Paper, g: &RadixGeometry, cusps: &[f32], config: &RadixConfig) -> Element {
    let s = paper.settings();
    let mut group = category_group(paper, &s.id_cusps);
    group.append_child(stroked(
        circle(g.cx, g.cy, g.ring_inner).with_attr("fill", "none"),
        &s.circle_color,
        s.circle_strong,
    ));
    group.append_child(stroked(
        circle(g.cx, g.cy, g.indoor).with_attr("fill", "none"),
        &s.circle_color,
        s.cusps_stroke,
    ));
    for (idx, degree) in cusps.iter().enumerate() {
        let angle = g.chart_angle(*degree);
        let is_axis = idx % 3 == 0;
        let (x1, y1) = point_position(g.cx, g.cy, g.indoor, angle, s);
        let (x2, y2) = point_position(g.cx, g.cy, g.ring_inner, angle, s);
        let width = if is_axis {
            s.symbol_axis_stroke
        } else {
            s.cusps_stroke
        };
        group.append_child(stroked(line(x1, y1, x2, y2), &s.line_color, width));

        let next = cusps[(idx + 1) % cusps.len()];
        let span = (next - degree).rem_euclid(360.0);
        let middle = g.chart_angle(degree + span / 2.0);
        let radius = g.indoor + config.padding * s.symbol_scale / 2.0;
        let (x, y) = point_position(g.cx, g.cy, radius, middle, s);
        if let Some(house) = Symbol::cusp(idx + 1) {
            let mut wrapper =
                Element::group().with_id(paper.house_wrapper_id(s.symbols.name(house)));
            wrapper.append_child(paper.draw_symbol(house, x, y));
            group.append_child(wrapper);
        }
    }
    group
}

fn draw_axis(paper: &Paper, g: &RadixGeometry, cusps: &[f32], config: &RadixConfig) -> Element {
    let s = paper.settings();
    let mut group = category_group(paper, &s.id_axis);
    let axes = [
        (Symbol::As, cusps[0]),
        (Symbol::Ic, cusps[3]),
        (Symbol::Ds, cusps[6]),
        (Symbol::Mc, cusps[9]),
    ];
    let radius = g.radius + config.padding * s.symbol_scale;
    for (symbol, degree) in axes {
        let angle = g.chart_angle(degree);
        let (x1, y1) = point_position(g.cx, g.cy, g.radius, angle, s);
        let (x2, y2) = point_position(g.cx, g.cy, g.radius + g.ruler, angle, s);
        let name = s.symbols.name(symbol);
        let mut wrapper = paper.wrapper(&s.id_radix, &s.id_axis, name);
        wrapper.append_child(stroked(
            line(x1, y1, x2, y2),
            &s.line_color,
            s.symbol_axis_stroke,
        ));
        let (x, y) = point_position(g.cx, g.cy, radius, angle, s);
        wrapper.append_child(paper.draw_symbol(symbol, x, y));
        group.append_child(wrapper);
    }
    group
}

fn draw_points(
    paper: &Paper,
    g: &RadixGeometry,
    points: &[LocatedPoint],
    config: &RadixConfig,
) -> Element {
    let s = paper.settings();
    let mut group = category_group(paper, &s.id_points);
    let collision = config.collision_radius * s.symbol_scale;
    for point in points {
        let mut wrapper = paper.wrapper(&s.id_radix, &s.id_points, &point.name);
        let (x1, y1) = point_position(g.cx, g.cy, g.ring_inner - g.ruler, point.true_angle, s);
        let (x2, y2) = point_position(g.cx, g.cy, g.point_radius + collision, point.angle, s);
        wrapper.append_child(stroked(line(x1, y1, x2, y2), &s.points_color, s.cusps_stroke));
        let (x, y) = point_position(g.cx, g.cy, g.point_radius, point.angle, s);
        wrapper.append_child(paper.symbol(&point.name, x, y));
        if point.retrograde {
            let (rx, ry) =
                point_position(g.cx, g.cy, g.point_radius - 1.5 * collision, point.angle, s);
            wrapper.append_child(text("R", rx, ry, s.points_text_size, &s.points_color, s));
        }
        group.append_child(wrapper);
    }
    group
}

fn draw_aspects(
    paper: &Paper,
    g: &RadixGeometry,
    points: &[LocatedPoint],
    aspects: &[Aspect],
) -> Element {
    let s = paper.settings();
    let mut group = category_group(paper, &s.id_aspects);
    let angle_of = |name: &str| {
        points
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.true_angle)
    };
    for aspect in aspects {
        if aspect.color == "transparent" || aspect.color == "none" {
            continue;
        }
        let (Some(from), Some(to)) = (angle_of(&aspect.from), angle_of(&aspect.to)) else {
            continue;
        };
        let (x1, y1) = point_position(g.cx, g.cy, g.indoor, from, s);
        let (x2, y2) = point_position(g.cx, g.cy, g.indoor, to, s);
        let name = format!("{}-{}-{}", aspect.from, aspect.to, aspect.name);
        let chord = stroked(line(x1, y1, x2, y2), &aspect.color, s.cusps_stroke)
            .with_id(wrapper_id(paper.root_id(), &s.id_radix, &s.id_aspects, &name));
        group.append_child(chord);
    }
    group
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper::Document;

    fn sample() -> ChartData {
        ChartData::from_json(
            r#"{
                "planets": {
                    "Sun": [10.0], "Moon": [11.0], "Mercury": [12.0, -1.0],
                    "Venus": [100.0], "Mars": [190.0], "Jupiter": [250.0]
                },
                "cusps": [296, 350, 30, 56, 75, 94, 116, 170, 210, 236, 255, 274]
            }"#,
        )
        .unwrap()
    }

    fn paper() -> Paper {
        let doc = Document::new().with_container("paper");
        Paper::new(&doc, "paper", 800.0, 800.0, Settings::default()).unwrap()
    }

    fn circular_gap(a: f32, b: f32) -> f32 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    #[test]
    fn spreading_keeps_separated_points_in_place() {
        let angles = [10.0, 100.0, 200.0];
        assert_eq!(spread_angles(&angles, 8.0), vec![10.0, 100.0, 200.0]);
    }

    #[test]
    fn spreading_separates_identical_angles_in_order() {
        let angles = [50.0, 50.0, 50.0];
        let out = spread_angles(&angles, 6.0);
        assert!((out[0] - 44.0).abs() < 1e-3);
        assert!((out[1] - 50.0).abs() < 1e-3);
        assert!((out[2] - 56.0).abs() < 1e-3);
    }

    #[test]
    fn spreading_handles_the_zero_crossing() {
        let angles = [359.0, 1.0, 0.0];
        let out = spread_angles(&angles, 10.0);
        for i in 0..out.len() {
            for j in i + 1..out.len() {
                assert!(circular_gap(out[i], out[j]) >= 10.0 - 1e-3, "{out:?}");
            }
        }
        // circular order 359 -> 0 -> 1 survives
        assert!(circular_gap(out[0], out[2]) < circular_gap(out[0], out[1]));
    }

    #[test]
    fn crowded_circle_falls_back_to_even_spacing() {
        let angles = vec![0.0; 40];
        let out = spread_angles(&angles, 20.0);
        let mut sorted = out.clone();
        sorted.sort_by(f32::total_cmp);
        for pair in sorted.windows(2) {
            assert!(pair[1] - pair[0] >= 9.0 - 1e-2);
        }
    }

    /// Minimum circular gap between neighbours and whether the cyclic order matches the input's.
    fn circular_check(input: &[f32], out: &[f32]) -> (f32, bool) {
        let mut by_input: Vec<usize> = (0..input.len()).collect();
        by_input.sort_by(|a, b| input[*a].total_cmp(&input[*b]).then(a.cmp(b)));
        let mut by_output: Vec<usize> = (0..out.len()).collect();
        by_output.sort_by(|a, b| out[*a].total_cmp(&out[*b]));
        let n = out.len();
        let min_gap = (0..n)
            .map(|k| (out[by_output[(k + 1) % n]] - out[by_output[k]]).rem_euclid(360.0))
            .fold(f32::INFINITY, f32::min);
        let same_cycle =
            (0..n).any(|shift| (0..n).all(|k| by_output[(k + shift) % n] == by_input[k]));
        (min_gap, same_cycle)
    }

    #[test]
    fn spreading_keeps_the_gap_across_zero() {
        let angles = [
            333.15, 221.44, 236.27, 110.29, 197.69, 42.06, 226.15, 187.43, 258.50, 261.35,
        ];
        let out = spread_angles(&angles, 35.71);
        let (min_gap, same_cycle) = circular_check(&angles, &out);
        assert!(min_gap >= 35.71 - 1e-2, "{out:?}");
        assert!(same_cycle, "{out:?}");
    }

    #[test]
    fn spreading_holds_for_scattered_crowds() {
        // deterministic LCG so failures reproduce
        let mut seed = 0x2545_f491_u32;
        let mut next = move || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32 * 360.0
        };
        for round in 0..500 {
            let count = 2 + round % 14;
            let gap = 5.0 + (round % 7) as f32 * 5.0;
            let angles: Vec<f32> = (0..count).map(|_| next()).collect();
            let out = spread_angles(&angles, gap);
            let expected = gap.min(360.0 / count as f32);
            let (min_gap, same_cycle) = circular_check(&angles, &out);
            assert!(min_gap >= expected - 1e-2, "round {round}: {angles:?} -> {out:?}");
            assert!(same_cycle, "round {round}: {angles:?} -> {out:?}");
        }
    }

    #[test]
    fn crowded_wheel_keeps_glyphs_apart() {
        let mut planets = std::collections::BTreeMap::new();
        for (idx, symbol) in Symbol::POINTS.iter().enumerate() {
            planets.insert(symbol.default_name().to_string(), vec![(idx as f32 * 47.3) % 140.0]);
        }
        let data = ChartData {
            planets,
            cusps: vec![0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0],
        };
        let doc = Document::new().with_container("paper");
        let settings = Settings {
            symbol_scale: 2.0,
            ..Settings::default()
        };
        let mut paper = Paper::new(&doc, "paper", 500.0, 500.0, settings).unwrap();
        let config = RadixConfig::default();
        let layout = draw_radix(&mut paper, &data, &config).unwrap();
        let required = collision_angle(config.collision_radius * 2.0, layout.geometry.point_radius)
            .min(360.0 / layout.points.len() as f32);
        for (i, a) in layout.points.iter().enumerate() {
            for b in &layout.points[i + 1..] {
                let gap = circular_gap(a.angle, b.angle);
                assert!(gap >= required - 1e-2, "{} vs {}: {gap}", a.name, b.name);
            }
        }
    }

    #[test]
    fn collision_angle_matches_chord() {
        let angle = collision_angle(10.0, 100.0);
        let chord = 2.0 * 100.0 * (angle.to_radians() / 2.0).sin();
        assert!((chord - 20.0).abs() < 1e-3);
        assert_eq!(collision_angle(0.0, 100.0), 0.0);
    }

    #[test]
    fn ascendant_lands_on_the_reference_angle() {
        let g = RadixGeometry::new(
            800.0,
            800.0,
            296.0,
            &RadixConfig::default(),
            &Settings::default(),
        );
        assert_eq!(g.chart_angle(296.0), 0.0);
        let (x, y) = point_position(g.cx, g.cy, g.radius, g.chart_angle(296.0), &Settings::default());
        assert!((x - (g.cx - g.radius)).abs() < 1e-3);
        assert!((y - g.cy).abs() < 1e-3);
        assert!(g.indoor < g.point_radius && g.point_radius < g.ring_inner);
    }

    #[test]
    fn radix_has_every_wrapper() {
        let mut paper = paper();
        let layout = draw_radix(&mut paper, &sample(), &RadixConfig::default()).unwrap();
        assert_eq!(layout.points.len(), 6);
        assert!(paper.find("paper-astrology-radix").is_some());
        for id in [
            "paper-astrology-radix-signs-Aries",
            "paper-astrology-radix-signs-Pisces",
            "paper-astrology-radix-cusps-1",
            "paper-astrology-radix-cusps-12",
            "paper-astrology-radix-axis-As",
            "paper-astrology-radix-axis-Mc",
            "paper-astrology-radix-planets-Sun",
            "paper-astrology-radix-planets-Jupiter",
        ] {
            assert!(paper.find(id).is_some(), "missing {id}");
        }
    }

    #[test]
    fn crowded_points_keep_minimum_separation() {
        let mut paper = paper();
        let config = RadixConfig::default();
        let layout = draw_radix(&mut paper, &sample(), &config).unwrap();
        let min_gap = collision_angle(config.collision_radius, layout.geometry.point_radius);
        let crowd: Vec<&LocatedPoint> = layout
            .points
            .iter()
            .filter(|p| ["Sun", "Moon", "Mercury"].contains(&p.name.as_str()))
            .collect();
        for i in 0..crowd.len() {
            for j in i + 1..crowd.len() {
                assert!(circular_gap(crowd[i].angle, crowd[j].angle) >= min_gap - 1e-3);
            }
        }
    }

    #[test]
    fn retrograde_points_get_a_mark() {
        let mut paper = paper();
        draw_radix(&mut paper, &sample(), &RadixConfig::default()).unwrap();
        let mercury = paper.find("paper-astrology-radix-planets-Mercury").unwrap();
        assert_eq!(mercury.children().len(), 3);
        let mark = &mercury.children()[2].children()[0];
        assert_eq!(mark.text(), Some("R"));
        let sun = paper.find("paper-astrology-radix-planets-Sun").unwrap();
        assert_eq!(sun.children().len(), 2);
    }

    #[test]
    fn unknown_points_still_render() {
        let mut data = sample();
        data.planets.insert("Vulcan".to_string(), vec![150.0]);
        let mut paper = paper();
        draw_radix(&mut paper, &data, &RadixConfig::default()).unwrap();
        let vulcan = paper.find("paper-astrology-radix-planets-Vulcan").unwrap();
        assert_eq!(vulcan.children()[1].children()[0].attr("fill"), Some("#ff0000"));
    }

    #[test]
    fn aspects_can_be_switched_off() {
        let mut paper = paper();
        let config = RadixConfig {
            draw_aspects: false,
            ..RadixConfig::default()
        };
        let layout = draw_radix(&mut paper, &sample(), &config).unwrap();
        assert!(layout.aspects.is_empty());
        assert!(paper.find("paper-astrology-radix-aspects").is_none());
    }

    #[test]
    fn aspect_chords_are_drawn() {
        let mut paper = paper();
        let layout = draw_radix(&mut paper, &sample(), &RadixConfig::default()).unwrap();
        assert!(layout.aspects.iter().any(|a| a.name == "square"));
        assert!(paper.find("paper-astrology-radix-aspects-Mars-Venus-square").is_some());
    }

    #[test]
    fn invalid_data_leaves_paper_untouched() {
        let mut paper = paper();
        let data = ChartData {
            cusps: vec![0.0; 3],
            ..ChartData::default()
        };
        assert!(draw_radix(&mut paper, &data, &RadixConfig::default()).is_err());
        assert!(paper.root().children().is_empty());
    }
}
