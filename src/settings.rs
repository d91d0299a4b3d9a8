use crate::error::{ChartError, Result};
use crate::symbol::{SymbolCategory, SymbolNames};
use std::collections::HashSet;

const CLASSIC_SIGN_COLORS: [&str; 12] = [
    "#FF4500", "#8B4513", "#87CEEB", "#27AE60", "#FF4500", "#8B4513", "#87CEEB", "#27AE60",
    "#FF4500", "#8B4513", "#87CEEB", "#27AE60",
];

const DARK_SIGN_COLORS: [&str; 12] = [
    "#7A2E1F", "#5C3A21", "#2F5566", "#1F5C3A", "#7A2E1F", "#5C3A21", "#2F5566", "#1F5C3A",
    "#7A2E1F", "#5C3A21", "#2F5566", "#1F5C3A",
];

/// Everything a render pass needs to know about colors, strokes, ids and symbol names.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub symbol_scale: f32,
    pub font_family: String,
    pub background: String,
    pub points_color: String,
    pub points_stroke: f32,
    pub points_text_size: f32,
    pub signs_color: String,
    pub signs_stroke: f32,
    pub cusps_font_color: String,
    pub cusps_stroke: f32,
    pub symbol_axis_font_color: String,
    pub symbol_axis_stroke: f32,
    pub circle_color: String,
    pub circle_strong: f32,
    pub line_color: String,
    pub sign_colors: [String; 12],
    pub add_click_area: bool,
    /// Chart angle that ecliptic 0 maps to; 180 puts it on the left.
    pub shift_in_degrees: f32,
    pub id_chart: String,
    pub id_radix: String,
    pub id_bg: String,
    pub id_signs: String,
    pub id_cusps: String,
    pub id_axis: String,
    pub id_points: String,
    pub id_aspects: String,
    pub symbols: SymbolNames,
}

impl Settings {
    pub fn classic() -> Self {
        Self {
            symbol_scale: 1.0,
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            background: "#FFFFFF".to_string(),
            points_color: "#000000".to_string(),
            points_stroke: 1.8,
            points_text_size: 8.0,
            signs_color: "#000000".to_string(),
            signs_stroke: 1.5,
            cusps_font_color: "#000000".to_string(),
            cusps_stroke: 1.0,
            symbol_axis_font_color: "#333333".to_string(),
            symbol_axis_stroke: 1.6,
            circle_color: "#333333".to_string(),
            circle_strong: 2.0,
            line_color: "#333333".to_string(),
            sign_colors: CLASSIC_SIGN_COLORS.map(str::to_string),
            add_click_area: false,
            shift_in_degrees: 180.0,
            id_chart: "astrology".to_string(),
            id_radix: "radix".to_string(),
            id_bg: "bg".to_string(),
            id_signs: "signs".to_string(),
            id_cusps: "cusps".to_string(),
            id_axis: "axis".to_string(),
            id_points: "planets".to_string(),
            id_aspects: "aspects".to_string(),
            symbols: SymbolNames::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: "#14141F".to_string(),
            points_color: "#F2F2F7".to_string(),
            signs_color: "#F2F2F7".to_string(),
            cusps_font_color: "#C8C8D4".to_string(),
            symbol_axis_font_color: "#E0E0EA".to_string(),
            circle_color: "#8A8AA0".to_string(),
            line_color: "#8A8AA0".to_string(),
            sign_colors: DARK_SIGN_COLORS.map(str::to_string),
            ..Self::classic()
        }
    }

    /// Stroke color and width for a glyph family.
    pub fn category_style(&self, category: SymbolCategory) -> (&str, f32) {
        match category {
            SymbolCategory::Point => (&self.points_color, self.points_stroke),
            SymbolCategory::Sign => (&self.signs_color, self.signs_stroke),
            SymbolCategory::Cusp => (&self.cusps_font_color, self.cusps_stroke),
            SymbolCategory::Axis => (&self.symbol_axis_font_color, self.symbol_axis_stroke),
        }
    }

    /// Rejects settings that would produce degenerate or ambiguous output.
    pub fn validate(&self) -> Result<()> {
        if !self.symbol_scale.is_finite() || self.symbol_scale <= 0.0 {
            return Err(invalid(format!(
                "symbol_scale must be a positive number, got {}",
                self.symbol_scale
            )));
        }
        if !self.shift_in_degrees.is_finite() {
            return Err(invalid("shift_in_degrees must be finite".to_string()));
        }
        let strokes = [
            ("points_stroke", self.points_stroke),
            ("signs_stroke", self.signs_stroke),
            ("cusps_stroke", self.cusps_stroke),
            ("symbol_axis_stroke", self.symbol_axis_stroke),
            ("circle_strong", self.circle_strong),
            ("points_text_size", self.points_text_size),
        ];
        for (name, value) in strokes {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{name} must be a non-negative number, got {value}")));
            }
        }
        let ids = [
            ("id_chart", &self.id_chart),
            ("id_radix", &self.id_radix),
            ("id_bg", &self.id_bg),
            ("id_signs", &self.id_signs),
            ("id_cusps", &self.id_cusps),
            ("id_axis", &self.id_axis),
            ("id_points", &self.id_points),
            ("id_aspects", &self.id_aspects),
        ];
        for (name, value) in ids {
            if value.trim().is_empty() {
                return Err(invalid(format!("{name} must not be empty")));
            }
        }
        let mut seen = HashSet::new();
        for (symbol, name) in self.symbols.iter() {
            if name.is_empty() {
                return Err(invalid(format!("symbol {symbol:?} has an empty name")));
            }
            if !seen.insert(name) {
                return Err(invalid(format!("symbol name `{name}` is used twice")));
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::classic()
    }
}

fn invalid(message: String) -> ChartError {
    ChartError::InvalidSettings { message }
}
