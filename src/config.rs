use crate::aspects::{AspectDefinition, default_aspects};
use crate::error::{ChartError, Result};
use crate::settings::Settings;
use crate::symbol::Symbol;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct RadixConfig {
    /// Space between the outer ring and the canvas edge; axis glyphs live here.
    pub margin: f32,
    /// Gap between the ruler and the point circle.
    pub padding: f32,
    /// Outer radius divided by this gives the aspect circle radius.
    pub indoor_circle_ratio: f32,
    /// Outer radius divided by this gives the sign band thickness.
    pub inner_circle_ratio: f32,
    /// Sign band thickness divided by this gives the ruler depth.
    pub ruler_ratio: f32,
    /// Glyph radius used when spreading crowded points apart.
    pub collision_radius: f32,
    pub draw_ruler: bool,
    pub draw_aspects: bool,
    pub aspects: Vec<AspectDefinition>,
}

impl Default for RadixConfig {
    fn default() -> Self {
        Self {
            margin: 50.0,
            padding: 18.0,
            indoor_circle_ratio: 2.0,
            inner_circle_ratio: 8.0,
            ruler_ratio: 4.0,
            collision_radius: 10.0,
            draw_ruler: true,
            draw_aspects: true,
            aspects: default_aspects(),
        }
    }
}

impl RadixConfig {
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("indoorCircleRatio", self.indoor_circle_ratio),
            ("innerCircleRatio", self.inner_circle_ratio),
            ("rulerRatio", self.ruler_ratio),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidSettings {
                    message: format!("{name} must be a positive number, got {value}"),
                });
            }
        }
        let non_negative = [
            ("margin", self.margin),
            ("padding", self.padding),
            ("collisionRadius", self.collision_radius),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidSettings {
                    message: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }
        if let Some(def) = self
            .aspects
            .iter()
            .find(|def| !def.degree.is_finite() || !def.orbit.is_finite() || def.orbit < 0.0)
        {
            return Err(ChartError::InvalidSettings {
                message: format!("aspect `{}` has an invalid degree or orbit", def.name),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    /// Id of the host element the chart is mounted into.
    pub container_id: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 800.0,
            container_id: "paper".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub settings: Settings,
    pub radix: RadixConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    preset: Option<String>,
    settings: Option<SettingsFile>,
    radix: Option<RadixConfigFile>,
    render: Option<RenderConfigFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    symbol_scale: Option<f32>,
    font_family: Option<String>,
    background: Option<String>,
    points_color: Option<String>,
    points_stroke: Option<f32>,
    points_text_size: Option<f32>,
    signs_color: Option<String>,
    signs_stroke: Option<f32>,
    cusps_font_color: Option<String>,
    cusps_stroke: Option<f32>,
    symbol_axis_font_color: Option<String>,
    symbol_axis_stroke: Option<f32>,
    circle_color: Option<String>,
    circle_strong: Option<f32>,
    line_color: Option<String>,
    sign_colors: Option<Vec<String>>,
    add_click_area: Option<bool>,
    shift_in_degrees: Option<f32>,
    id_chart: Option<String>,
    id_radix: Option<String>,
    id_bg: Option<String>,
    id_signs: Option<String>,
    id_cusps: Option<String>,
    id_axis: Option<String>,
    id_points: Option<String>,
    id_aspects: Option<String>,
    /// Keyed by symbol id (`sun`, `aries`, `as`, `cusp1`, ...).
    symbols: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RadixConfigFile {
    margin: Option<f32>,
    padding: Option<f32>,
    indoor_circle_ratio: Option<f32>,
    inner_circle_ratio: Option<f32>,
    ruler_ratio: Option<f32>,
    collision_radius: Option<f32>,
    draw_ruler: Option<bool>,
    draw_aspects: Option<bool>,
    aspects: Option<Vec<AspectDefinition>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    container_id: Option<String>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

/// Strict JSON first; JSON5 (comments, trailing commas) as a fallback.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(json_err) => json5::from_str(contents).map_err(|json5_err| {
            anyhow::anyhow!("invalid config: {json_err} (json5: {json5_err})")
        })?,
    };
    let config = apply_config_file(parsed)?;
    config.settings.validate()?;
    config.radix.validate()?;
    Ok(config)
}

fn apply_config_file(parsed: ConfigFile) -> anyhow::Result<Config> {
    let mut config = Config::default();

    if let Some(preset) = parsed.preset.as_deref() {
        config.settings = match preset {
            "classic" | "default" => Settings::classic(),
            "dark" => Settings::dark(),
            other => anyhow::bail!("unknown settings preset `{other}`"),
        };
    }

    if let Some(s) = parsed.settings {
        apply_settings(&mut config.settings, s)?;
    }

    if let Some(radix) = parsed.radix {
        if let Some(v) = radix.margin {
            config.radix.margin = v;
        }
        if let Some(v) = radix.padding {
            config.radix.padding = v;
        }
        if let Some(v) = radix.indoor_circle_ratio {
            config.radix.indoor_circle_ratio = v;
        }
        if let Some(v) = radix.inner_circle_ratio {
            config.radix.inner_circle_ratio = v;
        }
        if let Some(v) = radix.ruler_ratio {
            config.radix.ruler_ratio = v;
        }
        if let Some(v) = radix.collision_radius {
            config.radix.collision_radius = v;
        }
        if let Some(v) = radix.draw_ruler {
            config.radix.draw_ruler = v;
        }
        if let Some(v) = radix.draw_aspects {
            config.radix.draw_aspects = v;
        }
        if let Some(v) = radix.aspects {
            config.radix.aspects = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.container_id {
            config.render.container_id = v;
        }
    }

    Ok(config)
}

fn apply_settings(settings: &mut Settings, file: SettingsFile) -> anyhow::Result<()> {
    if let Some(v) = file.symbol_scale {
        settings.symbol_scale = v;
    }
    if let Some(v) = file.font_family {
        settings.font_family = v;
    }
    if let Some(v) = file.background {
        settings.background = v;
    }
    if let Some(v) = file.points_color {
        settings.points_color = v;
    }
    if let Some(v) = file.points_stroke {
        settings.points_stroke = v;
    }
    if let Some(v) = file.points_text_size {
        settings.points_text_size = v;
    }
    if let Some(v) = file.signs_color {
        settings.signs_color = v;
    }
    if let Some(v) = file.signs_stroke {
        settings.signs_stroke = v;
    }
    if let Some(v) = file.cusps_font_color {
        settings.cusps_font_color = v;
    }
    if let Some(v) = file.cusps_stroke {
        settings.cusps_stroke = v;
    }
    if let Some(v) = file.symbol_axis_font_color {
        settings.symbol_axis_font_color = v;
    }
    if let Some(v) = file.symbol_axis_stroke {
        settings.symbol_axis_stroke = v;
    }
    if let Some(v) = file.circle_color {
        settings.circle_color = v;
    }
    if let Some(v) = file.circle_strong {
        settings.circle_strong = v;
    }
    if let Some(v) = file.line_color {
        settings.line_color = v;
    }
    if let Some(colors) = file.sign_colors {
        if colors.len() > settings.sign_colors.len() {
            anyhow::bail!("signColors takes at most 12 entries, got {}", colors.len());
        }
        for (slot, color) in settings.sign_colors.iter_mut().zip(colors) {
            *slot = color;
        }
    }
    if let Some(v) = file.add_click_area {
        settings.add_click_area = v;
    }
    if let Some(v) = file.shift_in_degrees {
        settings.shift_in_degrees = v;
    }
    if let Some(v) = file.id_chart {
        settings.id_chart = v;
    }
    if let Some(v) = file.id_radix {
        settings.id_radix = v;
    }
    if let Some(v) = file.id_bg {
        settings.id_bg = v;
    }
    if let Some(v) = file.id_signs {
        settings.id_signs = v;
    }
    if let Some(v) = file.id_cusps {
        settings.id_cusps = v;
    }
    if let Some(v) = file.id_axis {
        settings.id_axis = v;
    }
    if let Some(v) = file.id_points {
        settings.id_points = v;
    }
    if let Some(v) = file.id_aspects {
        settings.id_aspects = v;
    }
    if let Some(names) = file.symbols {
        for (key, name) in names {
            let symbol: Symbol = serde_json::from_value(serde_json::Value::String(key.clone()))
                .with_context(|| format!("unknown symbol `{key}` in settings.symbols"))?;
            settings.symbols.set(symbol, name);
        }
    }
    Ok(())
}
