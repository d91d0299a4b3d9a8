use kintuni_chart::{ChartData, Config, Settings, render_chart};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartRenderOptions {
    preset: Option<String>,
    width: Option<f32>,
    height: Option<f32>,
    container_id: Option<String>,
    symbol_scale: Option<f32>,
    font_family: Option<String>,
    add_click_area: Option<bool>,
    draw_aspects: Option<bool>,
}

fn build_config(options: ChartRenderOptions) -> Result<Config, String> {
    let mut config = Config::default();
    if let Some(preset) = options.preset.as_deref() {
        config.settings = match preset {
            "classic" | "default" => Settings::classic(),
            "dark" => Settings::dark(),
            other => return Err(format!("unknown settings preset `{other}`")),
        };
    }

    if let Some(width) = options.width {
        config.render.width = width;
    }
    if let Some(height) = options.height {
        config.render.height = height;
    }
    if let Some(container_id) = options.container_id {
        config.render.container_id = container_id;
    }
    if let Some(scale) = options.symbol_scale {
        config.settings.symbol_scale = scale;
    }
    if let Some(font_family) = options.font_family {
        config.settings.font_family = font_family;
    }
    if let Some(click) = options.add_click_area {
        config.settings.add_click_area = click;
    }
    if let Some(aspects) = options.draw_aspects {
        config.radix.draw_aspects = aspects;
    }

    Ok(config)
}

#[wasm_bindgen]
pub fn render_chart_svg(data_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<ChartRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        ChartRenderOptions::default()
    };

    let config = build_config(options).map_err(|error| JsValue::from_str(&error))?;
    let data = ChartData::from_json(data_json).map_err(|error| JsValue::from_str(&error.to_string()))?;
    render_chart(&data, &config).map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use kintuni_chart::{ChartData, Settings, render_chart};

    use crate::{ChartRenderOptions, build_config};

    #[test]
    fn renders_chart_with_dark_preset_and_custom_container() {
        let data = ChartData::from_json(
            r#"{
                "planets": { "Sun": [48.2], "Moon": [300.5, -1], "Mars": [138.0] },
                "cusps": [296, 350, 30, 56, 75, 94, 116, 170, 210, 236, 255, 274]
            }"#,
        )
        .expect("chart data should parse");
        let options: ChartRenderOptions =
            serde_json::from_str(r#"{"preset": "dark", "containerId": "natal", "width": 500}"#)
                .expect("options should parse");

        let config = build_config(options).expect("dark preset should be known");
        let svg = render_chart(&data, &config).expect("chart should render");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("id=\"natal-astrology-radix-planets-Moon\""));
        assert!(svg.contains(&Settings::dark().background));
        assert!(svg.contains("width=\"500\""));
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let options: ChartRenderOptions =
            serde_json::from_str(r#"{"preset": "neon"}"#).expect("options should parse");
        let error = build_config(options).expect_err("unknown preset should fail");
        assert!(error.contains("neon"));

        let options: ChartRenderOptions =
            serde_json::from_str(r#"{"preset": "default"}"#).expect("options should parse");
        let config = build_config(options).expect("default preset should be known");
        assert_eq!(config.settings, Settings::classic());
    }
}
