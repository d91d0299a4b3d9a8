use crate::chart::ChartData;
use crate::config::{Config, RenderConfig};
use crate::error::Result as ChartResult;
use crate::paper::{Document, Paper};
use crate::radix::draw_radix;
use crate::resolver::SymbolOverride;
use anyhow::Result;
use std::path::Path;

/// Renders one radix chart to a standalone SVG document.
pub fn render_chart(data: &ChartData, config: &Config) -> ChartResult<String> {
    let paper = radix_paper(data, config, |paper| paper)?;
    Ok(paper.to_svg_string())
}

/// Like [`render_chart`], with caller-supplied symbol art tried before the built-in glyphs.
pub fn render_chart_with_override(
    data: &ChartData,
    config: &Config,
    custom: impl SymbolOverride + 'static,
) -> ChartResult<String> {
    let paper = radix_paper(data, config, move |paper| paper.with_override(custom))?;
    Ok(paper.to_svg_string())
}

fn radix_paper(
    data: &ChartData,
    config: &Config,
    customize: impl FnOnce(Paper) -> Paper,
) -> ChartResult<Paper> {
    let render = &config.render;
    let document = Document::new().with_container(&render.container_id);
    let mut paper = customize(Paper::new(
        &document,
        &render.container_id,
        render.width,
        render.height,
        config.settings.clone(),
    )?);
    draw_radix(&mut paper, data, &config.radix)?;
    Ok(paper)
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            println!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    if let Some(size) = usvg::Size::from_wh(render_cfg.width, render_cfg.height) {
        opt.default_size = size;
    }

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    tracing::debug!(path = %output.display(), width = size.width(), height = size.height(), "wrote png");
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    anyhow::bail!("PNG output requires the `png` feature")
}
