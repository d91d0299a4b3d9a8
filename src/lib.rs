pub mod aspects;
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod paper;
pub mod radix;
pub mod render;
pub mod resolver;
pub mod settings;
pub mod svg;
pub mod symbol;

pub use chart::ChartData;
#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, load_config};
pub use error::{ChartError, Result};
pub use paper::{Document, Paper};
pub use render::{render_chart, render_chart_with_override};
pub use resolver::{SymbolOverride, SymbolResolver};
pub use settings::Settings;
pub use symbol::Symbol;
