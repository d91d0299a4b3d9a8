use std::collections::HashMap;
use std::fmt;

use crate::glyph::{draw_glyph, glyph_spec, placeholder};
use crate::settings::Settings;
use crate::svg::Element;
use crate::symbol::Symbol;

/// Caller-supplied symbol art that takes precedence over the built-in glyphs.
pub trait SymbolOverride {
    /// `None` hands the name back to the built-in table.
    fn resolve(&self, name: &str, x: f32, y: f32, settings: &Settings) -> Option<Element>;
}

impl<F> SymbolOverride for F
where
    F: Fn(&str, f32, f32, &Settings) -> Option<Element>,
{
    fn resolve(&self, name: &str, x: f32, y: f32, settings: &Settings) -> Option<Element> {
        self(name, x, y, settings)
    }
}

/// Maps symbol names to glyphs: custom override first, then the built-in table,
/// then a placeholder marker.
pub struct SymbolResolver {
    table: HashMap<String, Symbol>,
    custom: Option<Box<dyn SymbolOverride>>,
}

impl SymbolResolver {
    pub fn new(settings: &Settings) -> Self {
        let table = settings
            .symbols
            .iter()
            .map(|(symbol, name)| (name.to_string(), symbol))
            .collect();
        Self {
            table,
            custom: None,
        }
    }

    pub fn with_override(mut self, custom: impl SymbolOverride + 'static) -> Self {
        self.custom = Some(Box::new(custom));
        self
    }

    pub fn has_override(&self) -> bool {
        self.custom.is_some()
    }

    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.table.get(name).copied()
    }

    pub fn resolve(&self, name: &str, x: f32, y: f32, settings: &Settings) -> Element {
        if let Some(custom) = &self.custom
            && let Some(element) = custom.resolve(name, x, y, settings)
        {
            return element;
        }
        match self.lookup(name).and_then(glyph_spec) {
            Some(spec) => draw_glyph(spec, x, y, settings),
            None => {
                tracing::warn!(symbol = name, x, y, "unknown chart symbol, drawing placeholder");
                placeholder(x, y)
            }
        }
    }

    /// Resolves a known symbol through its configured name, so overrides still apply.
    pub fn draw(&self, symbol: Symbol, x: f32, y: f32, settings: &Settings) -> Element {
        self.resolve(settings.symbols.name(symbol), x, y, settings)
    }
}

impl fmt::Debug for SymbolResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolResolver")
            .field("symbols", &self.table.len())
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::placeholder;

    #[test]
    fn every_configured_name_resolves_to_its_glyph() {
        let settings = Settings::default();
        let resolver = SymbolResolver::new(&settings);
        for (symbol, name) in settings.symbols.iter() {
            let el = resolver.resolve(name, 13.0, -250.5, &settings);
            assert_eq!(el.tag(), "g");
            let expected = draw_glyph(glyph_spec(symbol).unwrap(), 13.0, -250.5, &settings);
            assert_eq!(el, expected, "{name}");
        }
    }

    #[test]
    fn unknown_names_fall_back_to_placeholder() {
        let settings = Settings::default();
        let resolver = SymbolResolver::new(&settings);
        let el = resolver.resolve("Vulcan", 40.0, 50.0, &settings);
        assert_eq!(el, placeholder(40.0, 50.0));
        let circle = &el.children()[0];
        assert_eq!(circle.attr("stroke"), Some("#ffff00"));
        assert_eq!(circle.attr("fill"), Some("#ff0000"));
        assert_eq!(circle.attr("r"), Some("8"));
    }

    #[test]
    fn renamed_symbols_resolve_by_new_name_only() {
        let mut settings = Settings::default();
        settings.symbols.set(Symbol::Sun, "Sol");
        let resolver = SymbolResolver::new(&settings);
        assert_eq!(resolver.lookup("Sol"), Some(Symbol::Sun));
        assert_eq!(resolver.lookup("Sun"), None);
    }

    #[test]
    fn override_wins_when_it_returns_an_element() {
        let settings = Settings::default();
        let custom = Element::new("image").with_attr("href", "sun.png");
        let expected = custom.clone();
        let resolver = SymbolResolver::new(&settings).with_override(
            move |name: &str, _x: f32, _y: f32, _s: &Settings| {
                (name == "Sun").then(|| custom.clone())
            },
        );
        assert!(resolver.has_override());
        assert_eq!(resolver.resolve("Sun", 1.0, 2.0, &settings), expected);
        let moon = resolver.resolve("Moon", 1.0, 2.0, &settings);
        assert_eq!(
            moon,
            draw_glyph(glyph_spec(Symbol::Moon).unwrap(), 1.0, 2.0, &settings)
        );
    }

    #[test]
    fn draw_goes_through_the_override() {
        let settings = Settings::default();
        let resolver = SymbolResolver::new(&settings).with_override(
            |_: &str, _: f32, _: f32, _: &Settings| Some(Element::new("use")),
        );
        assert_eq!(resolver.draw(Symbol::Aries, 0.0, 0.0, &settings).tag(), "use");
    }
}
