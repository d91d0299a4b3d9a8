use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Every glyph the chart knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Symbol {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    Lilith,
    NNode,
    SNode,
    Fortune,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
    As,
    Ds,
    Mc,
    Ic,
    Cusp1,
    Cusp2,
    Cusp3,
    Cusp4,
    Cusp5,
    Cusp6,
    Cusp7,
    Cusp8,
    Cusp9,
    Cusp10,
    Cusp11,
    Cusp12,
}

/// Which stroke/color family a glyph is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolCategory {
    Point,
    Sign,
    Axis,
    Cusp,
}

static DEFAULT_NAMES: Lazy<HashMap<&'static str, Symbol>> = Lazy::new(|| {
    Symbol::ALL
        .iter()
        .map(|symbol| (symbol.default_name(), *symbol))
        .collect()
});

impl Symbol {
    pub const POINTS: [Symbol; 15] = [
        Symbol::Sun,
        Symbol::Moon,
        Symbol::Mercury,
        Symbol::Venus,
        Symbol::Mars,
        Symbol::Jupiter,
        Symbol::Saturn,
        Symbol::Uranus,
        Symbol::Neptune,
        Symbol::Pluto,
        Symbol::Chiron,
        Symbol::Lilith,
        Symbol::NNode,
        Symbol::SNode,
        Symbol::Fortune,
    ];

    /// Zodiac order, starting at Aries.
    pub const SIGNS: [Symbol; 12] = [
        Symbol::Aries,
        Symbol::Taurus,
        Symbol::Gemini,
        Symbol::Cancer,
        Symbol::Leo,
        Symbol::Virgo,
        Symbol::Libra,
        Symbol::Scorpio,
        Symbol::Sagittarius,
        Symbol::Capricorn,
        Symbol::Aquarius,
        Symbol::Pisces,
    ];

    pub const AXES: [Symbol; 4] = [Symbol::As, Symbol::Ds, Symbol::Mc, Symbol::Ic];

    pub const CUSPS: [Symbol; 12] = [
        Symbol::Cusp1,
        Symbol::Cusp2,
        Symbol::Cusp3,
        Symbol::Cusp4,
        Symbol::Cusp5,
        Symbol::Cusp6,
        Symbol::Cusp7,
        Symbol::Cusp8,
        Symbol::Cusp9,
        Symbol::Cusp10,
        Symbol::Cusp11,
        Symbol::Cusp12,
    ];

    pub const ALL: [Symbol; 43] = [
        Symbol::Sun,
        Symbol::Moon,
        Symbol::Mercury,
        Symbol::Venus,
        Symbol::Mars,
        Symbol::Jupiter,
        Symbol::Saturn,
        Symbol::Uranus,
        Symbol::Neptune,
        Symbol::Pluto,
        Symbol::Chiron,
        Symbol::Lilith,
        Symbol::NNode,
        Symbol::SNode,
        Symbol::Fortune,
        Symbol::Aries,
        Symbol::Taurus,
        Symbol::Gemini,
        Symbol::Cancer,
        Symbol::Leo,
        Symbol::Virgo,
        Symbol::Libra,
        Symbol::Scorpio,
        Symbol::Sagittarius,
        Symbol::Capricorn,
        Symbol::Aquarius,
        Symbol::Pisces,
        Symbol::As,
        Symbol::Ds,
        Symbol::Mc,
        Symbol::Ic,
        Symbol::Cusp1,
        Symbol::Cusp2,
        Symbol::Cusp3,
        Symbol::Cusp4,
        Symbol::Cusp5,
        Symbol::Cusp6,
        Symbol::Cusp7,
        Symbol::Cusp8,
        Symbol::Cusp9,
        Symbol::Cusp10,
        Symbol::Cusp11,
        Symbol::Cusp12,
    ];

    pub fn category(self) -> SymbolCategory {
        if Self::SIGNS.contains(&self) {
            SymbolCategory::Sign
        } else if Self::AXES.contains(&self) {
            SymbolCategory::Axis
        } else if Self::CUSPS.contains(&self) {
            SymbolCategory::Cusp
        } else {
            SymbolCategory::Point
        }
    }

    /// Canonical name used when settings do not rename the symbol.
    pub fn default_name(self) -> &'static str {
        match self {
            Symbol::Sun => "Sun",
            Symbol::Moon => "Moon",
            Symbol::Mercury => "Mercury",
            Symbol::Venus => "Venus",
            Symbol::Mars => "Mars",
            Symbol::Jupiter => "Jupiter",
            Symbol::Saturn => "Saturn",
            Symbol::Uranus => "Uranus",
            Symbol::Neptune => "Neptune",
            Symbol::Pluto => "Pluto",
            Symbol::Chiron => "Chiron",
            Symbol::Lilith => "Lilith",
            Symbol::NNode => "NNode",
            Symbol::SNode => "SNode",
            Symbol::Fortune => "Fortune",
            Symbol::Aries => "Aries",
            Symbol::Taurus => "Taurus",
            Symbol::Gemini => "Gemini",
            Symbol::Cancer => "Cancer",
            Symbol::Leo => "Leo",
            Symbol::Virgo => "Virgo",
            Symbol::Libra => "Libra",
            Symbol::Scorpio => "Scorpio",
            Symbol::Sagittarius => "Sagittarius",
            Symbol::Capricorn => "Capricorn",
            Symbol::Aquarius => "Aquarius",
            Symbol::Pisces => "Pisces",
            Symbol::As => "As",
            Symbol::Ds => "Ds",
            Symbol::Mc => "Mc",
            Symbol::Ic => "Ic",
            Symbol::Cusp1 => "1",
            Symbol::Cusp2 => "2",
            Symbol::Cusp3 => "3",
            Symbol::Cusp4 => "4",
            Symbol::Cusp5 => "5",
            Symbol::Cusp6 => "6",
            Symbol::Cusp7 => "7",
            Symbol::Cusp8 => "8",
            Symbol::Cusp9 => "9",
            Symbol::Cusp10 => "10",
            Symbol::Cusp11 => "11",
            Symbol::Cusp12 => "12",
        }
    }

    pub fn from_default_name(name: &str) -> Option<Self> {
        DEFAULT_NAMES.get(name).copied()
    }

    /// Sign for a zero-based zodiac index; wraps past Pisces.
    pub fn sign(index: usize) -> Self {
        Self::SIGNS[index % 12]
    }

    /// Cusp numeral for a one-based house number.
    pub fn cusp(house: usize) -> Option<Self> {
        house
            .checked_sub(1)
            .and_then(|idx| Self::CUSPS.get(idx))
            .copied()
    }
}

/// Symbol-name table carried by the settings; missing entries use the canonical name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolNames(BTreeMap<Symbol, String>);

impl SymbolNames {
    pub fn name(&self, symbol: Symbol) -> &str {
        self.0
            .get(&symbol)
            .map(String::as_str)
            .unwrap_or_else(|| symbol.default_name())
    }

    pub fn set(&mut self, symbol: Symbol, name: impl Into<String>) {
        self.0.insert(symbol, name.into());
    }

    /// Every symbol paired with its effective name.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        Symbol::ALL.iter().map(move |symbol| (*symbol, self.name(*symbol)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_names_are_unique() {
        assert_eq!(DEFAULT_NAMES.len(), Symbol::ALL.len());
        assert_eq!(Symbol::from_default_name("Aries"), Some(Symbol::Aries));
        assert_eq!(Symbol::from_default_name("10"), Some(Symbol::Cusp10));
        assert_eq!(Symbol::from_default_name("Vulcan"), None);
    }

    #[test]
    fn categories_partition_all_symbols() {
        let signs = Symbol::ALL
            .iter()
            .filter(|s| s.category() == SymbolCategory::Sign)
            .count();
        let cusps = Symbol::ALL
            .iter()
            .filter(|s| s.category() == SymbolCategory::Cusp)
            .count();
        let axes = Symbol::ALL
            .iter()
            .filter(|s| s.category() == SymbolCategory::Axis)
            .count();
        assert_eq!(signs, 12);
        assert_eq!(cusps, 12);
        assert_eq!(axes, 4);
        assert_eq!(Symbol::ALL.len() - signs - cusps - axes, Symbol::POINTS.len());
    }

    #[test]
    fn cusp_lookup_is_one_based() {
        assert_eq!(Symbol::cusp(1), Some(Symbol::Cusp1));
        assert_eq!(Symbol::cusp(12), Some(Symbol::Cusp12));
        assert_eq!(Symbol::cusp(0), None);
        assert_eq!(Symbol::cusp(13), None);
        assert_eq!(Symbol::sign(13), Symbol::Taurus);
    }

    #[test]
    fn renamed_symbols_override_defaults() {
        let mut names = SymbolNames::default();
        names.set(Symbol::Sun, "Sol");
        assert_eq!(names.name(Symbol::Sun), "Sol");
        assert_eq!(names.name(Symbol::Moon), "Moon");
        assert!(names.iter().any(|(s, n)| s == Symbol::Sun && n == "Sol"));
    }
}
