//! Drawing surface bound to a container in a host document.

use crate::error::{ChartError, Result};
use crate::resolver::{SymbolOverride, SymbolResolver};
use crate::settings::Settings;
use crate::svg::{Element, SVG_NS, fmt_num};
use crate::symbol::Symbol;

/// Host page: a tree of elements that charts are mounted into.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    body: Element,
}

impl Document {
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    pub fn with_container(mut self, id: &str) -> Self {
        self.add_container(id);
        self
    }

    pub fn add_container(&mut self, id: &str) {
        self.body.append_child(Element::new("div").with_id(id));
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    pub fn body(&self) -> &Element {
        &self.body
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// `{root}-{chart}-{category}-{name}`.
pub fn wrapper_id(root_id: &str, chart_id: &str, category_id: &str, name: &str) -> String {
    format!("{root_id}-{chart_id}-{category_id}-{name}")
}

pub fn sign_wrapper_id(root_id: &str, settings: &Settings, sign_name: &str) -> String {
    wrapper_id(root_id, &settings.id_radix, &settings.id_signs, sign_name)
}

pub fn house_wrapper_id(root_id: &str, settings: &Settings, house_name: &str) -> String {
    wrapper_id(root_id, &settings.id_radix, &settings.id_cusps, house_name)
}

/// Root `<svg>` plus the settings and resolver every drawing call goes through.
#[derive(Debug)]
pub struct Paper {
    root: Element,
    container_id: String,
    width: f32,
    height: f32,
    settings: Settings,
    resolver: SymbolResolver,
}

impl Paper {
    /// Fails if `container_id` is not present in `document` or the settings are unusable.
    pub fn new(
        document: &Document,
        container_id: &str,
        width: f32,
        height: f32,
        settings: Settings,
    ) -> Result<Self> {
        if document.get_element_by_id(container_id).is_none() {
            return Err(ChartError::MissingRootContainer {
                id: container_id.to_string(),
            });
        }
        settings.validate()?;
        let root_id = format!("{container_id}-{}", settings.id_chart);
        tracing::debug!(root = %root_id, width, height, "creating chart paper");
        let root = Element::new("svg")
            .with_attr("xmlns", SVG_NS)
            .with_id(root_id)
            .with_attr("width", fmt_num(width))
            .with_attr("height", fmt_num(height))
            .with_attr(
                "viewBox",
                format!("0 0 {} {}", fmt_num(width), fmt_num(height)),
            );
        let resolver = SymbolResolver::new(&settings);
        Ok(Self {
            root,
            container_id: container_id.to_string(),
            width,
            height,
            settings,
            resolver,
        })
    }

    pub fn with_override(mut self, custom: impl SymbolOverride + 'static) -> Self {
        self.resolver = self.resolver.with_override(custom);
        self
    }

    pub fn root_id(&self) -> &str {
        self.root.id().unwrap_or_default()
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn resolver(&self) -> &SymbolResolver {
        &self.resolver
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Detached glyph for `name` at `(x, y)`.
    pub fn symbol(&self, name: &str, x: f32, y: f32) -> Element {
        self.resolver.resolve(name, x, y, &self.settings)
    }

    pub fn draw_symbol(&self, symbol: Symbol, x: f32, y: f32) -> Element {
        self.resolver.draw(symbol, x, y, &self.settings)
    }

    /// Empty group with a deterministic id under this paper's root.
    pub fn wrapper(&self, chart_id: &str, category_id: &str, name: &str) -> Element {
        Element::group().with_id(wrapper_id(self.root_id(), chart_id, category_id, name))
    }

    pub fn sign_wrapper_id(&self, sign_name: &str) -> String {
        sign_wrapper_id(self.root_id(), &self.settings, sign_name)
    }

    pub fn house_wrapper_id(&self, house_name: &str) -> String {
        house_wrapper_id(self.root_id(), &self.settings, house_name)
    }

    pub fn append(&mut self, element: Element) {
        self.root.append_child(element);
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.root.remove_by_id(id)
    }

    /// Drops everything drawn so far; the root element itself stays.
    pub fn clear(&mut self) {
        self.root.clear_children();
    }

    pub fn to_svg_string(&self) -> String {
        self.root.to_svg_string()
    }

    /// Appends the drawing to its container in `document`.
    pub fn mount(self, document: &mut Document) -> Result<()> {
        let Some(container) = document.get_element_by_id_mut(&self.container_id) else {
            return Err(ChartError::MissingRootContainer {
                id: self.container_id,
            });
        };
        container.append_child(self.root);
        Ok(())
    }
}
