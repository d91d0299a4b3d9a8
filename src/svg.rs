use std::fmt::Write as _;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// An owned SVG node: tag, attributes in insertion order, children and optional text.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn group() -> Self {
        Self::new("g")
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets an attribute, replacing any previous value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name.to_string(), value));
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    /// Detaches the first descendant carrying `id` and hands it back; siblings are untouched.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Element> {
        if let Some(pos) = self.children.iter().position(|child| child.id() == Some(id)) {
            return Some(self.children.remove(pos));
        }
        self.children
            .iter_mut()
            .find_map(|child| child.remove_by_id(id))
    }

    /// Number of elements in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Element::count).sum::<usize>()
    }

    pub fn write_svg(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_xml(value));
        }
        if self.children.is_empty() && self.text.is_none() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_xml(text));
        }
        for child in &self.children {
            child.write_svg(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out);
        out
    }
}

/// Formats a coordinate with at most three decimals and no trailing zeros.
pub fn fmt_num(value: f32) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (f64::from(value) * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let mut text = format!("{rounded:.3}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

pub fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_numbers_compactly() {
        assert_eq!(fmt_num(12.0), "12");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(1.5), "1.5");
        assert_eq!(fmt_num(-2.18182), "-2.182");
        assert_eq!(fmt_num(f32::NAN), "0");
    }

    #[test]
    fn fmt_num_keeps_huge_finite_values_numeric() {
        for value in [1.0e36_f32, -1.0e36, f32::MAX] {
            let text = fmt_num(value);
            assert!(!text.contains("inf"), "{text}");
            let parsed: f64 = text.parse().unwrap();
            assert!((parsed - f64::from(value)).abs() <= f64::from(value).abs() * 1e-6);
        }
    }

    #[test]
    fn serializes_nested_elements() {
        let el = Element::group()
            .with_id("a")
            .with_child(Element::new("text").with_text("x < y"))
            .with_child(Element::new("circle").with_attr("r", "8"));
        assert_eq!(
            el.to_svg_string(),
            "<g id=\"a\"><text>x &lt; y</text><circle r=\"8\"/></g>"
        );
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let mut el = Element::new("path").with_attr("fill", "none");
        el.set_attr("fill", "#000");
        assert_eq!(el.attr("fill"), Some("#000"));
        assert_eq!(el.to_svg_string(), "<path fill=\"#000\"/>");
    }

    #[test]
    fn removes_nested_element_by_id() {
        let mut root = Element::group().with_id("root").with_child(
            Element::group()
                .with_id("inner")
                .with_child(Element::group().with_id("leaf"))
                .with_child(Element::group().with_id("other")),
        );
        let removed = root.remove_by_id("leaf").expect("leaf present");
        assert_eq!(removed.id(), Some("leaf"));
        assert!(root.find_by_id("leaf").is_none());
        assert!(root.find_by_id("other").is_some());
        assert_eq!(root.count(), 3);
    }
}
