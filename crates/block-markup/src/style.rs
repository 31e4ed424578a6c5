//! Style sheets with generated class names.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// An ordered list of CSS declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(Vec<(String, String)>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, e.g. `prop("background-color", "#fff")`.
    pub fn prop(mut self, name: &str, value: impl Into<String>) -> Self {
        self.0.push((name.to_string(), value.into()));
        self
    }

    /// Declarations as CSS text (`a:b;c:d`).
    pub fn declarations(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// A generated class name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Class names produced by one `StyleSheet::create` call, keyed by rule name.
#[derive(Debug, Clone, Default)]
pub struct ClassMap(HashMap<&'static str, ClassName>);

impl ClassMap {
    /// Class name for `name`. Unknown names yield an empty class.
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(ClassName::as_str).unwrap_or("")
    }
}

/// Collects rules from every component of a page.
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: RefCell<BTreeMap<String, Style>>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register named rules and return their class names.
    ///
    /// Class names are derived from the rule name and declarations, so equal
    /// rules from different components share one class.
    pub fn create(&self, rules: Vec<(&'static str, Style)>) -> ClassMap {
        let mut classes = HashMap::new();
        let mut registered = self.rules.borrow_mut();
        for (name, style) in rules {
            let class = format!("{}_{:x}", name, style_hash(name, &style));
            registered.entry(class.clone()).or_insert(style);
            classes.insert(name, ClassName(class));
        }
        ClassMap(classes)
    }

    /// CSS text for every registered rule.
    pub fn render_css(&self) -> String {
        self.rules
            .borrow()
            .iter()
            .filter(|(_, style)| !style.0.is_empty())
            .map(|(class, style)| format!(".{}{{{}}}", class, style.declarations()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.borrow().is_empty()
    }
}

/// Join utility classes and generated classes into one `class` value.
pub fn css(classes: &[&str]) -> String {
    classes
        .iter()
        .flat_map(|c| c.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

fn style_hash(name: &str, style: &Style) -> u32 {
    name.bytes()
        .chain(style.declarations().bytes())
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32))
}

/// Site-wide style tokens supplied by the host theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GlobalStyles {
    #[serde(default)]
    pub color: GlobalColors,
}

/// Theme colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalColors {
    pub text: String,
    pub link: String,
    pub primary: String,
    pub primary_text: String,
}

impl Default for GlobalColors {
    fn default() -> Self {
        Self {
            text: "#333333".to_string(),
            link: "#357edd".to_string(),
            primary: "#111111".to_string(),
            primary_text: "#ffffff".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_render() {
        let sheet = StyleSheet::new();
        let classes = sheet.create(vec![
            ("box", Style::new().prop("color", "red").prop("margin", "0")),
            ("empty", Style::new()),
        ]);
        assert!(classes.get("box").starts_with("box_"));
        assert!(classes.get("empty").starts_with("empty_"));
        assert_eq!(classes.get("missing"), "");

        let css_text = sheet.render_css();
        assert_eq!(css_text, format!(".{}{{color:red;margin:0}}", classes.get("box")));
    }

    #[test]
    fn test_same_rule_shares_class() {
        let sheet = StyleSheet::new();
        let a = sheet.create(vec![("box", Style::new().prop("color", "red"))]);
        let b = sheet.create(vec![("box", Style::new().prop("color", "red"))]);
        let c = sheet.create(vec![("box", Style::new().prop("color", "blue"))]);
        assert_eq!(a.get("box"), b.get("box"));
        assert_ne!(a.get("box"), c.get("box"));
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_css_joins_classes() {
        assert_eq!(css(&["dib f6", "", "qty_1"]), "dib f6 qty_1");
    }

    #[test]
    fn test_global_styles_from_json() {
        let styles: GlobalStyles =
            serde_json::from_str(r##"{"color":{"text":"#000","link":"#00f","primary":"#f00","primary_text":"#fff"}}"##)
                .unwrap();
        assert_eq!(styles.color.link, "#00f");
        let defaults: GlobalStyles = serde_json::from_str("{}").unwrap();
        assert_eq!(defaults, GlobalStyles::default());
    }
}
