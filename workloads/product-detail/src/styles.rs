//! Style rules for the product detail block.
//!
//! Each component registers its rules with the page's `StyleSheet` once, at
//! construction, and keeps the resulting `ClassMap`.

use block_core::BlockConfig;
use block_markup::{GlobalStyles, Style};

/// Outer section: the configured background.
pub fn block_rules(config: &BlockConfig) -> Vec<(&'static str, Style)> {
    vec![(
        "block",
        Style::new().prop("background-color", config.background()),
    )]
}

pub fn description_rules(global: &GlobalStyles) -> Vec<(&'static str, Style)> {
    vec![
        ("descriptionText", Style::new().prop("color", global.color.text.clone())),
        (
            "viewMore",
            Style::new()
                .prop("color", global.color.link.clone())
                .prop("text-decoration", "none"),
        ),
    ]
}

pub fn controls_rules() -> Vec<(&'static str, Style)> {
    vec![
        ("qtyLabel", Style::new().prop("text-transform", "uppercase")),
        (
            "qtyInputButton",
            Style::new()
                .prop("border-color", "#f2f2f2")
                .prop("background-color", "transparent")
                .prop("color", "#777")
                .prop("text-decoration", "none"),
        ),
        (
            "qtyInputField",
            Style::new()
                .prop("border-color", "#f2f2f2")
                .prop("background-color", "transparent"),
        ),
    ]
}

/// Slider arrows sit vertically centered over the main image.
pub fn arrows_rules() -> Vec<(&'static str, Style)> {
    vec![
        (
            "controlsWrap",
            Style::new()
                .prop("top", "50%")
                .prop("transform", "translateY(-50%)")
                .prop("z-index", "1"),
        ),
        ("controlsImage", Style::new().prop("fill", "#ffffff")),
    ]
}

pub fn alternates_rules(global: &GlobalStyles) -> Vec<(&'static str, Style)> {
    vec![(
        "selected",
        Style::new().prop("border-color", global.color.primary.clone()),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use block_core::ColorConfig;
    use block_markup::StyleSheet;

    #[test]
    fn test_block_background() {
        let sheet = StyleSheet::new();
        let config = BlockConfig {
            color: Some(ColorConfig {
                background: "#fafafa".into(),
            }),
            ..BlockConfig::default()
        };
        let classes = sheet.create(block_rules(&config));
        assert!(classes.get("block").starts_with("block_"));
        assert!(sheet.render_css().contains("background-color:#fafafa"));
    }

    #[test]
    fn test_theme_colors_flow_into_rules() {
        let sheet = StyleSheet::new();
        let global = GlobalStyles::default();
        sheet.create(description_rules(&global));
        let css = sheet.render_css();
        assert!(css.contains("color:#333333"));
        assert!(css.contains("color:#357edd"));
    }
}
