//! Block configuration and the schema the host editor validates it with.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BlockError;

/// Background used when the host configuration has no color.
pub const DEFAULT_BACKGROUND: &str = "transparent";

/// Which side the image pane floats to on large screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductLayout {
    #[default]
    Left,
    Right,
}

impl ProductLayout {
    /// All accepted layout names.
    pub const NAMES: [&'static str; 2] = ["left", "right"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Float utility class for large screens.
    pub fn float_class(self) -> &'static str {
        match self {
            Self::Left => "fl-l",
            Self::Right => "fr-l",
        }
    }

    /// Parse a layout name.
    pub fn parse(s: &str) -> Result<Self, BlockError> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(BlockError::InvalidLayout(other.to_string())),
        }
    }
}

/// Block color settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
        }
    }
}

/// Configuration the host editor stores for one block instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_layout: ProductLayout,
    #[serde(default)]
    pub color: Option<ColorConfig>,
}

impl BlockConfig {
    /// Deserialize from the host's JSON and fill defaults.
    pub fn from_json(json: &str) -> Result<Self, BlockError> {
        let config: BlockConfig = serde_json::from_str(json)?;
        Ok(config.with_defaults())
    }

    /// Fill in the background color when the host left it out.
    pub fn with_defaults(mut self) -> Self {
        if self.color.is_none() {
            self.color = Some(ColorConfig::default());
        }
        self
    }

    /// Set the product id.
    pub fn with_product_id(mut self, id: impl Into<String>) -> Self {
        self.product_id = Some(id.into());
        self
    }

    /// Set the layout.
    pub fn with_layout(mut self, layout: ProductLayout) -> Self {
        self.product_layout = layout;
        self
    }

    /// Background color, defaulted.
    pub fn background(&self) -> &str {
        self.color
            .as_ref()
            .map(|c| c.background.as_str())
            .unwrap_or(DEFAULT_BACKGROUND)
    }
}

/// Kind of value a configuration field holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropType {
    String,
    Color,
    OneOf { values: Vec<String> },
    Shape { fields: Vec<PropSpec> },
}

/// One field of a configuration schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropSpec {
    pub name: String,
    #[serde(flatten)]
    pub kind: PropType,
    pub required: bool,
}

impl PropSpec {
    fn new(name: impl Into<String>, kind: PropType) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, PropType::String)
    }

    pub fn color(name: impl Into<String>) -> Self {
        Self::new(name, PropType::Color)
    }

    pub fn one_of(name: impl Into<String>, values: &[&str]) -> Self {
        Self::new(
            name,
            PropType::OneOf {
                values: values.iter().map(|v| v.to_string()).collect(),
            },
        )
    }

    pub fn shape(name: impl Into<String>, fields: Vec<PropSpec>) -> Self {
        Self::new(name, PropType::Shape { fields })
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn validate(&self, parent: &Value, prefix: &str) -> Result<(), BlockError> {
        let path = if prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", prefix, self.name)
        };

        let value = match parent.get(&self.name) {
            Some(Value::Null) | None if self.required => {
                return Err(BlockError::MissingField(path))
            }
            Some(Value::Null) | None => return Ok(()),
            Some(value) => value,
        };

        match &self.kind {
            PropType::String => {
                value
                    .as_str()
                    .ok_or_else(|| BlockError::invalid(&path, "expected a string"))?;
            }
            PropType::Color => {
                let color = value
                    .as_str()
                    .ok_or_else(|| BlockError::invalid(&path, "expected a color string"))?;
                if !is_color(color) {
                    return Err(BlockError::invalid(&path, format!("not a color: {color}")));
                }
            }
            PropType::OneOf { values } => {
                let s = value
                    .as_str()
                    .ok_or_else(|| BlockError::invalid(&path, "expected a string"))?;
                if !values.iter().any(|v| v == s) {
                    return Err(BlockError::invalid(
                        &path,
                        format!("expected one of {}", values.join(", ")),
                    ));
                }
            }
            PropType::Shape { fields } => {
                if !value.is_object() {
                    return Err(BlockError::invalid(&path, "expected an object"));
                }
                for field in fields {
                    field.validate(value, &path)?;
                }
            }
        }
        Ok(())
    }
}

/// Configuration schema exported by a block for the host editor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSpec {
    pub fields: Vec<PropSpec>,
}

impl ConfigSpec {
    pub fn new(fields: Vec<PropSpec>) -> Self {
        Self { fields }
    }

    /// Validate a raw configuration object.
    pub fn validate(&self, config: &Value) -> Result<(), BlockError> {
        if !config.is_object() {
            return Err(BlockError::invalid("<root>", "expected an object"));
        }
        self.fields
            .iter()
            .try_for_each(|field| field.validate(config, ""))
    }

    /// Schema as JSON for the host editor.
    pub fn to_json(&self) -> Result<Value, BlockError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Accepts hex colors, `rgb()`/`rgba()`/`hsl()`/`hsla()` and bare color keywords.
fn is_color(s: &str) -> bool {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if ["rgb(", "rgba(", "hsl(", "hsla("]
        .iter()
        .any(|f| s.starts_with(f))
    {
        return s.ends_with(')');
    }
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec() -> ConfigSpec {
        ConfigSpec::new(vec![
            PropSpec::string("productId").required(),
            PropSpec::one_of("productLayout", &ProductLayout::NAMES).required(),
            PropSpec::shape("color", vec![PropSpec::color("background").required()]).required(),
        ])
    }

    #[test]
    fn test_config_defaults() {
        let config = BlockConfig::from_json(r#"{"productId": "p1"}"#).unwrap();
        assert_eq!(config.product_layout, ProductLayout::Left);
        assert_eq!(config.background(), "transparent");
        assert_eq!(config.product_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_config_right_layout() {
        let config = BlockConfig::from_json(
            r##"{"productLayout": "right", "color": {"background": "#fafafa"}}"##,
        )
        .unwrap();
        assert_eq!(config.product_layout, ProductLayout::Right);
        assert_eq!(config.background(), "#fafafa");
    }

    #[test]
    fn test_config_rejects_unknown_layout() {
        assert!(BlockConfig::from_json(r#"{"productLayout": "center"}"#).is_err());
        assert_eq!(
            ProductLayout::parse("center"),
            Err(BlockError::InvalidLayout("center".into()))
        );
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        let config = json!({
            "productId": "abc",
            "productLayout": "left",
            "color": { "background": "#fff" }
        });
        assert!(spec().validate(&config).is_ok());
    }

    #[test]
    fn test_validate_reports_missing_nested_field() {
        let config = json!({
            "productId": "abc",
            "productLayout": "left",
            "color": {}
        });
        assert_eq!(
            spec().validate(&config),
            Err(BlockError::MissingField("color.background".into()))
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = json!({
            "productId": "abc",
            "productLayout": "diagonal",
            "color": { "background": "#fff" }
        });
        assert!(matches!(
            spec().validate(&config),
            Err(BlockError::InvalidField { field, .. }) if field == "productLayout"
        ));

        let config = json!({
            "productId": "abc",
            "productLayout": "left",
            "color": { "background": "#ggg" }
        });
        assert!(spec().validate(&config).is_err());
    }

    #[test]
    fn test_schema_json() {
        let schema = spec().to_json().unwrap();
        assert_eq!(schema["fields"][0]["name"], "productId");
        assert_eq!(schema["fields"][0]["type"], "string");
        assert_eq!(schema["fields"][1]["values"], json!(["left", "right"]));
        assert_eq!(schema["fields"][2]["fields"][0]["type"], "color");
        assert_eq!(schema["fields"][2]["required"], true);
    }

    #[test]
    fn test_is_color() {
        assert!(is_color("#fff"));
        assert!(is_color("#a1b2c3"));
        assert!(is_color("transparent"));
        assert!(is_color("rgba(0, 0, 0, 0.5)"));
        assert!(!is_color("#12"));
        assert!(!is_color(""));
    }
}
