use serde::{Deserialize, Serialize};

/// A CSS property name in camelCase form, e.g. `viewTimelineName`.
pub type StyleProperty = String;

/// A numeric CSS value with its unit, e.g. `50dvh`.
///
/// Serializes as `{ "type": "unit", "value": 50, "unit": "dvh" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TaggedUnit", into = "TaggedUnit")]
pub struct UnitValue {
    pub value: f64,
    pub unit: String,
}

/// Wire form of [`UnitValue`]; the `type` tag is required and must be `unit`.
#[derive(Serialize, Deserialize)]
struct TaggedUnit {
    #[serde(rename = "type")]
    kind: UnitTag,
    value: f64,
    unit: String,
}

#[derive(Serialize, Deserialize)]
enum UnitTag {
    #[serde(rename = "unit")]
    Unit,
}

impl From<TaggedUnit> for UnitValue {
    fn from(tagged: TaggedUnit) -> Self {
        Self::new(tagged.value, tagged.unit)
    }
}

impl From<UnitValue> for TaggedUnit {
    fn from(unit: UnitValue) -> Self {
        Self {
            kind: UnitTag::Unit,
            value: unit.value,
            unit: unit.unit,
        }
    }
}

impl UnitValue {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// `0%`, the fallback offset for a freshly picked range.
    pub fn zero_percent() -> Self {
        Self::new(0.0, "%")
    }

    pub fn to_css(&self) -> String {
        if self.unit == "number" {
            format_number(self.value)
        } else {
            format!("{}{}", format_number(self.value), self.unit)
        }
    }
}

/// A parsed CSS value as stored in the builder's style tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StyleValue {
    /// A number with a unit. Unitless numbers use the unit `"number"`.
    Unit { value: f64, unit: String },
    /// A single identifier, e.g. `none` or `auto`.
    Keyword { value: String },
    /// Raw text the parser did not interpret.
    Unparsed { value: String },
}

impl StyleValue {
    pub fn keyword(value: impl Into<String>) -> Self {
        StyleValue::Keyword {
            value: value.into(),
        }
    }

    pub fn unparsed(value: impl Into<String>) -> Self {
        StyleValue::Unparsed {
            value: value.into(),
        }
    }

    /// Serialize back to CSS text.
    pub fn to_css(&self) -> String {
        match self {
            StyleValue::Unit { value, unit } => UnitValue::new(*value, unit.clone()).to_css(),
            StyleValue::Keyword { value } | StyleValue::Unparsed { value } => value.clone(),
        }
    }
}

impl From<UnitValue> for StyleValue {
    fn from(unit: UnitValue) -> Self {
        StyleValue::Unit {
            value: unit.value,
            unit: unit.unit,
        }
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

/// Parse a CSS value for `property`.
///
/// Only the shapes the animation editor produces are recognised: numbers
/// with an optional unit, single identifiers, and everything else as
/// unparsed text.
pub fn parse_css_value(_property: &str, text: &str) -> StyleValue {
    let text = text.trim();

    if let Some(unit) = parse_unit(text) {
        return unit.into();
    }

    if is_identifier(text) {
        return StyleValue::keyword(text.to_ascii_lowercase());
    }

    StyleValue::unparsed(text)
}

fn parse_unit(text: &str) -> Option<UnitValue> {
    let split = text
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(text.len());

    let (number, unit) = text.split_at(split);
    let value: f64 = number.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    if unit.is_empty() {
        return Some(UnitValue::new(value, "number"));
    }
    if unit == "%" || unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(UnitValue::new(value, unit.to_ascii_lowercase()));
    }
    None
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '-' || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Whether `text` is a CSS dashed custom identifier such as `--hero`.
pub fn is_custom_ident(text: &str) -> bool {
    match text.strip_prefix("--") {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| !c.is_whitespace() && c != ','),
        None => false,
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
