use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use kinetic_core::{KineticError, KineticResult, StyleProperty, StyleValue};

use crate::document::InstanceId;

/// Unique identifier for a style source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StyleSourceId(pub String);

impl StyleSourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for StyleSourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BreakpointId(pub String);

impl BreakpointId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for BreakpointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where declarations come from: an instance's own styles or a shared token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StyleSource {
    Local { id: StyleSourceId },
    Token { id: StyleSourceId, name: String },
}

impl StyleSource {
    pub fn id(&self) -> &StyleSourceId {
        match self {
            StyleSource::Local { id } | StyleSource::Token { id, .. } => id,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, StyleSource::Local { .. })
    }
}

/// The ordered style sources applied to one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSourceSelection {
    pub instance_id: InstanceId,
    pub values: Vec<StyleSourceId>,
}

/// A viewport condition styles can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub id: BreakpointId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

impl Breakpoint {
    /// The unconditional breakpoint.
    pub fn base(id: impl Into<String>) -> Self {
        Self {
            id: BreakpointId::new(id),
            label: String::new(),
            min_width: None,
            max_width: None,
        }
    }

    pub fn is_base(&self) -> bool {
        self.min_width.is_none() && self.max_width.is_none()
    }
}

/// Key of a declaration in the style table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleDeclKey {
    pub style_source_id: StyleSourceId,
    pub breakpoint_id: BreakpointId,
    pub property: StyleProperty,
}

impl std::fmt::Display for StyleDeclKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}:", self.style_source_id, self.breakpoint_id, self.property)
    }
}

/// A single property value for a style source at a breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleDecl {
    pub breakpoint_id: BreakpointId,
    pub property: StyleProperty,
    pub style_source_id: StyleSourceId,
    pub value: StyleValue,
    /// Authored explicitly by the user rather than derived.
    #[serde(default)]
    pub listed: bool,
}

impl StyleDecl {
    pub fn key(&self) -> StyleDeclKey {
        StyleDeclKey {
            style_source_id: self.style_source_id.clone(),
            breakpoint_id: self.breakpoint_id.clone(),
            property: self.property.clone(),
        }
    }
}

/// The builder's style model. Writers replace it as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTables {
    #[serde(default)]
    pub breakpoints: BTreeMap<BreakpointId, Breakpoint>,
    #[serde(default)]
    pub style_sources: BTreeMap<StyleSourceId, StyleSource>,
    #[serde(default)]
    pub style_source_selections: BTreeMap<InstanceId, StyleSourceSelection>,
    /// Declarations keyed by `StyleDeclKey`'s string form.
    #[serde(default)]
    pub styles: BTreeMap<String, StyleDecl>,
}

impl StyleTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoints.insert(breakpoint.id.clone(), breakpoint);
    }

    pub fn add_style_source(&mut self, source: StyleSource) {
        self.style_sources.insert(source.id().clone(), source);
    }

    /// Append a style source to an instance's selection, creating it if needed.
    pub fn select(&mut self, instance_id: &InstanceId, style_source_id: StyleSourceId) {
        self.style_source_selections
            .entry(instance_id.clone())
            .or_insert_with(|| StyleSourceSelection {
                instance_id: instance_id.clone(),
                values: Vec::new(),
            })
            .values
            .push(style_source_id);
    }

    pub fn set_decl(&mut self, decl: StyleDecl) {
        self.styles.insert(decl.key().to_string(), decl);
    }

    pub fn decl(&self, key: &StyleDeclKey) -> Option<&StyleDecl> {
        self.styles.get(&key.to_string())
    }

    /// The single breakpoint without width bounds.
    pub fn base_breakpoint(&self) -> KineticResult<&Breakpoint> {
        self.breakpoints
            .values()
            .find(|breakpoint| breakpoint.is_base())
            .ok_or_else(|| KineticError::integrity("base breakpoint not found"))
    }

    /// The first local style source selected for an instance.
    pub fn local_style_source(&self, instance_id: &InstanceId) -> Option<&StyleSourceId> {
        self.style_source_selections
            .get(instance_id)?
            .values
            .iter()
            .find(|id| self.style_sources.get(*id).is_some_and(StyleSource::is_local))
    }

    /// Number of local style sources selected for an instance.
    pub fn local_style_source_count(&self, instance_id: &InstanceId) -> usize {
        self.style_source_selections
            .get(instance_id)
            .map(|selection| {
                selection
                    .values
                    .iter()
                    .filter(|id| self.style_sources.get(*id).is_some_and(StyleSource::is_local))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Value of `property` for an instance at the base breakpoint. Later
    /// style sources in the selection override earlier ones.
    pub fn cascaded_value(&self, instance_id: &InstanceId, property: &str) -> Option<&StyleValue> {
        let base = self.base_breakpoint().ok()?;
        let selection = self.style_source_selections.get(instance_id)?;
        selection
            .values
            .iter()
            .filter_map(|style_source_id| {
                self.decl(&StyleDeclKey {
                    style_source_id: style_source_id.clone(),
                    breakpoint_id: base.id.clone(),
                    property: property.to_string(),
                })
            })
            .last()
            .map(|decl| &decl.value)
    }
}
