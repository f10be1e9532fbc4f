use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use kinetic_core::StyleValue;

use crate::animation::AnimationAction;
use crate::style::{Breakpoint, StyleTables};

/// Unique identifier for an instance in the page tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub String);

impl InstanceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A placed component in the page tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub id: InstanceId,
    /// Registered component name, e.g. `Box`.
    pub component: String,
    /// User-given label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Instance {
    pub fn new(id: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            id: InstanceId::new(id),
            component: component.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Registration data of a component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Name shown for an instance: its own label, the component's label, or the
/// component name.
pub fn instance_label(instance: &Instance, meta: &ComponentMeta) -> String {
    instance
        .label
        .clone()
        .or_else(|| meta.label.clone())
        .unwrap_or_else(|| instance.component.clone())
}

/// The part of a builder document the animation panel works with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub instances: BTreeMap<InstanceId, Instance>,
    #[serde(default)]
    pub component_metas: BTreeMap<String, ComponentMeta>,
    #[serde(default)]
    pub styles: StyleTables,
    /// Selected instance followed by its ancestors, nearest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_path: Option<Vec<InstanceId>>,
    /// Animation prop values by instance.
    #[serde(default)]
    pub animations: BTreeMap<InstanceId, AnimationAction>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_instance(&mut self, instance: Instance) {
        self.instances.insert(instance.id.clone(), instance);
    }

    pub fn register_component(&mut self, component: impl Into<String>, meta: ComponentMeta) {
        self.component_metas.insert(component.into(), meta);
    }

    pub fn add_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.styles.add_breakpoint(breakpoint);
    }

    /// Select the instance at `path[0]`; the rest are its ancestors.
    pub fn select(&mut self, path: Vec<InstanceId>) {
        self.selected_path = Some(path);
    }

    /// Computed value of `property` for the instance at the head of `path`.
    /// Undeclared properties compute to `none`.
    pub fn computed_style(&self, property: &str, path: &[InstanceId]) -> StyleValue {
        path.first()
            .and_then(|instance_id| self.styles.cascaded_value(instance_id, property))
            .cloned()
            .unwrap_or_else(|| StyleValue::keyword("none"))
    }

    /// Animation prop of the selected instance.
    pub fn selected_animation(&self) -> Option<&AnimationAction> {
        let instance_id = self.selected_path.as_ref()?.first()?;
        self.animations.get(instance_id)
    }
}
