//! Display metadata for the panel's selectors: option keys, labels,
//! descriptions and icon names. Front-ends render these as they see fit.

use kinetic_core::title_case;
use serde::Serialize;

use crate::animation::{ActionType, Axis, ScrollSource};
use crate::range::{range_description, range_keys};

/// One choice of a select or toggle group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionInfo {
    pub key: &'static str,
    pub label: String,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

impl OptionInfo {
    fn titled(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            label: title_case(key),
            description,
            icon: None,
        }
    }
}

pub fn action_type_description(action_type: ActionType) -> &'static str {
    match action_type {
        ActionType::Scroll => {
            "Scroll-based animations are triggered and controlled by the user’s scroll position."
        }
        ActionType::View => {
            "View-based animations occur when an element enters or exits the viewport. They rely on the element’s visibility rather than the scroll position."
        }
    }
}

pub fn action_type_options() -> Vec<OptionInfo> {
    ActionType::ALL
        .into_iter()
        .map(|action_type| OptionInfo::titled(action_type.as_str(), action_type_description(action_type)))
        .collect()
}

pub fn axis_option(axis: Axis) -> OptionInfo {
    let (label, icon, description) = match axis {
        Axis::Block => (
            "Block axis",
            "repeat-column",
            "Uses the scroll progress along the block axis (depends on writing mode, usually vertical in English).",
        ),
        Axis::Inline => (
            "Inline axis",
            "repeat-row",
            "Uses the scroll progress along the inline axis (depends on writing mode, usually horizontal in English).",
        ),
        Axis::Y => (
            "Y axis",
            "repeat-column",
            "Always maps to the vertical scroll direction, regardless of writing mode.",
        ),
        Axis::X => (
            "X axis",
            "repeat-row",
            "Always maps to the horizontal scroll direction, regardless of writing mode.",
        ),
    };
    OptionInfo {
        key: axis.as_str(),
        label: label.to_string(),
        description,
        icon: Some(icon),
    }
}

pub fn axis_options() -> Vec<OptionInfo> {
    Axis::ALL.into_iter().map(axis_option).collect()
}

pub fn source_description(source: ScrollSource) -> &'static str {
    match source {
        ScrollSource::Nearest => "Selects the scrolling container that affects the current element.",
        ScrollSource::Root => "Selects the scrolling element of the document.",
        ScrollSource::Closest => "Selects the nearest ancestor element that is scrollable.",
    }
}

pub fn source_options() -> Vec<OptionInfo> {
    ScrollSource::ALL
        .into_iter()
        .map(|source| OptionInfo::titled(source.as_str(), source_description(source)))
        .collect()
}

/// Range picker options for an action type.
pub fn range_options(action_type: ActionType) -> Vec<OptionInfo> {
    range_keys(action_type)
        .into_iter()
        .map(|key| OptionInfo::titled(key, range_description(action_type, key).unwrap_or_default()))
        .collect()
}
