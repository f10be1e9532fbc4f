use kinetic_core::{PanelConfig, UnitValue};
use kinetic_ir::options::{range_options, OptionInfo};
use kinetic_ir::range::range_description;
use kinetic_ir::{with_range_name, ActionType, Animation, AnyAnimation, RangeEdge, RangeName};

use crate::commit::{EditHandle, EditOutcome};
use crate::notify::SCHEMAS_INCOMPATIBLE;

/// Range start/end pickers for one animation.
#[derive(Debug, Clone)]
pub struct RangePanel {
    fallback: UnitValue,
}

impl RangePanel {
    pub fn new(config: &PanelConfig) -> Self {
        Self {
            fallback: config.default_range_offset(),
        }
    }

    /// Offset used when an edge has none yet.
    pub fn fallback(&self) -> &UnitValue {
        &self.fallback
    }

    pub fn options(&self, action_type: ActionType) -> Vec<OptionInfo> {
        range_options(action_type)
    }

    pub fn description(&self, action_type: ActionType, key: &str) -> Option<&'static str> {
        range_description(action_type, key)
    }

    /// Key the picker shows for `edge`: the current range name, else the
    /// first option.
    pub fn selected_key(&self, animation: &AnyAnimation, edge: RangeEdge) -> &'static str {
        match animation {
            AnyAnimation::Scroll(animation) => selected(animation, edge).as_str(),
            AnyAnimation::View(animation) => selected(animation, edge).as_str(),
        }
    }

    /// Pick a range name for `edge` and commit the edited animation.
    pub fn select(
        &self,
        animation: &AnyAnimation,
        edge: RangeEdge,
        key: &str,
        handle: &mut EditHandle<'_, AnyAnimation>,
    ) -> EditOutcome {
        let candidate = match animation {
            AnyAnimation::Scroll(animation) => {
                with_range_name(animation, edge, key, &self.fallback).map(AnyAnimation::from)
            }
            AnyAnimation::View(animation) => {
                with_range_name(animation, edge, key, &self.fallback).map(AnyAnimation::from)
            }
        };
        handle.commit(candidate, SCHEMAS_INCOMPATIBLE)
    }
}

fn selected<R: RangeName>(animation: &Animation<R>, edge: RangeEdge) -> R {
    let range = match edge {
        RangeEdge::Start => &animation.timing.range_start,
        RangeEdge::End => &animation.timing.range_end,
    };
    range.as_ref().map(|range| range.name()).unwrap_or_else(R::first)
}
