//! Starter animations offered by the "add animation" menu.

use kinetic_core::{parse_css_value, UnitValue};

use crate::animation::{
    ActionType, Animation, AnyAnimation, Fill, Keyframe, ScrollAnimation, TimelineRange,
    ViewAnimation,
};
use crate::range::{ScrollRangeName, ViewRangeName};

pub fn new_scroll_animation() -> ScrollAnimation {
    Animation::new("New Animation", "Create a new animation.")
        .with_range(
            TimelineRange::new(ScrollRangeName::Start, UnitValue::new(0.0, "px")),
            TimelineRange::new(ScrollRangeName::End, UnitValue::new(0.0, "px")),
        )
        .with_fill(Fill::Backwards)
        .with_keyframe(Keyframe::new(0.0))
}

pub fn fade_in_scroll_animation() -> ScrollAnimation {
    Animation::new("Fade In", "Fade in the element as it scrolls into view.")
        .with_range(
            TimelineRange::new(ScrollRangeName::Start, UnitValue::new(0.0, "%")),
            TimelineRange::new(ScrollRangeName::End, UnitValue::new(50.0, "dvh")),
        )
        .with_fill(Fill::Backwards)
        .with_keyframe(Keyframe::new(0.0).with_style("opacity", parse_css_value("opacity", "0")))
}

pub fn fade_out_scroll_animation() -> ScrollAnimation {
    Animation::new("Fade Out", "Fade out the element as it scrolls out of view.")
        .with_range(
            TimelineRange::new(ScrollRangeName::End, UnitValue::new(50.0, "dvh")),
            TimelineRange::new(ScrollRangeName::End, UnitValue::new(0.0, "%")),
        )
        .with_fill(Fill::Backwards)
        .with_keyframe(Keyframe::new(1.0).with_style("opacity", parse_css_value("opacity", "0")))
}

pub fn new_view_animation() -> ViewAnimation {
    Animation::new("New Animation", "Create a new animation.")
        .with_range(
            TimelineRange::new(ViewRangeName::Entry, UnitValue::new(0.0, "%")),
            TimelineRange::new(ViewRangeName::Exit, UnitValue::new(100.0, "%")),
        )
        .with_fill(Fill::Backwards)
        .with_keyframe(Keyframe::new(0.0))
}

pub fn fade_in_view_animation() -> ViewAnimation {
    Animation::new("Fade In", "Fade in the element as it enters the viewport.")
        .with_range(
            TimelineRange::new(ViewRangeName::Entry, UnitValue::new(0.0, "%")),
            TimelineRange::new(ViewRangeName::Entry, UnitValue::new(100.0, "%")),
        )
        .with_fill(Fill::Backwards)
        .with_keyframe(Keyframe::new(0.0).with_style("opacity", parse_css_value("opacity", "0")))
}

pub fn fade_out_view_animation() -> ViewAnimation {
    Animation::new("Fade Out", "Fade out the element as it leaves the viewport.")
        .with_range(
            TimelineRange::new(ViewRangeName::Exit, UnitValue::new(0.0, "%")),
            TimelineRange::new(ViewRangeName::Exit, UnitValue::new(100.0, "%")),
        )
        .with_fill(Fill::Forwards)
        .with_keyframe(Keyframe::new(1.0).with_style("opacity", parse_css_value("opacity", "0")))
}

pub fn scroll_presets() -> Vec<ScrollAnimation> {
    vec![
        new_scroll_animation(),
        fade_in_scroll_animation(),
        fade_out_scroll_animation(),
    ]
}

pub fn view_presets() -> Vec<ViewAnimation> {
    vec![
        new_view_animation(),
        fade_in_view_animation(),
        fade_out_view_animation(),
    ]
}

/// Presets for an action type, in menu order.
pub fn presets(action_type: ActionType) -> Vec<AnyAnimation> {
    match action_type {
        ActionType::Scroll => scroll_presets().into_iter().map(Into::into).collect(),
        ActionType::View => view_presets().into_iter().map(Into::into).collect(),
    }
}
