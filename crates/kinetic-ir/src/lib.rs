//! # kinetic-ir
//!
//! The Kinetic animation model: scroll- and view-driven animation actions,
//! their schemas, the starter catalog, and the slice of the builder document
//! (instances, breakpoints, style tables) the animation panel reads and
//! writes.
//!
//! Every edit a panel makes goes through [`edit::apply_edit`], which returns
//! the validated candidate or the reason it was rejected.

pub mod animation;
pub mod binding;
pub mod catalog;
pub mod document;
pub mod edit;
pub mod options;
pub mod range;
pub mod style;
pub mod validate;

pub use animation::{
    ActionType, Animation, AnimationAction, AnyAnimation, Axis, Fill, Keyframe, ScrollAction,
    ScrollAnimation, ScrollSource, TimelineRange, Timing, ViewAction, ViewAnimation,
};
pub use binding::set_listed_css_property;
pub use document::{instance_label, ComponentMeta, Document, Instance, InstanceId};
pub use edit::{apply_edit, with_range_name, ActionEdit, RangeEdge};
pub use range::{RangeName, ScrollRangeName, ViewRangeName};
pub use style::{
    Breakpoint, BreakpointId, StyleDecl, StyleDeclKey, StyleSource, StyleSourceId,
    StyleSourceSelection, StyleTables,
};
pub use validate::{parse_action, validate_action};
