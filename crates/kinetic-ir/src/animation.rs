use std::collections::BTreeMap;

use kinetic_core::{KineticError, StyleProperty, StyleValue, UnitValue};
use serde::{Deserialize, Serialize};

use crate::range::{RangeName, ScrollRangeName, ViewRangeName};

/// What drives an animation's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    /// Progress follows the scroll position of a scroll container.
    Scroll,
    /// Progress follows the element's visibility in its scrollport.
    View,
}

impl ActionType {
    pub const ALL: [ActionType; 2] = [ActionType::Scroll, ActionType::View];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::Scroll => "scroll",
            ActionType::View => "view",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActionType {
    type Err = KineticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scroll" => Ok(ActionType::Scroll),
            "view" => Ok(ActionType::View),
            other => Err(KineticError::InvalidArgument(format!(
                "unknown action type '{}'",
                other
            ))),
        }
    }
}

/// Scroll axis a timeline tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Block,
    Inline,
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 4] = [Axis::Block, Axis::Inline, Axis::Y, Axis::X];

    pub fn as_str(self) -> &'static str {
        match self {
            Axis::Block => "block",
            Axis::Inline => "inline",
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl std::str::FromStr for Axis {
    type Err = KineticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Axis::ALL
            .into_iter()
            .find(|axis| axis.as_str() == s)
            .ok_or_else(|| KineticError::InvalidArgument(format!("unknown axis '{}'", s)))
    }
}

/// Which scroll container a scroll timeline follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollSource {
    #[default]
    Nearest,
    Root,
    Closest,
}

impl ScrollSource {
    pub const ALL: [ScrollSource; 3] = [ScrollSource::Nearest, ScrollSource::Root, ScrollSource::Closest];

    pub fn as_str(self) -> &'static str {
        match self {
            ScrollSource::Nearest => "nearest",
            ScrollSource::Root => "root",
            ScrollSource::Closest => "closest",
        }
    }
}

impl std::str::FromStr for ScrollSource {
    type Err = KineticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScrollSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| KineticError::InvalidArgument(format!("unknown scroll source '{}'", s)))
    }
}

/// CSS `animation-fill-mode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    None,
    Forwards,
    Backwards,
    Both,
}

/// A range boundary: a named range plus an offset into it.
///
/// Serializes as a two-element array, `["entry", {"type": "unit", ...}]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineRange<R>(pub R, pub UnitValue);

impl<R: RangeName> TimelineRange<R> {
    pub fn new(name: R, offset: UnitValue) -> Self {
        Self(name, offset)
    }

    pub fn name(&self) -> R {
        self.0
    }

    pub fn offset(&self) -> &UnitValue {
        &self.1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing<R> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_start: Option<TimelineRange<R>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_end: Option<TimelineRange<R>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
}

impl<R> Default for Timing<R> {
    fn default() -> Self {
        Self {
            range_start: None,
            range_end: None,
            fill: None,
        }
    }
}

/// Styles at a point of the animation, `offset` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub offset: f64,
    #[serde(default)]
    pub styles: BTreeMap<StyleProperty, StyleValue>,
}

impl Keyframe {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            styles: BTreeMap::new(),
        }
    }

    pub fn with_style(mut self, property: impl Into<StyleProperty>, value: StyleValue) -> Self {
        self.styles.insert(property.into(), value);
        self
    }
}

/// One animation of an action: timing on the action's timeline plus
/// keyframes. `R` is the action type's range-name set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation<R> {
    pub name: String,
    pub description: String,
    pub timing: Timing<R>,
    pub keyframes: Vec<Keyframe>,
}

pub type ScrollAnimation = Animation<ScrollRangeName>;
pub type ViewAnimation = Animation<ViewRangeName>;

impl<R: RangeName> Animation<R> {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            timing: Timing::default(),
            keyframes: Vec::new(),
        }
    }

    pub fn with_range(mut self, start: TimelineRange<R>, end: TimelineRange<R>) -> Self {
        self.timing.range_start = Some(start);
        self.timing.range_end = Some(end);
        self
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.timing.fill = Some(fill);
        self
    }

    pub fn with_keyframe(mut self, keyframe: Keyframe) -> Self {
        self.keyframes.push(keyframe);
        self
    }

    /// Label for list rows; empty names show as `Unnamed`.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }
}

/// An animation of either action type, as offered by the catalog or passed
/// around by type-agnostic callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyAnimation {
    Scroll(ScrollAnimation),
    View(ViewAnimation),
}

impl AnyAnimation {
    pub fn action_type(&self) -> ActionType {
        match self {
            AnyAnimation::Scroll(_) => ActionType::Scroll,
            AnyAnimation::View(_) => ActionType::View,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyAnimation::Scroll(animation) => &animation.name,
            AnyAnimation::View(animation) => &animation.name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            AnyAnimation::Scroll(animation) => &animation.description,
            AnyAnimation::View(animation) => &animation.description,
        }
    }
}

impl From<ScrollAnimation> for AnyAnimation {
    fn from(animation: ScrollAnimation) -> Self {
        AnyAnimation::Scroll(animation)
    }
}

impl From<ViewAnimation> for AnyAnimation {
    fn from(animation: ViewAnimation) -> Self {
        AnyAnimation::View(animation)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ScrollSource>,
    pub animations: Vec<ScrollAnimation>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<Axis>,
    /// Custom identifier of the timeline to follow. `None` means the
    /// animated element itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub animations: Vec<ViewAnimation>,
}

/// The value of an animation prop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnimationAction {
    Scroll(ScrollAction),
    View(ViewAction),
}

impl Default for AnimationAction {
    fn default() -> Self {
        AnimationAction::Scroll(ScrollAction::default())
    }
}

impl AnimationAction {
    pub fn action_type(&self) -> ActionType {
        match self {
            AnimationAction::Scroll(_) => ActionType::Scroll,
            AnimationAction::View(_) => ActionType::View,
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            AnimationAction::Scroll(action) => action.axis,
            AnimationAction::View(action) => action.axis,
        }
    }

    /// The axis a picker shows: the stored axis or `block`.
    pub fn effective_axis(&self) -> Axis {
        self.axis().unwrap_or_default()
    }

    pub fn source(&self) -> Option<ScrollSource> {
        match self {
            AnimationAction::Scroll(action) => action.source,
            AnimationAction::View(_) => None,
        }
    }

    pub fn subject(&self) -> Option<&str> {
        match self {
            AnimationAction::Scroll(_) => None,
            AnimationAction::View(action) => action.subject.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnimationAction::Scroll(action) => action.animations.len(),
            AnimationAction::View(action) => action.animations.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Animation at `index`, cloned into the type-agnostic form.
    pub fn animation(&self, index: usize) -> Option<AnyAnimation> {
        match self {
            AnimationAction::Scroll(action) => action.animations.get(index).cloned().map(Into::into),
            AnimationAction::View(action) => action.animations.get(index).cloned().map(Into::into),
        }
    }

    /// Row labels of the animation list, in order.
    pub fn labels(&self) -> Vec<&str> {
        match self {
            AnimationAction::Scroll(action) => action.animations.iter().map(Animation::label).collect(),
            AnimationAction::View(action) => action.animations.iter().map(Animation::label).collect(),
        }
    }
}
