//! Pure edits on animation values.
//!
//! Every function here reads the current value, builds the candidate and
//! validates it. The input is never modified; an `Err` means the candidate
//! was rejected as a whole.

use kinetic_core::{KineticError, KineticResult, UnitValue};

use crate::animation::{
    ActionType, Animation, AnimationAction, AnyAnimation, Axis, ScrollAction, ScrollSource,
    TimelineRange, ViewAction,
};
use crate::range::RangeName;
use crate::validate::{check_compatible, ensure_valid, ensure_valid_animation};

/// A single-field change to an animation action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionEdit {
    SetType(ActionType),
    SetAxis(Axis),
    SetSource(ScrollSource),
    /// `None` selects the animated element itself.
    SetSubject(Option<String>),
    Append(AnyAnimation),
    Remove(usize),
    /// Move the animation at `old_index` so it ends up at `new_index`.
    Move { new_index: usize, old_index: usize },
    Replace { index: usize, animation: AnyAnimation },
}

/// Apply `edit` to `current` and validate the result.
pub fn apply_edit(current: &AnimationAction, edit: ActionEdit) -> KineticResult<AnimationAction> {
    let candidate = match edit {
        ActionEdit::SetType(action_type) => with_type(current, action_type),
        ActionEdit::SetAxis(axis) => {
            let mut next = current.clone();
            match &mut next {
                AnimationAction::Scroll(action) => action.axis = Some(axis),
                AnimationAction::View(action) => action.axis = Some(axis),
            }
            next
        }
        ActionEdit::SetSource(source) => match current {
            AnimationAction::Scroll(action) => AnimationAction::Scroll(ScrollAction {
                source: Some(source),
                ..action.clone()
            }),
            AnimationAction::View(_) => {
                return Err(KineticError::schema("source is only valid on scroll actions"))
            }
        },
        ActionEdit::SetSubject(subject) => match current {
            AnimationAction::View(action) => AnimationAction::View(ViewAction {
                subject,
                ..action.clone()
            }),
            AnimationAction::Scroll(_) => {
                return Err(KineticError::schema("subject is only valid on view actions"))
            }
        },
        ActionEdit::Append(animation) => {
            check_compatible(current, &animation)?;
            let mut next = current.clone();
            match (&mut next, animation) {
                (AnimationAction::Scroll(action), AnyAnimation::Scroll(animation)) => {
                    action.animations.push(animation)
                }
                (AnimationAction::View(action), AnyAnimation::View(animation)) => {
                    action.animations.push(animation)
                }
                (_, animation) => return Err(mismatch(current, &animation)),
            }
            next
        }
        ActionEdit::Remove(index) => {
            check_index(current, index)?;
            let mut next = current.clone();
            match &mut next {
                AnimationAction::Scroll(action) => {
                    action.animations.remove(index);
                }
                AnimationAction::View(action) => {
                    action.animations.remove(index);
                }
            }
            next
        }
        ActionEdit::Move {
            new_index,
            old_index,
        } => {
            check_index(current, old_index)?;
            check_index(current, new_index)?;
            let mut next = current.clone();
            match &mut next {
                AnimationAction::Scroll(action) => move_item(&mut action.animations, new_index, old_index),
                AnimationAction::View(action) => move_item(&mut action.animations, new_index, old_index),
            }
            next
        }
        ActionEdit::Replace { index, animation } => {
            check_index(current, index)?;
            check_compatible(current, &animation)?;
            let mut next = current.clone();
            match (&mut next, animation) {
                (AnimationAction::Scroll(action), AnyAnimation::Scroll(animation)) => {
                    action.animations[index] = animation
                }
                (AnimationAction::View(action), AnyAnimation::View(animation)) => {
                    action.animations[index] = animation
                }
                (_, animation) => return Err(mismatch(current, &animation)),
            }
            next
        }
    };

    ensure_valid(candidate)
}

/// Switch the action type. Animations are dropped since their ranges do not
/// translate; the axis is kept. Picking the current type changes nothing.
fn with_type(current: &AnimationAction, action_type: ActionType) -> AnimationAction {
    if current.action_type() == action_type {
        return current.clone();
    }
    let axis = current.axis();
    match action_type {
        ActionType::Scroll => AnimationAction::Scroll(ScrollAction {
            axis,
            source: None,
            animations: Vec::new(),
        }),
        ActionType::View => AnimationAction::View(ViewAction {
            axis,
            subject: None,
            animations: Vec::new(),
        }),
    }
}

fn mismatch(action: &AnimationAction, animation: &AnyAnimation) -> KineticError {
    KineticError::Schema(format!(
        "{} animation does not fit a {} action",
        animation.action_type(),
        action.action_type()
    ))
}

fn check_index(action: &AnimationAction, index: usize) -> KineticResult<()> {
    if index >= action.len() {
        return Err(KineticError::NotFound(format!(
            "animation index {} (list has {})",
            index,
            action.len()
        )));
    }
    Ok(())
}

fn move_item<T>(items: &mut Vec<T>, new_index: usize, old_index: usize) {
    let item = items.remove(old_index);
    items.insert(new_index, item);
}

/// Which end of an animation's range a picker edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEdge {
    Start,
    End,
}

/// Select a new range name for one edge of `animation`.
///
/// The edge keeps its current offset verbatim; without one, `fallback` is
/// used. Keys outside the type's range set are rejected.
pub fn with_range_name<R: RangeName>(
    animation: &Animation<R>,
    edge: RangeEdge,
    key: &str,
    fallback: &UnitValue,
) -> KineticResult<Animation<R>> {
    let name = R::parse(key).ok_or_else(|| {
        KineticError::Schema(format!("'{}' is not a {} timeline range", key, R::ACTION))
    })?;

    let mut next = animation.clone();
    let slot = match edge {
        RangeEdge::Start => &mut next.timing.range_start,
        RangeEdge::End => &mut next.timing.range_end,
    };
    let offset = slot
        .as_ref()
        .map(|range| range.offset().clone())
        .unwrap_or_else(|| fallback.clone());
    *slot = Some(TimelineRange::new(name, offset));

    ensure_valid_animation(next)
}
