use kinetic_core::{is_custom_ident, KineticError, KineticResult, StyleValue, UnitValue};

use crate::animation::{Animation, AnimationAction, AnyAnimation, TimelineRange};
use crate::range::RangeName;

/// Validate an animation action against the schema of its type.
pub fn validate_action(action: &AnimationAction) -> Result<(), Vec<KineticError>> {
    let mut errors = Vec::new();

    match action {
        AnimationAction::Scroll(scroll) => {
            for (index, animation) in scroll.animations.iter().enumerate() {
                check_animation(animation, index, &mut errors);
            }
        }
        AnimationAction::View(view) => {
            if let Some(subject) = &view.subject {
                if !is_custom_ident(subject) {
                    errors.push(KineticError::Schema(format!(
                        "subject '{}' is not a custom identifier",
                        subject
                    )));
                }
            }
            for (index, animation) in view.animations.iter().enumerate() {
                check_animation(animation, index, &mut errors);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a single animation of either type.
pub fn validate_animation<R: RangeName>(animation: &Animation<R>) -> Result<(), Vec<KineticError>> {
    let mut errors = Vec::new();
    check_animation(animation, 0, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate and hand the action back, folding all issues into one error.
pub fn ensure_valid(action: AnimationAction) -> KineticResult<AnimationAction> {
    validate_action(&action).map_err(join_errors)?;
    Ok(action)
}

pub fn ensure_valid_animation<R: RangeName>(animation: Animation<R>) -> KineticResult<Animation<R>> {
    validate_animation(&animation).map_err(join_errors)?;
    Ok(animation)
}

/// Parse an untyped value into an action. Shape errors (unknown type, range
/// names from the other type's set, missing fields) and value errors are
/// both reported as schema errors.
pub fn parse_action(value: serde_json::Value) -> KineticResult<AnimationAction> {
    let action: AnimationAction =
        serde_json::from_value(value).map_err(|e| KineticError::Schema(e.to_string()))?;
    ensure_valid(action)
}

/// Whether `animation` may be stored in `action`.
pub fn check_compatible(action: &AnimationAction, animation: &AnyAnimation) -> KineticResult<()> {
    if action.action_type() != animation.action_type() {
        return Err(KineticError::Schema(format!(
            "{} animation '{}' does not fit a {} action",
            animation.action_type(),
            animation.name(),
            action.action_type()
        )));
    }
    Ok(())
}

fn check_animation<R: RangeName>(animation: &Animation<R>, index: usize, errors: &mut Vec<KineticError>) {
    let ranges = [
        ("rangeStart", &animation.timing.range_start),
        ("rangeEnd", &animation.timing.range_end),
    ];
    for (field, range) in ranges {
        if let Some(TimelineRange(_, offset)) = range {
            if let Err(message) = check_unit(offset) {
                errors.push(KineticError::Schema(format!(
                    "animation {} {}: {}",
                    index, field, message
                )));
            }
        }
    }

    for keyframe in &animation.keyframes {
        if !keyframe.offset.is_finite() || !(0.0..=1.0).contains(&keyframe.offset) {
            errors.push(KineticError::Schema(format!(
                "animation {} keyframe offset {} is outside [0, 1]",
                index, keyframe.offset
            )));
        }
        for (property, value) in &keyframe.styles {
            if let StyleValue::Unit { value, unit } = value {
                if let Err(message) = check_unit(&UnitValue::new(*value, unit.clone())) {
                    errors.push(KineticError::Schema(format!(
                        "animation {} style '{}': {}",
                        index, property, message
                    )));
                }
            }
        }
    }
}

fn check_unit(unit: &UnitValue) -> Result<(), String> {
    if !unit.value.is_finite() {
        return Err(format!("value {} is not finite", unit.value));
    }
    if unit.unit.is_empty() {
        return Err("unit is empty".to_string());
    }
    Ok(())
}

fn join_errors(errors: Vec<KineticError>) -> KineticError {
    let messages: Vec<String> = errors
        .into_iter()
        .map(|e| match e {
            KineticError::Schema(message) => message,
            other => other.to_string(),
        })
        .collect();
    KineticError::Schema(messages.join("; "))
}
