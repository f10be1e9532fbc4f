use kinetic_core::KineticError;
use kinetic_ir::catalog::presets;
use kinetic_ir::{apply_edit, ActionEdit, AnimationAction, AnyAnimation};

use crate::commit::{EditHandle, EditOutcome};
use crate::notify::{ADD_FAILED, REMOVE_FAILED, SCHEMAS_INCOMPATIBLE, SORT_FAILED};

pub const ADD_HINT: &str = "Add new or select existing animation";

/// The animations list with its "add animation" menu.
#[derive(Debug, Clone, Default)]
pub struct AnimationsList {
    hint_focus: Option<usize>,
}

impl AnimationsList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets offered by the add menu for `value`'s type.
    pub fn presets(&self, value: &AnimationAction) -> Vec<AnyAnimation> {
        presets(value.action_type())
    }

    pub fn focus(&mut self, preset_index: usize) {
        self.hint_focus = Some(preset_index);
    }

    pub fn blur(&mut self) {
        self.hint_focus = None;
    }

    /// Text under the add menu: the focused preset's description.
    pub fn hint(&self, value: &AnimationAction) -> String {
        self.hint_focus
            .and_then(|index| self.presets(value).into_iter().nth(index))
            .map(|preset| preset.description().to_string())
            .unwrap_or_else(|| ADD_HINT.to_string())
    }

    pub fn rows<'v>(&self, value: &'v AnimationAction) -> Vec<&'v str> {
        value.labels()
    }

    pub fn add(
        &mut self,
        value: &AnimationAction,
        preset_index: usize,
        handle: &mut EditHandle<'_, AnimationAction>,
    ) -> EditOutcome {
        let candidate = self
            .presets(value)
            .into_iter()
            .nth(preset_index)
            .ok_or_else(|| KineticError::NotFound(format!("preset {}", preset_index)))
            .and_then(|preset| apply_edit(value, ActionEdit::Append(preset)));
        let outcome = handle.commit(candidate, ADD_FAILED);
        if outcome.is_committed() {
            self.blur();
        }
        outcome
    }

    pub fn remove(
        &self,
        value: &AnimationAction,
        index: usize,
        handle: &mut EditHandle<'_, AnimationAction>,
    ) -> EditOutcome {
        handle.commit(apply_edit(value, ActionEdit::Remove(index)), REMOVE_FAILED)
    }

    /// Drag end: the row at `old_index` was dropped at `new_index`.
    pub fn sort(
        &self,
        value: &AnimationAction,
        new_index: usize,
        old_index: usize,
        handle: &mut EditHandle<'_, AnimationAction>,
    ) -> EditOutcome {
        let edit = ActionEdit::Move {
            new_index,
            old_index,
        };
        handle.commit(apply_edit(value, edit), SORT_FAILED)
    }

    /// Replace the animation at `index` with an edited copy.
    pub fn update(
        &self,
        value: &AnimationAction,
        index: usize,
        animation: AnyAnimation,
        handle: &mut EditHandle<'_, AnimationAction>,
    ) -> EditOutcome {
        handle.commit(
            apply_edit(value, ActionEdit::Replace { index, animation }),
            SCHEMAS_INCOMPATIBLE,
        )
    }
}
