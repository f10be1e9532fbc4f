use serde::Serialize;

use kinetic_core::{is_custom_ident, IdGenerator, KineticResult, PanelConfig, StyleValue};
use kinetic_ir::options::{action_type_options, axis_options, source_options, OptionInfo};
use kinetic_ir::{
    apply_edit, instance_label, ActionEdit, ActionType, AnimationAction, Axis, InstanceId,
    ScrollSource,
};

use crate::commit::{EditHandle, EditOutcome};
use crate::notify::{subject_not_found, SCHEMAS_INCOMPATIBLE};
use crate::snapshot::{bind_listed_property, BuilderSnapshot, StyleStore};

/// Subject value standing for the animated element itself. Never stored.
pub const SELF_SUBJECT: &str = "self";

/// Property that names an element's view timeline.
pub const VIEW_TIMELINE_NAME: &str = "viewTimelineName";

/// An element whose view timeline an animation can follow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCandidate {
    /// `self`, an existing timeline name, or a synthesized one.
    pub value: String,
    pub label: String,
    /// Whether the element already declares this timeline.
    pub timeline_exists: bool,
    pub instance_id: InstanceId,
}

/// Candidates for the view subject: the selected element, then every
/// resolvable ancestor from nearest to farthest.
pub fn collect_subjects(
    snapshot: &dyn BuilderSnapshot,
    ids: &mut dyn IdGenerator,
    timeline_prefix: &str,
) -> Vec<SubjectCandidate> {
    let Some(path) = snapshot.selected_path() else {
        return Vec::new();
    };
    let Some(selected) = path.first() else {
        return Vec::new();
    };

    let mut subjects = vec![SubjectCandidate {
        value: SELF_SUBJECT.to_string(),
        label: "Self".to_string(),
        timeline_exists: true,
        instance_id: selected.clone(),
    }];

    for depth in 1..path.len() {
        let ancestors = &path[depth..];
        let instance_id = &ancestors[0];

        let Some(instance) = snapshot.instances().get(instance_id) else {
            continue;
        };
        let Some(meta) = snapshot.component_metas().get(&instance.component) else {
            continue;
        };

        let timeline_name = snapshot.style_value(VIEW_TIMELINE_NAME, ancestors).to_css();
        let timeline_exists = is_custom_ident(&timeline_name);
        let value = if timeline_exists {
            timeline_name
        } else {
            format!("{}{}", timeline_prefix, ids.generate())
        };

        subjects.push(SubjectCandidate {
            value,
            label: instance_label(instance, meta),
            timeline_exists,
            instance_id: instance_id.clone(),
        });
    }

    subjects
}

/// Type, axis, source and subject controls of the animation section.
///
/// Subject candidates are computed once, when the section is mounted.
#[derive(Debug, Clone)]
pub struct ActionSection {
    subjects: Vec<SubjectCandidate>,
}

impl ActionSection {
    pub fn mount(snapshot: &dyn BuilderSnapshot, ids: &mut dyn IdGenerator, config: &PanelConfig) -> Self {
        let subjects = collect_subjects(snapshot, ids, &config.timeline_prefix);
        tracing::debug!("animation section mounted with {} subject(s)", subjects.len());
        Self { subjects }
    }

    /// The value the section edits: the prop's action, or an empty scroll
    /// action when the prop is unset.
    pub fn value(prop: Option<&AnimationAction>) -> AnimationAction {
        prop.cloned().unwrap_or_default()
    }

    pub fn type_options(&self) -> Vec<OptionInfo> {
        action_type_options()
    }

    pub fn axis_options(&self) -> Vec<OptionInfo> {
        axis_options()
    }

    pub fn source_options(&self) -> Vec<OptionInfo> {
        source_options()
    }

    pub fn subjects(&self) -> &[SubjectCandidate] {
        &self.subjects
    }

    /// Subject key a picker shows for `value`.
    pub fn selected_subject<'v>(&self, value: &'v AnimationAction) -> &'v str {
        value.subject().unwrap_or(SELF_SUBJECT)
    }

    pub fn subject_label(&self, subject: &str) -> &str {
        self.find_subject(subject)
            .map(|candidate| candidate.label.as_str())
            .unwrap_or("-")
    }

    /// Type, axis and source edits do not depend on the mounted subjects.
    pub fn set_type(
        value: &AnimationAction,
        action_type: ActionType,
        handle: &mut EditHandle<'_, AnimationAction>,
    ) -> EditOutcome {
        handle.commit(apply_edit(value, ActionEdit::SetType(action_type)), SCHEMAS_INCOMPATIBLE)
    }

    pub fn set_axis(
        value: &AnimationAction,
        axis: Axis,
        handle: &mut EditHandle<'_, AnimationAction>,
    ) -> EditOutcome {
        handle.commit(apply_edit(value, ActionEdit::SetAxis(axis)), SCHEMAS_INCOMPATIBLE)
    }

    pub fn set_source(
        value: &AnimationAction,
        source: ScrollSource,
        handle: &mut EditHandle<'_, AnimationAction>,
    ) -> EditOutcome {
        handle.commit(apply_edit(value, ActionEdit::SetSource(source)), SCHEMAS_INCOMPATIBLE)
    }

    /// Follow the view timeline of the candidate with value `subject`.
    ///
    /// A candidate whose timeline does not exist yet gets its
    /// `view-timeline-name` declared before the action is committed.
    /// Recoverable problems are reported through the handle; an `Err` means
    /// the document itself is malformed.
    pub fn set_subject(
        &self,
        value: &AnimationAction,
        subject: &str,
        store: &mut dyn StyleStore,
        ids: &mut dyn IdGenerator,
        handle: &mut EditHandle<'_, AnimationAction>,
    ) -> KineticResult<EditOutcome> {
        let Some(candidate) = self.find_subject(subject) else {
            let message = subject_not_found(subject);
            return Ok(handle.reject(&message, &"stale subject candidate"));
        };

        let stored = (candidate.value != SELF_SUBJECT).then(|| candidate.value.clone());
        let next = match apply_edit(value, ActionEdit::SetSubject(stored)) {
            Ok(next) => next,
            Err(err) => return Ok(handle.reject(SCHEMAS_INCOMPATIBLE, &err)),
        };

        if !candidate.timeline_exists {
            tracing::info!(
                "declaring view timeline {} on instance {}",
                candidate.value,
                candidate.instance_id
            );
            if let Err(err) = bind_listed_property(
                store,
                ids,
                &candidate.instance_id,
                VIEW_TIMELINE_NAME,
                StyleValue::unparsed(candidate.value.clone()),
            ) {
                tracing::error!("cannot declare view timeline {}: {}", candidate.value, err);
                return Err(err);
            }
        }

        Ok(handle.commit(Ok(next), SCHEMAS_INCOMPATIBLE))
    }

    fn find_subject(&self, value: &str) -> Option<&SubjectCandidate> {
        self.subjects.iter().find(|candidate| candidate.value == value)
    }
}
