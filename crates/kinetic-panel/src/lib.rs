//! # kinetic-panel
//!
//! Controllers behind the animation settings panel. Each one reads the
//! current value, builds a candidate through `kinetic_ir::apply_edit`, and
//! either hands it to `on_change` or warns the user through a [`Notifier`].
//!
//! Builder state is injected through [`BuilderSnapshot`] and [`StyleStore`],
//! so the controllers run the same against a live document or a JSON file.

pub mod action_section;
pub mod animations_list;
pub mod commit;
pub mod notify;
pub mod range_panel;
pub mod snapshot;

pub use action_section::{collect_subjects, ActionSection, SubjectCandidate, SELF_SUBJECT};
pub use animations_list::{AnimationsList, ADD_HINT};
pub use commit::{EditHandle, EditOutcome};
pub use notify::{LogNotifier, Notifier, RecordingNotifier};
pub use range_panel::RangePanel;
pub use snapshot::{bind_listed_property, BuilderSnapshot, StyleStore};
