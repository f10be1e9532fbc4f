use kinetic_core::KineticResult;

use crate::notify::Notifier;

/// Result of one user edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The candidate passed validation and was handed to `on_change`.
    Committed,
    /// The candidate was dropped and the user was warned.
    Rejected,
}

impl EditOutcome {
    pub fn is_committed(self) -> bool {
        self == EditOutcome::Committed
    }
}

/// The commit side of an edit: the prop's `on_change` and the notifier used
/// when a candidate is rejected.
pub struct EditHandle<'a, T> {
    notifier: &'a mut dyn Notifier,
    on_change: &'a mut dyn FnMut(T),
}

impl<'a, T> EditHandle<'a, T> {
    pub fn new(notifier: &'a mut dyn Notifier, on_change: &'a mut dyn FnMut(T)) -> Self {
        Self {
            notifier,
            on_change,
        }
    }

    /// Commit a validated candidate, or warn with `failure_message`.
    ///
    /// `on_change` runs at most once and only with a valid value; the
    /// notifier gets exactly one message on rejection.
    pub fn commit(&mut self, candidate: KineticResult<T>, failure_message: &str) -> EditOutcome {
        match candidate {
            Ok(value) => {
                (self.on_change)(value);
                tracing::debug!("edit committed");
                EditOutcome::Committed
            }
            Err(err) => self.reject(failure_message, &err),
        }
    }

    /// Warn without committing.
    pub fn reject(&mut self, message: &str, cause: &dyn std::fmt::Display) -> EditOutcome {
        tracing::warn!("edit rejected: {} ({})", message, cause);
        self.notifier.error(message);
        EditOutcome::Rejected
    }
}

impl<T> std::fmt::Debug for EditHandle<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use kinetic_core::KineticError;

    #[test]
    fn test_commit_calls_on_change_once() {
        let mut notifier = RecordingNotifier::new();
        let mut seen = Vec::new();
        let mut on_change = |value: u32| seen.push(value);
        let mut handle = EditHandle::<u32>::new(&mut notifier, &mut on_change);

        assert_eq!(handle.commit(Ok(7), "nope"), EditOutcome::Committed);
        drop(handle);
        assert_eq!(seen, vec![7]);
        assert!(notifier.messages.is_empty());
    }

    #[test]
    fn test_rejection_warns_once_and_skips_on_change() {
        let mut notifier = RecordingNotifier::new();
        let mut calls = 0;
        let mut on_change = |_: u32| calls += 1;
        let mut handle = EditHandle::<u32>::new(&mut notifier, &mut on_change);

        let outcome = handle.commit(Err(KineticError::schema("bad")), "Failed to add animation");
        assert_eq!(outcome, EditOutcome::Rejected);
        drop(handle);
        assert_eq!(calls, 0);
        assert_eq!(notifier.messages, vec!["Failed to add animation".to_string()]);
    }
}
