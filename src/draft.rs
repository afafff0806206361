//! The transient state of the creation form

use crate::task::NewTask;

/// What the user has typed into the creation form so far.
///
/// Both fields are free text as far as this crate is concerned (the date is expected to be an
/// ISO-formatted string, but only its presence is checked). \
/// A draft survives a failed creation, so that the user can retry without re-typing. It is cleared
/// by the controller, and only after a creation was acknowledged by the server.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    title: String,
    date: String,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn date(&self) -> &str  { &self.date  }

    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = title.into();
    }
    pub fn set_date<S: Into<String>>(&mut self, date: S) {
        self.date = date.into();
    }

    /// The presence check gating creation: both fields must be non-empty.
    /// No trimming, no date validation.
    pub fn is_ready(&self) -> bool {
        !self.title.is_empty() && !self.date.is_empty()
    }

    /// Build the creation payload from the current fields
    pub fn to_new_task(&self) -> NewTask {
        NewTask::new(self.title.clone(), self.date.clone())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.date.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readiness_requires_both_fields() {
        let mut draft = TaskDraft::new();
        assert_eq!(draft.is_ready(), false);

        draft.set_title("Buy milk");
        assert_eq!(draft.is_ready(), false);

        draft.set_date("2024-05-01");
        assert!(draft.is_ready());

        draft.set_title("");
        assert_eq!(draft.is_ready(), false);
    }

    #[test]
    fn clear_empties_both_fields() {
        let mut draft = TaskDraft::new();
        draft.set_title("Buy milk");
        draft.set_date("2024-05-01");

        draft.clear();
        assert_eq!(draft, TaskDraft::new());
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut draft = TaskDraft::new();
        draft.set_title(" ");
        draft.set_date("2024-05-01");
        assert!(draft.is_ready());
    }
}
