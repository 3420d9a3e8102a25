//! Form submission state machine
//!
//! ```text
//! Idle -> Validating -> Submitting -> Succeeded -> Idle
//!             |                   \-> Failed    -> Idle
//!             \-> Idle (validation error attached)
//! ```

use std::fmt;

use super::draft::FormDraft;
use super::request::WriteRequest;
use crate::error::{MonthwiseError, MonthwiseResult};

/// Sends validated writes to the data layer
pub trait RecordWriter {
    fn write(&mut self, request: &WriteRequest) -> MonthwiseResult<()>;
}

/// Where a form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Inputs that move a form between states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    ValidationPassed,
    ValidationFailed,
    WriteSucceeded,
    WriteFailed,
    Dismiss,
}

impl FormState {
    /// The state `event` leads to, or `None` if it is not allowed here
    pub fn next(self, event: FormEvent) -> Option<FormState> {
        use FormEvent::*;
        use FormState::*;

        match (self, event) {
            (Idle, Submit) => Some(Validating),
            (Validating, ValidationPassed) => Some(Submitting),
            (Validating, ValidationFailed) => Some(Idle),
            (Submitting, WriteSucceeded) => Some(Succeeded),
            (Submitting, WriteFailed) => Some(Failed),
            (Succeeded, Dismiss) | (Failed, Dismiss) => Some(Idle),
            _ => None,
        }
    }

    /// Whether a submission is in flight
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }
}

impl fmt::Display for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A draft plus its submission state and the last error shown to the user
#[derive(Debug, Clone)]
pub struct Form<D> {
    draft: D,
    state: FormState,
    error: Option<String>,
}

impl<D: FormDraft> Form<D> {
    pub fn new(draft: D) -> Self {
        Self {
            draft,
            state: FormState::Idle,
            error: None,
        }
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Edit the draft; allowed whenever no submission is in flight
    pub fn draft_mut(&mut self) -> MonthwiseResult<&mut D> {
        if self.state.is_busy() {
            return Err(MonthwiseError::Validation(format!(
                "Form is {} and cannot be edited",
                self.state
            )));
        }
        Ok(&mut self.draft)
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn apply(&mut self, event: FormEvent) -> MonthwiseResult<()> {
        let next = self.state.next(event).ok_or_else(|| {
            MonthwiseError::Validation(format!(
                "Cannot apply {:?} while the form is {}",
                event, self.state
            ))
        })?;
        tracing::debug!(from = %self.state, to = %next, ?event, "form transition");
        self.state = next;
        Ok(())
    }

    /// Return a settled form to `Idle`
    pub fn dismiss(&mut self) -> MonthwiseResult<()> {
        self.apply(FormEvent::Dismiss)
    }

    /// Validate the draft and, if it passes, hand the write to `writer`
    ///
    /// A settled form is dismissed first. Validation errors return the form to
    /// `Idle` without calling the writer. A failed write leaves the form in
    /// `Failed` with the draft intact so it can be resubmitted; a successful
    /// one resets the draft.
    pub fn submit<W>(&mut self, writer: &mut W) -> MonthwiseResult<()>
    where
        W: RecordWriter + ?Sized,
    {
        if matches!(self.state, FormState::Succeeded | FormState::Failed) {
            self.dismiss()?;
        }
        self.apply(FormEvent::Submit)?;

        let request = match self.draft.validate() {
            Ok(request) => request,
            Err(e) => {
                self.apply(FormEvent::ValidationFailed)?;
                self.error = Some(e.to_string());
                return Err(e);
            }
        };

        self.apply(FormEvent::ValidationPassed)?;
        match writer.write(&request) {
            Ok(()) => {
                self.apply(FormEvent::WriteSucceeded)?;
                self.error = None;
                self.draft.reset();
                tracing::info!(request = %request.describe(), "write succeeded");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(request = %request.describe(), error = %e, "write failed");
                self.apply(FormEvent::WriteFailed)?;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ExpenseDraft, ExpenseLabel};

    #[derive(Default)]
    struct MockWriter {
        calls: Vec<WriteRequest>,
        fail_next: bool,
    }

    impl RecordWriter for MockWriter {
        fn write(&mut self, request: &WriteRequest) -> MonthwiseResult<()> {
            self.calls.push(request.clone());
            if self.fail_next {
                self.fail_next = false;
                return Err(MonthwiseError::Api("Failed to save expense".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_transition_table() {
        assert_eq!(FormState::Idle.next(FormEvent::Submit), Some(FormState::Validating));
        assert_eq!(
            FormState::Validating.next(FormEvent::ValidationFailed),
            Some(FormState::Idle)
        );
        assert_eq!(FormState::Failed.next(FormEvent::Dismiss), Some(FormState::Idle));
        assert_eq!(FormState::Idle.next(FormEvent::WriteSucceeded), None);
        assert_eq!(FormState::Submitting.next(FormEvent::Submit), None);
        assert!(FormState::Submitting.is_busy());
    }

    #[test]
    fn test_validation_failure_never_writes() {
        let mut writer = MockWriter::default();
        let mut form = Form::new(ExpenseDraft::new("1000", ExpenseLabel::other("")));

        let err = form.submit(&mut writer).unwrap_err();
        assert!(err.is_validation());
        assert!(writer.calls.is_empty());
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.error(), Some("Validation error: Please specify the expense name"));
    }

    #[test]
    fn test_success_resets_draft() {
        let mut writer = MockWriter::default();
        let mut form = Form::new(ExpenseDraft::new("1000", ExpenseLabel::category("Groceries")));

        form.submit(&mut writer).unwrap();
        assert_eq!(writer.calls.len(), 1);
        assert_eq!(form.state(), FormState::Succeeded);
        assert!(form.draft().amount.is_empty());
        assert!(form.error().is_none());

        form.dismiss().unwrap();
        assert_eq!(form.state(), FormState::Idle);
    }

    #[test]
    fn test_failed_write_keeps_draft_for_retry() {
        let mut writer = MockWriter {
            fail_next: true,
            ..MockWriter::default()
        };
        let mut form = Form::new(ExpenseDraft::new("1000", ExpenseLabel::category("Groceries")));

        let err = form.submit(&mut writer).unwrap_err();
        assert!(err.is_api());
        assert_eq!(form.state(), FormState::Failed);
        assert_eq!(form.draft().amount, "1000");
        assert!(form.error().is_some());

        form.submit(&mut writer).unwrap();
        assert_eq!(writer.calls.len(), 2);
        assert_eq!(writer.calls[0], writer.calls[1]);
        assert_eq!(form.state(), FormState::Succeeded);
    }

    #[test]
    fn test_draft_editing_after_validation_error() {
        let mut writer = MockWriter::default();
        let mut form = Form::new(ExpenseDraft::new("", ExpenseLabel::category("Travel")));
        assert!(form.submit(&mut writer).is_err());

        form.draft_mut().unwrap().amount = "250".into();
        form.submit(&mut writer).unwrap();
        assert_eq!(writer.calls.len(), 1);
    }
}
