//! # Employee Form
//!
//! Create/edit form for a single employee. Saving is a two-step commit so the
//! user can back out before anything is written:
//!
//! ```text
//! Editing --submit (valid)--> PendingConfirmation --confirm--> Committed
//!    ^                               |
//!    |                            decline
//!    +------ edit / submit ------ Cancelled
//! ```
//!
//! An invalid submit stays in `Editing` with the errors recorded.

use log::{debug, info, warn};
use thiserror::Error;

use crate::employee::{Employee, EmployeeField, EmployeeId};
use crate::store::{EmployeeStore, StoreError, UpsertOutcome};
use crate::validation::{validate_employee, FieldErrors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EmployeeId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    /// Draft is valid and the confirmation modal is showing
    PendingConfirmation,
    /// Draft was written under this identifier
    Committed(EmployeeId),
    /// The confirmation modal was declined; the draft is kept
    Cancelled,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("the form is not waiting for confirmation")]
    NotAwaitingConfirmation,
    #[error("employee {0} was removed while it was being edited")]
    Vanished(EmployeeId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    draft: Employee,
    mode: FormMode,
    errors: FieldErrors,
    phase: FormPhase,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::create()
    }
}

impl EmployeeForm {
    /// Blank form for a new employee
    pub fn create() -> Self {
        Self {
            draft: Employee::default(),
            mode: FormMode::Create,
            errors: FieldErrors::default(),
            phase: FormPhase::Editing,
        }
    }

    /// Form pre-filled with a stored employee
    pub fn edit(employee: Employee) -> Self {
        match employee.id {
            Some(id) => Self {
                draft: employee,
                mode: FormMode::Edit(id),
                errors: FieldErrors::default(),
                phase: FormPhase::Editing,
            },
            None => {
                let mut form = Self::create();
                form.draft = employee;
                form
            }
        }
    }

    /// Open the form for `target`, or a blank one when there is no target.
    ///
    /// A target that is no longer stored still opens in edit mode with an
    /// empty draft, so confirming it writes nothing and reports
    /// [`FormError::Vanished`].
    pub fn open<S: EmployeeStore>(store: &S, target: Option<EmployeeId>) -> Result<Self, StoreError> {
        let Some(id) = target else {
            return Ok(Self::create());
        };

        match store.find_by_id(id)? {
            Some(employee) => {
                debug!("Editing employee {}", id);
                Ok(Self::edit(employee))
            }
            None => {
                warn!("Employee {} not found; opening an empty edit form", id);
                Ok(Self::edit(Employee {
                    id: Some(id),
                    ..Employee::default()
                }))
            }
        }
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_confirmation_visible(&self) -> bool {
        self.phase == FormPhase::PendingConfirmation
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, FormPhase::Editing | FormPhase::Cancelled)
    }

    /// Store a new value for `field`. Ignored while the confirmation modal is
    /// open or after the draft was committed.
    pub fn set_field(&mut self, field: EmployeeField, value: String) {
        if !self.accepts_input() {
            debug!("Ignoring edit of {:?} in phase {:?}", field, self.phase);
            return;
        }
        field.set_on(&mut self.draft, value);
        self.phase = FormPhase::Editing;
    }

    /// Validate the draft; when it passes, ask for confirmation.
    /// Returns whether the confirmation modal is now showing.
    pub fn submit(&mut self) -> bool {
        if !self.accepts_input() {
            return self.is_confirmation_visible();
        }

        self.errors = validate_employee(&self.draft);
        if self.errors.is_empty() {
            self.phase = FormPhase::PendingConfirmation;
            true
        } else {
            debug!("Employee form has {} invalid fields", self.errors.len());
            self.phase = FormPhase::Editing;
            false
        }
    }

    /// Close the confirmation modal without saving
    pub fn decline(&mut self) {
        if self.phase == FormPhase::PendingConfirmation {
            self.phase = FormPhase::Cancelled;
        }
    }

    /// Write the confirmed draft to `store`
    pub fn confirm<S: EmployeeStore>(&mut self, store: &S) -> Result<EmployeeId, FormError> {
        if self.phase != FormPhase::PendingConfirmation {
            return Err(FormError::NotAwaitingConfirmation);
        }

        let mut record = self.draft.clone();
        record.id = match self.mode {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        };

        let outcome = store.upsert(record)?;
        let id = outcome.id();
        match outcome {
            UpsertOutcome::Inserted(saved) | UpsertOutcome::Replaced(saved) => {
                info!("Saved employee {} ({})", saved.full_name(), id);
                self.draft = saved;
                self.phase = FormPhase::Committed(id);
                Ok(id)
            }
            UpsertOutcome::Missing(_) => {
                self.phase = FormPhase::Cancelled;
                Err(FormError::Vanished(id))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonEmployeeStore, MemoryBackend};
    use crate::validation::FieldError;

    fn create_test_store() -> JsonEmployeeStore<MemoryBackend> {
        JsonEmployeeStore::new(MemoryBackend::default(), "employees")
    }

    fn fill(form: &mut EmployeeForm) {
        let values = [
            (EmployeeField::FirstName, "Ada"),
            (EmployeeField::LastName, "Lovelace"),
            (EmployeeField::Email, "ada@example.com"),
            (EmployeeField::Phone, "5551234"),
            (EmployeeField::Department, "Analytics"),
            (EmployeeField::Position, "Senior"),
            (EmployeeField::EmploymentDate, "2023-03-01"),
            (EmployeeField::DateOfBirth, "1990-12-10"),
        ];
        for (field, value) in values {
            form.set_field(field, value.to_string());
        }
    }

    #[test]
    fn test_invalid_submit_stays_editing() {
        let mut form = EmployeeForm::create();
        form.set_field(EmployeeField::Email, "bad".to_string());

        assert!(!form.submit());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(!form.is_confirmation_visible());
        assert_eq!(form.errors().get(EmployeeField::Email), Some(FieldError::InvalidEmail));
        assert_eq!(form.errors().get(EmployeeField::FirstName), Some(FieldError::Required));
    }

    #[test]
    fn test_create_flow_commits() {
        let store = create_test_store();
        let mut form = EmployeeForm::create();
        fill(&mut form);

        assert!(form.submit());
        assert!(form.is_confirmation_visible());
        assert!(form.errors().is_empty());

        let id = form.confirm(&store).unwrap();
        assert_eq!(form.phase(), FormPhase::Committed(id));

        let stored = store.read_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, Some(id));
        assert_eq!(stored[0].first_name, "Ada");
    }

    #[test]
    fn test_confirm_requires_pending_confirmation() {
        let store = create_test_store();
        let mut form = EmployeeForm::create();
        fill(&mut form);

        assert!(matches!(form.confirm(&store), Err(FormError::NotAwaitingConfirmation)));
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_decline_keeps_draft_and_writes_nothing() {
        let store = create_test_store();
        let mut form = EmployeeForm::create();
        fill(&mut form);
        form.submit();

        form.decline();
        assert_eq!(form.phase(), FormPhase::Cancelled);
        assert_eq!(form.draft().first_name, "Ada");
        assert!(matches!(form.confirm(&store), Err(FormError::NotAwaitingConfirmation)));
        assert!(store.read_all().unwrap().is_empty());

        form.set_field(EmployeeField::FirstName, "Augusta".to_string());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.submit());
        form.confirm(&store).unwrap();
        assert_eq!(store.read_all().unwrap()[0].first_name, "Augusta");
    }

    #[test]
    fn test_edits_ignored_while_confirming() {
        let mut form = EmployeeForm::create();
        fill(&mut form);
        form.submit();

        form.set_field(EmployeeField::FirstName, String::new());
        assert_eq!(form.draft().first_name, "Ada");
        assert!(form.is_confirmation_visible());
    }

    #[test]
    fn test_edit_flow_replaces_record() {
        let store = create_test_store();
        let mut creator = EmployeeForm::create();
        fill(&mut creator);
        creator.submit();
        let id = creator.confirm(&store).unwrap();

        let mut form = EmployeeForm::open(&store, Some(id)).unwrap();
        assert_eq!(form.mode(), FormMode::Edit(id));
        assert_eq!(form.draft().last_name, "Lovelace");

        form.set_field(EmployeeField::Position, "Medior".to_string());
        assert!(form.submit());
        assert_eq!(form.confirm(&store).unwrap(), id);

        let stored = store.read_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].position, "Medior");
    }

    #[test]
    fn test_open_unknown_id_stays_in_edit_mode() {
        let store = create_test_store();
        let mut form = EmployeeForm::open(&store, Some(EmployeeId(404))).unwrap();

        assert_eq!(form.mode(), FormMode::Edit(EmployeeId(404)));
        assert!(form.is_edit());
        assert_eq!(form.draft().first_name, "");

        fill(&mut form);
        assert!(form.submit());
        assert!(matches!(form.confirm(&store), Err(FormError::Vanished(EmployeeId(404)))));
        assert_eq!(form.phase(), FormPhase::Cancelled);
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_confirm_of_deleted_record_reports_vanished() {
        let store = create_test_store();
        let mut creator = EmployeeForm::create();
        fill(&mut creator);
        creator.submit();
        let id = creator.confirm(&store).unwrap();

        let mut form = EmployeeForm::open(&store, Some(id)).unwrap();
        form.submit();
        store.delete_by_id(id).unwrap();

        assert!(matches!(form.confirm(&store), Err(FormError::Vanished(vanished)) if vanished == id));
        assert_eq!(form.phase(), FormPhase::Cancelled);
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_committed_form_ignores_further_input() {
        let store = create_test_store();
        let mut form = EmployeeForm::create();
        fill(&mut form);
        form.submit();
        let id = form.confirm(&store).unwrap();

        form.set_field(EmployeeField::FirstName, "Changed".to_string());
        assert!(!form.submit());
        assert_eq!(form.phase(), FormPhase::Committed(id));
        assert_eq!(form.draft().first_name, "Ada");
    }
}
