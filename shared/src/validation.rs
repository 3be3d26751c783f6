//! Field-level validation of an employee before it may be persisted.
//!
//! The email rule is intentionally loose (`something@something.something`);
//! records already stored were accepted under it, so it must stay that way.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::employee::{Employee, EmployeeField};
use crate::i18n::MessageKey;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("phone pattern is valid"));

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    InvalidPhone,
}

impl FieldError {
    /// Localized message to show next to `field`
    pub fn message_key(self, field: EmployeeField) -> MessageKey {
        match self {
            FieldError::InvalidEmail => MessageKey::InvalidEmail,
            FieldError::InvalidPhone => MessageKey::InvalidPhone,
            FieldError::Required => match field {
                EmployeeField::FirstName => MessageKey::FirstNameRequired,
                EmployeeField::LastName => MessageKey::LastNameRequired,
                EmployeeField::Email => MessageKey::EmailRequired,
                EmployeeField::Phone => MessageKey::PhoneRequired,
                EmployeeField::Department => MessageKey::DepartmentRequired,
                EmployeeField::Position => MessageKey::PositionRequired,
                EmployeeField::EmploymentDate => MessageKey::EmploymentDateRequired,
                EmployeeField::DateOfBirth => MessageKey::DateOfBirthRequired,
            },
        }
    }
}

/// One slot per [`EmployeeField`]; no slot filled means the record is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    slots: [Option<FieldError>; EmployeeField::COUNT],
}

impl FieldErrors {
    pub fn get(&self, field: EmployeeField) -> Option<FieldError> {
        self.slots[field.index()]
    }

    pub fn set(&mut self, field: EmployeeField, error: FieldError) {
        self.slots[field.index()] = Some(error);
    }

    pub fn clear(&mut self, field: EmployeeField) {
        self.slots[field.index()] = None;
    }

    pub fn contains(&self, field: EmployeeField) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Failing fields in form order
    pub fn iter(&self) -> impl Iterator<Item = (EmployeeField, FieldError)> + '_ {
        EmployeeField::ALL
            .iter()
            .filter_map(move |field| self.get(*field).map(|error| (*field, error)))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Check every field of `employee` and report each one that fails its rule
pub fn validate_employee(employee: &Employee) -> FieldErrors {
    let mut errors = FieldErrors::default();

    for field in EmployeeField::ALL {
        let value = field.value_of(employee);
        if is_blank(value) {
            errors.set(field, FieldError::Required);
            continue;
        }

        match field {
            EmployeeField::Email if !is_valid_email(value) => {
                errors.set(field, FieldError::InvalidEmail);
            }
            EmployeeField::Phone if !is_valid_phone(value) => {
                errors.set(field, FieldError::InvalidPhone);
            }
            _ => {}
        }
    }

    errors
}
