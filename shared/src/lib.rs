//! # Employee Directory Core
//!
//! Everything the directory decides, independent of the browser:
//!
//! - **employee**: the employee record and its editable fields
//! - **collection**: search, pagination and selection over loaded records
//! - **validation**: field rules a record must pass before it is saved
//! - **form**: the create/edit form and its confirm-before-save flow
//! - **confirm**: a pending yes/no prompt (used for deletes)
//! - **store**: persistence of the collection over a key-value backend
//! - **route**: pages of the app and their bookmarkable URLs
//! - **i18n**: display strings and the language preference
//! - **config**: page sizes, storage keys and defaults
//!
//! The frontend owns side effects (address bar, `localStorage`, rendering) and
//! passes state in and out of these types explicitly.

pub mod collection;
pub mod config;
pub mod confirm;
pub mod employee;
pub mod form;
pub mod i18n;
pub mod route;
pub mod store;
pub mod validation;

pub use collection::CollectionView;
pub use config::DirectoryConfig;
pub use confirm::Confirmation;
pub use employee::{Department, Employee, EmployeeField, EmployeeId, Position};
pub use form::{EmployeeForm, FormError, FormMode, FormPhase};
pub use i18n::{load_language, save_language, Language, MessageKey};
pub use route::{Layout, Route, RouteError, ViewMode};
pub use store::{EmployeeStore, JsonEmployeeStore, KeyValueBackend, MemoryBackend, StoreError, UpsertOutcome};
pub use validation::{validate_employee, FieldError, FieldErrors};
