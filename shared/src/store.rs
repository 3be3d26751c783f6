//! # Record Store
//!
//! Persistence of the employee collection on top of a string key-value
//! backend (browser `localStorage` in the app, an in-memory map in tests).
//!
//! The whole collection lives under one key as a JSON array. Every mutation
//! reads the full array, applies one change and writes the full array back.
//! There is no locking: two tabs editing at once can silently overwrite each
//! other's changes, last write wins.

use chrono::Utc;
use log::{debug, info, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

use crate::employee::{Employee, EmployeeId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
    #[error("stored employees are not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// String key-value storage in the shape of the Web Storage API
pub trait KeyValueBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Backend that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
}

impl KeyValueBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Several stores sharing one backend, like tabs sharing `localStorage`
impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Rc<B> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// What an upsert did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The record had no identifier; it was stored under a fresh one
    Inserted(Employee),
    /// The stored record with the same identifier was replaced
    Replaced(Employee),
    /// The record names an identifier that is not stored; nothing was written
    Missing(EmployeeId),
}

impl UpsertOutcome {
    pub fn id(&self) -> EmployeeId {
        match self {
            UpsertOutcome::Inserted(employee) | UpsertOutcome::Replaced(employee) => {
                employee.id.unwrap_or(EmployeeId(0))
            }
            UpsertOutcome::Missing(id) => *id,
        }
    }
}

/// Interface the UI uses to read and change the persisted collection
pub trait EmployeeStore {
    /// Every stored employee, in insertion order
    fn read_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Insert when `employee.id` is `None`, otherwise replace the stored record
    /// with the same identifier
    fn upsert(&self, employee: Employee) -> Result<UpsertOutcome, StoreError>;

    /// Remove the employee with `id`; returns whether anything was removed
    fn delete_by_id(&self, id: EmployeeId) -> Result<bool, StoreError>;

    fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|employee| employee.id == Some(id)))
    }
}

/// [`EmployeeStore`] that keeps the collection as a JSON array under one key
pub struct JsonEmployeeStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> JsonEmployeeStore<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn write_all(&self, employees: &[Employee]) -> Result<(), StoreError> {
        let json = serde_json::to_string(employees)?;
        self.backend.set_item(&self.key, &json)
    }
}

/// Epoch milliseconds, bumped past any identifier already in use
fn generate_id(existing: &[Employee]) -> EmployeeId {
    let mut candidate = Utc::now().timestamp_millis().max(1) as u64;
    while existing.iter().any(|employee| employee.id == Some(EmployeeId(candidate))) {
        candidate += 1;
    }
    EmployeeId(candidate)
}

impl<B: KeyValueBackend> EmployeeStore for JsonEmployeeStore<B> {
    fn read_all(&self) -> Result<Vec<Employee>, StoreError> {
        match self.backend.get_item(&self.key)? {
            Some(json) if !json.trim().is_empty() => {
                let employees: Vec<Employee> = serde_json::from_str(&json)?;
                debug!("Loaded {} employees from '{}'", employees.len(), self.key);
                Ok(employees)
            }
            _ => Ok(Vec::new()),
        }
    }

    fn upsert(&self, mut employee: Employee) -> Result<UpsertOutcome, StoreError> {
        let mut employees = self.read_all()?;

        let outcome = match employee.id {
            None => {
                employee.id = Some(generate_id(&employees));
                info!("Adding employee {} with ID {:?}", employee.full_name(), employee.id);
                employees.push(employee.clone());
                UpsertOutcome::Inserted(employee)
            }
            Some(id) => match employees.iter_mut().find(|stored| stored.id == Some(id)) {
                Some(stored) => {
                    info!("Updating employee {}", id);
                    *stored = employee.clone();
                    UpsertOutcome::Replaced(employee)
                }
                None => {
                    warn!("Employee {} is no longer stored; nothing updated", id);
                    return Ok(UpsertOutcome::Missing(id));
                }
            },
        };

        self.write_all(&employees)?;
        Ok(outcome)
    }

    fn delete_by_id(&self, id: EmployeeId) -> Result<bool, StoreError> {
        let mut employees = self.read_all()?;
        let before = employees.len();
        employees.retain(|employee| employee.id != Some(id));

        if employees.len() == before {
            debug!("Employee {} not found; nothing deleted", id);
            return Ok(false);
        }

        self.write_all(&employees)?;
        info!("Deleted employee {}", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "employees";

    fn create_test_store() -> JsonEmployeeStore<MemoryBackend> {
        JsonEmployeeStore::new(MemoryBackend::default(), KEY)
    }

    fn new_employee(first_name: &str) -> Employee {
        Employee {
            first_name: first_name.to_string(),
            last_name: "Test".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            phone: "5550000".to_string(),
            department: "Tech".to_string(),
            position: "Junior".to_string(),
            employment_date: "2024-02-01".to_string(),
            date_of_birth: "1995-05-05".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_store_reads_nothing() {
        let store = create_test_store();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let store = create_test_store();

        let first = store.upsert(new_employee("Ada")).unwrap();
        let second = store.upsert(new_employee("Grace")).unwrap();

        assert!(matches!(first, UpsertOutcome::Inserted(_)));
        assert!(matches!(second, UpsertOutcome::Inserted(_)));
        assert_ne!(first.id(), second.id());

        let stored = store.read_all().unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].first_name, "Ada");
        assert_eq!(stored[1].first_name, "Grace");
        assert!(stored.iter().all(|employee| employee.id.is_some()));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = create_test_store();
        store.upsert(new_employee("Ada")).unwrap();
        let id = store.upsert(new_employee("Grace")).unwrap().id();
        store.upsert(new_employee("Linus")).unwrap();

        let mut edited = store.find_by_id(id).unwrap().unwrap();
        edited.position = "Senior".to_string();
        let outcome = store.upsert(edited).unwrap();

        assert!(matches!(outcome, UpsertOutcome::Replaced(_)));
        let stored = store.read_all().unwrap();
        assert_eq!(stored.len(), 3);
        assert_eq!(stored[1].id, Some(id));
        assert_eq!(stored[1].position, "Senior");
    }

    #[test]
    fn test_update_of_unknown_id_writes_nothing() {
        let store = create_test_store();
        store.upsert(new_employee("Ada")).unwrap();
        let before = store.backend().get_item(KEY).unwrap();

        let mut ghost = new_employee("Ghost");
        ghost.id = Some(EmployeeId(99));
        let outcome = store.upsert(ghost).unwrap();

        assert_eq!(outcome, UpsertOutcome::Missing(EmployeeId(99)));
        assert_eq!(store.backend().get_item(KEY).unwrap(), before);
    }

    #[test]
    fn test_delete_existing() {
        let store = create_test_store();
        let id = store.upsert(new_employee("Ada")).unwrap().id();
        store.upsert(new_employee("Grace")).unwrap();

        assert!(store.delete_by_id(id).unwrap());
        let stored = store.read_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].first_name, "Grace");
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let store = create_test_store();
        store.upsert(new_employee("Ada")).unwrap();
        let before = store.read_all().unwrap();

        assert!(!store.delete_by_id(EmployeeId(12345)).unwrap());
        assert_eq!(store.read_all().unwrap(), before);
    }

    #[test]
    fn test_generated_id_skips_collisions() {
        let now = Utc::now().timestamp_millis() as u64;
        let existing: Vec<Employee> = (0..5)
            .map(|offset| Employee {
                id: Some(EmployeeId(now + offset)),
                ..Default::default()
            })
            .collect();

        let id = generate_id(&existing);
        assert!(existing.iter().all(|employee| employee.id != Some(id)));
    }

    #[test]
    fn test_corrupt_json_is_reported() {
        let store = create_test_store();
        store.backend().set_item(KEY, "{not json").unwrap();

        assert!(matches!(store.read_all(), Err(StoreError::Corrupt(_))));
        assert!(store.upsert(new_employee("Ada")).is_err());
    }

    #[test]
    fn test_reads_collection_written_by_older_versions() {
        let store = create_test_store();
        let legacy = r#"[{"id":1,"firstName":"John","lastName":"Doe","department":"IT",
            "position":"Developer","employmentDate":"2023-01-01","dateOfBirth":"1990-01-01",
            "phone":"123-456-7890","email":"john@example.com"}]"#;
        store.backend().set_item(KEY, legacy).unwrap();

        let stored = store.read_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, Some(EmployeeId(1)));
        assert_eq!(stored[0].phone, "123-456-7890");
    }

    #[test]
    fn test_reads_records_with_both_phone_keys() {
        let store = create_test_store();
        let saved = r#"[{"id":1702516122000,"firstName":"Ada","lastName":"Lovelace",
            "employmentDate":"2023-03-01","dateOfBirth":"1990-12-10","phoneNumber":"",
            "email":"ada@example.com","department":"Analytics","position":"Senior",
            "birthDate":"","phone":"5551234"}]"#;
        store.backend().set_item(KEY, saved).unwrap();

        let stored = store.read_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].phone, "5551234");
        assert_eq!(stored[0].date_of_birth, "1990-12-10");

        let added = store.upsert(new_employee("Grace")).unwrap();
        assert!(matches!(added, UpsertOutcome::Inserted(_)));
        assert_eq!(store.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_stale_writer_overwrites_concurrent_change() {
        // Two handles on the same storage, as with two open tabs
        let backend = Rc::new(MemoryBackend::default());
        let first_tab = JsonEmployeeStore::new(Rc::clone(&backend), KEY);
        let second_tab = JsonEmployeeStore::new(Rc::clone(&backend), KEY);
        let id = first_tab.upsert(new_employee("Ada")).unwrap().id();

        let mut stale_copy = second_tab.find_by_id(id).unwrap().unwrap();
        let mut fresh_copy = first_tab.find_by_id(id).unwrap().unwrap();
        fresh_copy.position = "Senior".to_string();
        first_tab.upsert(fresh_copy).unwrap();

        stale_copy.last_name = "Byron".to_string();
        second_tab.upsert(stale_copy).unwrap();

        let stored = first_tab.find_by_id(id).unwrap().unwrap();
        assert_eq!(stored.last_name, "Byron");
        assert_eq!(stored.position, "Junior");
    }
}
