//! # Record Storage
//!
//! [`RecordStore`] owns the ordered collection of employee records for one
//! process session. Nothing is persisted; the store is created empty and dies
//! with the process.
//!
//! Two rules hold at all times:
//! - at most one record exists per id
//! - insertion order is display order
//!
//! Every mutation is all-or-nothing: a failed call leaves the store exactly
//! as it was.

use crate::error::{DirectoryError, Result};
use crate::model::{Employee, EmployeeFields};

/// Ordered in-memory collection of employee records.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Employee>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record. The duplicate check runs before any mutation, so
    /// a `DuplicateId` failure leaves the store untouched.
    pub fn create(&mut self, employee: Employee) -> Result<Employee> {
        if self.find(&employee.id).is_some() {
            return Err(DirectoryError::DuplicateId(employee.id));
        }
        self.records.push(employee.clone());
        Ok(employee)
    }

    /// Linear scan; fine at directory scale.
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Replace a record's name and address in place. The id comes from the
    /// lookup key, never from caller data, so an update can never introduce
    /// an id collision. Position in the listing is preserved.
    pub fn update(&mut self, id: &str, fields: EmployeeFields) -> Result<Employee> {
        match self.records.iter_mut().find(|e| e.id == id) {
            Some(record) => {
                record.apply(fields);
                Ok(record.clone())
            }
            None => Err(DirectoryError::NotFound(id.to_string())),
        }
    }

    /// Remove a record, returning it. All other records keep their relative
    /// order.
    pub fn delete(&mut self, id: &str) -> Result<Employee> {
        match self.records.iter().position(|e| e.id == id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(DirectoryError::NotFound(id.to_string())),
        }
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// The full ordered listing, as handed to the view for a re-render.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: RecordStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: RecordStore::new(),
            }
        }

        pub fn with_employee(mut self, id: &str, name: &str, address: &str) -> Self {
            let employee = Employee::new(id, name, address).unwrap();
            self.store.create(employee).unwrap();
            self
        }

        pub fn with_employees(mut self, count: usize) -> Self {
            for i in 1..=count {
                let employee = Employee::new(
                    &format!("E{}", i),
                    &format!("Employee {}", i),
                    &format!("{} Main St", i),
                )
                .unwrap();
                self.store.create(employee).unwrap();
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn create_appends_in_order() {
        let store = StoreFixture::new().with_employees(3).store;
        assert_eq!(store.count(), 3);
        let ids: Vec<_> = store.records().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["E1", "E2", "E3"]);
    }

    #[test]
    fn create_rejects_duplicate_id_without_mutation() {
        let mut store = StoreFixture::new()
            .with_employee("E1", "Ann", "1 Main St")
            .store;
        let clash = Employee::new("E1", "Bob", "2 Oak Ave").unwrap();
        assert!(matches!(
            store.create(clash),
            Err(DirectoryError::DuplicateId(id)) if id == "E1"
        ));
        assert_eq!(store.count(), 1);
        assert_eq!(store.find("E1").unwrap().name, "Ann");
    }

    #[test]
    fn update_replaces_fields_and_preserves_position() {
        let mut store = StoreFixture::new().with_employees(3).store;
        store
            .update("E2", EmployeeFields::new("Renamed", "9 Elm Rd").unwrap())
            .unwrap();

        let found = store.find("E2").unwrap();
        assert_eq!(found.id, "E2");
        assert_eq!(found.name, "Renamed");
        assert_eq!(found.address, "9 Elm Rd");

        let ids: Vec<_> = store.records().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["E1", "E2", "E3"]);
    }

    #[test]
    fn update_missing_id_leaves_store_untouched() {
        let mut store = StoreFixture::new().with_employees(2).store;
        let before = store.records().to_vec();
        assert!(matches!(
            store.update("E9", EmployeeFields::new("X", "Y").unwrap()),
            Err(DirectoryError::NotFound(id)) if id == "E9"
        ));
        assert_eq!(store.records(), &before[..]);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let mut store = StoreFixture::new().with_employees(3).store;
        let removed = store.delete("E2").unwrap();
        assert_eq!(removed.id, "E2");
        assert_eq!(store.count(), 2);
        assert!(store.find("E2").is_none());

        let ids: Vec<_> = store.records().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["E1", "E3"]);
    }

    #[test]
    fn delete_missing_id_leaves_store_untouched() {
        let mut store = StoreFixture::new().with_employees(2).store;
        let before = store.records().to_vec();
        assert!(matches!(
            store.delete("E9"),
            Err(DirectoryError::NotFound(id)) if id == "E9"
        ));
        assert_eq!(store.records(), &before[..]);
    }
}
