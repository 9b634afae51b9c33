//! In-memory employee storage. In a real deployment this is where a
//! database pool would live.

use entity::employees::{Model as Employee, NewEmployee};
use parking_lot::Mutex;

/// Process-lifetime collection of employees.
///
/// One exclusive lock guards the whole collection. Ids are derived from the
/// current size, so the size read, the id derivation, and the append must be
/// a single critical section; every public operation takes the same lock and
/// no operation observes a partial effect of another. Records are appended
/// or overwritten in place, never removed.
pub struct EmployeeStore {
    employees: Mutex<Vec<Employee>>,
}

impl EmployeeStore {
    /// An empty store.
    pub fn empty() -> Self {
        Self {
            employees: Mutex::new(Vec::new()),
        }
    }

    /// A store pre-populated with the three fixture records.
    pub fn seeded() -> Self {
        let fixture = |id: &str, name: &str, salary: i64| Employee {
            id: id.into(),
            name: name.into(),
            salary,
        };
        Self {
            employees: Mutex::new(vec![
                fixture("ID1", "First Employee", 1000),
                fixture("ID2", "Second Employee", 2000),
                fixture("ID3", "Third Employee", 3000),
            ]),
        }
    }

    /// Snapshot of all employees in insertion order.
    pub fn find_all(&self) -> Vec<Employee> {
        self.employees.lock().clone()
    }

    /// Linear scan by exact id; first match in insertion order.
    pub fn find_one(&self, id: &str) -> Option<Employee> {
        self.employees
            .lock()
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
    }

    /// Assigns the next id and appends the record, returning it as stored.
    pub fn save(&self, new: NewEmployee) -> Employee {
        let mut employees = self.employees.lock();
        let employee = Employee {
            // dumb counter-based id; derived and appended under one lock
            id: format!("ID{}", employees.len() + 1),
            name: new.name,
            salary: new.salary,
        };
        employees.push(employee.clone());
        employee
    }

    /// Overwrites the record with the given id in place, keeping the id.
    /// Returns `None` when no record has that id.
    pub fn replace(&self, id: &str, new: NewEmployee) -> Option<Employee> {
        let mut employees = self.employees.lock();
        let slot = employees.iter_mut().find(|employee| employee.id == id)?;
        slot.name = new.name;
        slot.salary = new.salary;
        Some(slot.clone())
    }

    /// Number of stored employees.
    pub fn count(&self) -> usize {
        self.employees.lock().len()
    }
}
