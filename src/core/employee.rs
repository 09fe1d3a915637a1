use crate::db::repository::Repository;
use crate::errors::AppResult;
use crate::models::employee::{Employee, EmployeeInput};
use crate::models::form::{FieldErrors, FormOutcome};
use crate::models::status::Status;

pub const CPF_LENGTH: usize = 11;

pub const MSG_CPF_LENGTH: &str = "CPF must contain exactly 11 digits.";
pub const MSG_CPF_DUPLICATE: &str = "This CPF already exists.";

/// Outcome of a CPF check: `Valid` or the reason it was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CpfCheck {
    Valid,
    Invalid(&'static str),
}

impl CpfCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, CpfCheck::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            CpfCheck::Valid => None,
            CpfCheck::Invalid(m) => Some(m),
        }
    }
}

/// High-level business logic for employees.
pub struct EmployeeLogic;

impl EmployeeLogic {
    /// All employees, in store order.
    pub fn list<R: Repository<Employee>>(store: &R) -> AppResult<Vec<Employee>> {
        store.all()
    }

    /// The CPF must be exactly 11 characters long and not already used by
    /// another employee. `exclude` names the employee being edited, whose
    /// own CPF does not count as a duplicate.
    pub fn validate_cpf<R: Repository<Employee>>(
        store: &R,
        cpf: &str,
        exclude: Option<i32>,
    ) -> AppResult<CpfCheck> {
        if cpf.chars().count() != CPF_LENGTH {
            return Ok(CpfCheck::Invalid(MSG_CPF_LENGTH));
        }

        let taken = store
            .all()?
            .iter()
            .any(|e| e.cpf == cpf && Some(e.id) != exclude);

        if taken {
            return Ok(CpfCheck::Invalid(MSG_CPF_DUPLICATE));
        }

        Ok(CpfCheck::Valid)
    }

    /// Validate and store a new employee.
    ///
    /// On a CPF failure the input is handed back untouched and nothing is
    /// written. On success the employee starts Active and stamped now.
    pub fn create<R: Repository<Employee>>(
        store: &mut R,
        input: EmployeeInput,
    ) -> AppResult<FormOutcome<Employee, EmployeeInput>> {
        let mut errors = FieldErrors::new();

        if let CpfCheck::Invalid(msg) = Self::validate_cpf(store, &input.cpf, None)? {
            errors.add("cpf", msg);
        }

        if !errors.is_empty() {
            return Ok(FormOutcome::Rejected { input, errors });
        }

        let mut employee = Employee::new(input.name, input.cpf);
        store.add(&mut employee)?;

        Ok(FormOutcome::Accepted(employee))
    }

    /// Lookup used before editing; absence is `EmployeeNotFound`.
    pub fn find<R: Repository<Employee>>(store: &R, id: i32) -> AppResult<Employee> {
        store.get(id)
    }

    /// Overwrite only the status and stamp `updated_at`.
    pub fn update_status<R: Repository<Employee>>(
        store: &mut R,
        id: i32,
        status: Status,
    ) -> AppResult<Employee> {
        let mut employee = store.get(id)?;

        employee.set_status(status);
        store.save(&employee)?;

        Ok(employee)
    }
}
