use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a stored employee (epoch milliseconds at creation time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

impl EmployeeId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(EmployeeId)
    }
}

/// A single employee entry as persisted in the directory
///
/// Field names serialize in camelCase so stored collections keep the shape the
/// browser has always written to `localStorage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredEmployee")]
pub struct Employee {
    /// `None` until the record is first persisted
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Digits only
    pub phone: String,
    pub department: String,
    pub position: String,
    /// ISO 8601 date (YYYY-MM-DD) as produced by the date input
    pub employment_date: String,
    /// ISO 8601 date (YYYY-MM-DD) as produced by the date input
    pub date_of_birth: String,
}

/// Stored shape of an [`Employee`]. Older records carry `phoneNumber` and may
/// also carry `phone`; a non-empty `phone` wins.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredEmployee {
    id: Option<EmployeeId>,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    phone_number: Option<String>,
    department: String,
    position: String,
    employment_date: String,
    date_of_birth: String,
}

impl From<StoredEmployee> for Employee {
    fn from(stored: StoredEmployee) -> Self {
        let phone = match (stored.phone, stored.phone_number) {
            (Some(phone), _) if !phone.is_empty() => phone,
            (_, Some(legacy)) => legacy,
            (phone, None) => phone.unwrap_or_default(),
        };

        Self {
            id: stored.id,
            first_name: stored.first_name,
            last_name: stored.last_name,
            email: stored.email,
            phone,
            department: stored.department,
            position: stored.position,
            employment_date: stored.employment_date,
            date_of_birth: stored.date_of_birth,
        }
    }
}

impl Employee {
    /// Text matched by the search box, case-folded
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.first_name, self.last_name, self.department, self.position
        )
        .to_lowercase()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Departments offered by the employee form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Tech,
    Analytics,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Tech, Department::Analytics];

    /// Value stored on the record
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Tech => "Tech",
            Department::Analytics => "Analytics",
        }
    }
}

/// Positions offered by the employee form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    /// Value stored on the record
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Junior => "Junior",
            Position::Medior => "Medior",
            Position::Senior => "Senior",
        }
    }
}

/// The editable fields of an employee record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmployeeField {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    EmploymentDate,
    DateOfBirth,
}

impl EmployeeField {
    pub const COUNT: usize = 8;

    /// Form order
    pub const ALL: [EmployeeField; Self::COUNT] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Email,
        EmployeeField::Phone,
        EmployeeField::Department,
        EmployeeField::Position,
        EmployeeField::EmploymentDate,
        EmployeeField::DateOfBirth,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Element id used by the form input for this field
    pub fn input_id(self) -> &'static str {
        match self {
            EmployeeField::FirstName => "firstName",
            EmployeeField::LastName => "lastName",
            EmployeeField::Email => "email",
            EmployeeField::Phone => "phone",
            EmployeeField::Department => "department",
            EmployeeField::Position => "position",
            EmployeeField::EmploymentDate => "employmentDate",
            EmployeeField::DateOfBirth => "dateOfBirth",
        }
    }

    pub fn value_of(self, employee: &Employee) -> &str {
        match self {
            EmployeeField::FirstName => &employee.first_name,
            EmployeeField::LastName => &employee.last_name,
            EmployeeField::Email => &employee.email,
            EmployeeField::Phone => &employee.phone,
            EmployeeField::Department => &employee.department,
            EmployeeField::Position => &employee.position,
            EmployeeField::EmploymentDate => &employee.employment_date,
            EmployeeField::DateOfBirth => &employee.date_of_birth,
        }
    }

    pub fn set_on(self, employee: &mut Employee, value: String) {
        let slot = match self {
            EmployeeField::FirstName => &mut employee.first_name,
            EmployeeField::LastName => &mut employee.last_name,
            EmployeeField::Email => &mut employee.email,
            EmployeeField::Phone => &mut employee.phone,
            EmployeeField::Department => &mut employee.department,
            EmployeeField::Position => &mut employee.position,
            EmployeeField::EmploymentDate => &mut employee.employment_date,
            EmployeeField::DateOfBirth => &mut employee.date_of_birth,
        };
        *slot = value;
    }
}
