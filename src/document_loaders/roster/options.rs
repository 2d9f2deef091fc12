use serde::{Deserialize, Serialize};

/// Header names the roster builder looks up by name. Any other column is
/// still rendered in the per-employee detail block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterColumns {
    pub department: String,
    pub full_name: String,
    pub position: String,
    pub employee_id: String,
    pub age: String,
}

impl Default for RosterColumns {
    fn default() -> Self {
        Self {
            department: "部署".into(),
            full_name: "氏名（フルネーム）".into(),
            position: "役職".into(),
            employee_id: "社員ID".into(),
            age: "年齢".into(),
        }
    }
}

impl RosterColumns {
    pub fn with_department(mut self, column: impl Into<String>) -> Self {
        self.department = column.into();
        self
    }

    pub fn with_full_name(mut self, column: impl Into<String>) -> Self {
        self.full_name = column.into();
        self
    }

    pub fn with_position(mut self, column: impl Into<String>) -> Self {
        self.position = column.into();
        self
    }

    pub fn with_employee_id(mut self, column: impl Into<String>) -> Self {
        self.employee_id = column.into();
        self
    }

    pub fn with_age(mut self, column: impl Into<String>) -> Self {
        self.age = column.into();
        self
    }
}

/// How much search padding goes into each department document.
///
/// `Extended` adds a department-specific keyword block and the age column to
/// the numbered roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Standard,
    #[default]
    Extended,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterOptions {
    pub columns: RosterColumns,
    pub verbosity: Verbosity,
}

impl RosterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(mut self, columns: RosterColumns) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}
