use serde::{Deserialize, Serialize};

/// Identifier of a respondent.
pub type RespondentId = u32;

/// Identifier of a department.
pub type DepartmentId = u32;

/// Self-declared gender of a respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    Other,
}

/// The demographic attributes a survey's targeting rules are checked
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    id: RespondentId,

    gender: Gender,

    /// Academic year, counted from 1.
    academic_year: u8,

    department_id: DepartmentId,
}

impl Respondent {
    /// Create a new respondent profile.
    pub fn new(
        id: RespondentId,
        gender: Gender,
        academic_year: u8,
        department_id: DepartmentId,
    ) -> Self {
        Self {
            id,
            gender,
            academic_year,
            department_id,
        }
    }

    /// Get the respondent id.
    pub fn id(&self) -> RespondentId {
        self.id
    }

    /// Get the gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Get the academic year.
    pub fn academic_year(&self) -> u8 {
        self.academic_year
    }

    /// Get the department id.
    pub fn department_id(&self) -> DepartmentId {
        self.department_id
    }
}
