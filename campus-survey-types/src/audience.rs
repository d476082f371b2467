use serde::{Deserialize, Serialize};

use crate::respondent::{DepartmentId, Gender, Respondent};

/// Who a survey is aimed at.
///
/// Unset or empty fields mean "no restriction", so the default value
/// admits everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAudience {
    /// Gender the survey is restricted to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,

    /// Academic years allowed to answer. Empty means any year.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    academic_years: Vec<u8>,

    /// Departments allowed to answer. Empty means any department.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    departments: Vec<DepartmentId>,
}

impl TargetAudience {
    /// An audience with no restrictions.
    pub fn everyone() -> Self {
        Self::default()
    }

    /// Restrict to one gender.
    pub fn for_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Restrict to the given academic years.
    pub fn for_academic_years(mut self, years: impl Into<Vec<u8>>) -> Self {
        self.academic_years = years.into();
        self
    }

    /// Restrict to the given departments.
    pub fn for_departments(mut self, departments: impl Into<Vec<DepartmentId>>) -> Self {
        self.departments = departments.into();
        self
    }

    /// Get the gender restriction.
    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Get the academic year restriction.
    pub fn academic_years(&self) -> &[u8] {
        &self.academic_years
    }

    /// Get the department restriction.
    pub fn departments(&self) -> &[DepartmentId] {
        &self.departments
    }

    /// Whether the respondent may see and answer the survey.
    ///
    /// Every restriction must pass; an unset restriction always passes.
    pub fn admits(&self, respondent: &Respondent) -> bool {
        let gender_ok = self.gender.is_none_or(|gender| gender == respondent.gender());
        let year_ok = self.academic_years.is_empty()
            || self.academic_years.contains(&respondent.academic_year());
        let department_ok =
            self.departments.is_empty() || self.departments.contains(&respondent.department_id());
        gender_ok && year_ok && department_ok
    }
}
