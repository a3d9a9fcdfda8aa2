use chrono::{NaiveDate, NaiveTime};

/// Earliest birth year the form accepts.
pub const EARLIEST_BIRTH_YEAR: i32 = 1900;

/// Personal details collected by the form. Built only after the submit
/// checks pass, read once to build the prompt, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub time_of_birth: NaiveTime,
    pub gender: Gender,
    pub state: String,
    pub city: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Exact string sent in the prompt and shown in the selector.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Male
    }
}
