use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::Id;

pub type PersonId = Id<Person>;

/// Closed gender set. Only `Male` and `Female` take part in gendered
/// classification (brother/sister, uncle/aunt).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Case-insensitive parse of the stored/wire form.
    pub fn parse(s: &str) -> Option<Gender> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" | "o" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the family graph. `father`, `mother` and `spouse` are weak
/// references: the referenced record may be missing, and `spouse` is not
/// guaranteed to point back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "_id")]
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub photo: Option<String>,
    pub biography: Option<String>,
    pub father: Option<PersonId>,
    pub mother: Option<PersonId>,
    pub spouse: Option<PersonId>,
}

impl Person {
    pub fn create(name: String, gender: Gender) -> Self {
        Self {
            id: Id::generate(),
            name,
            gender,
            birth_date: None,
            death_date: None,
            photo: None,
            biography: None,
            father: None,
            mother: None,
            spouse: None,
        }
    }

    pub fn summary(&self) -> PersonSummary {
        PersonSummary::from(self)
    }
}

/// The reduced view used inside relation lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    #[serde(rename = "_id")]
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub photo: Option<String>,
}

impl From<&Person> for PersonSummary {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            gender: p.gender,
            photo: p.photo.clone(),
        }
    }
}

/// A person with its direct edges resolved to summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetails {
    #[serde(rename = "_id")]
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub photo: Option<String>,
    pub biography: Option<String>,
    pub father: Option<PersonSummary>,
    pub mother: Option<PersonSummary>,
    pub spouse: Option<PersonSummary>,
}
