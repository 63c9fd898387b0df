use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::person::{Gender, Person, PersonId, PersonSummary};
use super::relations::{BySide, Grandparents};

/// Aggregate kinship view of one person. Field names and nesting are the
/// JSON contract served to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub me: Me,
    pub relations: Relations,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    #[serde(rename = "_id")]
    pub id: PersonId,
    pub name: String,
    pub gender: Gender,
    pub photo: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub biography: Option<String>,
}

impl From<&Person> for Me {
    fn from(p: &Person) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            gender: p.gender,
            photo: p.photo.clone(),
            birth_date: p.birth_date,
            death_date: p.death_date,
            biography: p.biography.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relations {
    pub father: Option<PersonSummary>,
    pub mother: Option<PersonSummary>,
    pub spouse: Option<PersonSummary>,
    pub brothers: Vec<PersonSummary>,
    pub sisters: Vec<PersonSummary>,
    pub sons: Vec<PersonSummary>,
    pub daughters: Vec<PersonSummary>,
    pub grandparents: Grandparents<PersonSummary>,
    pub uncles: BySide<PersonSummary>,
    pub aunts: BySide<PersonSummary>,
    pub cousins: Vec<PersonSummary>,
}
