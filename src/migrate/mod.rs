use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use log::{info, warn};
use serde_json::Value;

use crate::error::{KinError, KinResult};
use crate::model::{Gender, Person, PersonId};
use crate::store::{PersonRepository, SqlitePersonStore};
use crate::validation;

/// Imports a JSON export of person documents into a SQLite database.
pub fn import_json(json_path: &Path, db_path: &Path) -> KinResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let json: Value = serde_json::from_str(&json_str)?;

    let store = SqlitePersonStore::open(db_path)?;
    import_people(&store, &json)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub people: usize,
    pub parent_links: usize,
    pub spouse_links: usize,
    /// Edges whose target was not part of the export.
    pub dangling: usize,
}

struct Pending {
    person: Person,
    father: Option<String>,
    mother: Option<String>,
    spouse: Option<String>,
}

/// Accepts either a bare array of documents or `{ "users": [...] }`.
///
/// Document keys are arbitrary strings and are replaced by fresh ids; the
/// edges are rewritten in a second pass so documents may reference ones that
/// come later in the file.
pub fn import_people<R: PersonRepository + ?Sized>(repo: &R, json: &Value) -> KinResult<ImportStats> {
    let docs = match json {
        Value::Array(docs) => docs,
        Value::Object(obj) => obj
            .get("users")
            .and_then(Value::as_array)
            .ok_or_else(|| KinError::Other("Expected an array of users".into()))?,
        _ => return Err(KinError::Other("Expected an array of users".into())),
    };

    let mut keys: HashMap<String, PersonId> = HashMap::new();
    let mut pending = Vec::with_capacity(docs.len());

    for doc in docs {
        let key = reference(&doc["_id"])
            .ok_or_else(|| KinError::Other("Document without _id".into()))?;
        let person = parse_person(doc)?;

        repo.insert(&person)?;
        keys.insert(key, person.id);
        pending.push(Pending {
            person,
            father: reference(&doc["father"]),
            mother: reference(&doc["mother"]),
            spouse: reference(&doc["spouse"]),
        });
    }

    let mut stats = ImportStats {
        people: pending.len(),
        ..ImportStats::default()
    };

    for Pending {
        mut person,
        father,
        mother,
        spouse,
    } in pending
    {
        let mut resolve = |key: Option<String>, field: &str| {
            let key = key?;
            let id = keys.get(&key).copied();
            if id.is_none() {
                warn!("{} of {} refers to unknown document {}", field, person.name, key);
                stats.dangling += 1;
            }
            id
        };

        person.father = resolve(father, "father");
        person.mother = resolve(mother, "mother");
        person.spouse = resolve(spouse, "spouse");

        let parents = usize::from(person.father.is_some()) + usize::from(person.mother.is_some());
        stats.parent_links += parents;
        stats.spouse_links += usize::from(person.spouse.is_some());

        if parents > 0 || person.spouse.is_some() {
            repo.update(&person)?;
        }
    }

    info!(
        "imported {} people ({} parent links, {} spouse links, {} dangling)",
        stats.people, stats.parent_links, stats.spouse_links, stats.dangling
    );
    Ok(stats)
}

fn parse_person(doc: &Value) -> KinResult<Person> {
    let name = validation::non_blank(doc["name"].as_str().unwrap_or(""), "name")?;
    let gender_str = doc["gender"].as_str().unwrap_or("");
    let gender = Gender::parse(gender_str)
        .ok_or_else(|| KinError::Other(format!("Invalid gender '{}' for {}", gender_str, name)))?;

    let mut person = Person::create(name, gender);
    person.birth_date = date(&doc["birthDate"])?;
    person.death_date = date(&doc["deathDate"])?;
    person.photo = validation::trim_optional(doc["photo"].as_str());
    person.biography = validation::trim_optional(doc["biography"].as_str());
    validation::dates_in_order(person.birth_date, person.death_date)?;
    Ok(person)
}

/// A document key: a plain string or an extended-JSON `{"$oid": ...}`.
fn reference(val: &Value) -> Option<String> {
    match val {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Object(obj) => obj.get("$oid").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// A document date: an ISO string, epoch milliseconds, or extended JSON
/// `{"$date": ...}` wrapping either (relaxed form for pre-1970 dates nests
/// `{"$numberLong": "<ms>"}`). Absent or `null` is no date; any other shape
/// is rejected rather than dropped.
fn date(val: &Value) -> KinResult<Option<NaiveDate>> {
    match val {
        Value::Null => Ok(None),
        Value::String(s) => validation::parse_date(s).map(Some),
        Value::Number(n) => n.as_i64().map_or_else(|| Err(invalid_date(val)), from_millis),
        Value::Object(obj) => match obj.get("$date") {
            Some(Value::Object(inner)) => inner
                .get("$numberLong")
                .and_then(Value::as_str)
                .and_then(|ms| ms.parse::<i64>().ok())
                .map_or_else(|| Err(invalid_date(val)), from_millis),
            Some(Value::Null) | None => Err(invalid_date(val)),
            Some(inner) => date(inner),
        },
        _ => Err(invalid_date(val)),
    }
}

fn from_millis(ms: i64) -> KinResult<Option<NaiveDate>> {
    DateTime::from_timestamp_millis(ms)
        .map(|d| Some(d.date_naive()))
        .ok_or_else(|| KinError::InvalidDate {
            value: ms.to_string(),
        })
}

fn invalid_date(val: &Value) -> KinError {
    KinError::InvalidDate {
        value: val.to_string(),
    }
}
