use chrono::NaiveDate;
use log::{info, warn};

use crate::error::{KinError, KinResult};
use crate::model::{Gender, Person, PersonId};
use crate::store::PersonRepository;
use crate::validation::{self, trim_optional};

/// Input for a new person. Relation edges must point at existing records.
#[derive(Debug, Clone)]
pub struct NewPerson {
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

impl NewPerson {
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self {
            name: name.into(),
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
}

/// Partial update. `None` leaves a field alone; `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct PersonChanges {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub death_date: Option<Option<NaiveDate>>,
    pub photo: Option<Option<String>>,
    pub biography: Option<Option<String>>,
    pub father: Option<Option<PersonId>>,
    pub mother: Option<Option<PersonId>>,
    pub spouse: Option<Option<PersonId>>,
}

pub fn add_person<R: PersonRepository + ?Sized>(repo: &R, input: NewPerson) -> KinResult<Person> {
    let valid_name = validation::non_blank(&input.name, "name")?;
    validation::dates_in_order(input.birth_date, input.death_date)?;

    require_existing(repo, input.father)?;
    require_existing(repo, input.mother)?;
    require_existing(repo, input.spouse)?;

    let mut person = Person::create(valid_name, input.gender);
    person.birth_date = input.birth_date;
    person.death_date = input.death_date;
    person.photo = trim_optional(input.photo.as_deref());
    person.biography = trim_optional(input.biography.as_deref());
    person.father = input.father;
    person.mother = input.mother;
    person.spouse = input.spouse;

    repo.insert(&person)?;
    info!("added person {} ({})", person.id, person.name);

    if let Some(spouse_id) = person.spouse {
        link_back(repo, spouse_id, person.id);
    }

    Ok(person)
}

pub fn update_person<R: PersonRepository + ?Sized>(
    repo: &R,
    person_id: PersonId,
    changes: PersonChanges,
) -> KinResult<Person> {
    let person = repo
        .find_by_id(person_id)?
        .ok_or_else(|| KinError::person_not_found(person_id))?;

    let previous_spouse = person.spouse;
    let mut updated = person;

    if let Some(n) = changes.name {
        updated.name = validation::non_blank(&n, "name")?;
    }
    if let Some(g) = changes.gender {
        updated.gender = g;
    }
    if let Some(bd) = changes.birth_date {
        updated.birth_date = bd;
    }
    if let Some(dd) = changes.death_date {
        updated.death_date = dd;
    }
    if let Some(photo) = changes.photo {
        updated.photo = trim_optional(photo.as_deref());
    }
    if let Some(bio) = changes.biography {
        updated.biography = trim_optional(bio.as_deref());
    }
    if let Some(father) = changes.father {
        validation::not_self(person_id, father, "father")?;
        require_existing(repo, father)?;
        updated.father = father;
    }
    if let Some(mother) = changes.mother {
        validation::not_self(person_id, mother, "mother")?;
        require_existing(repo, mother)?;
        updated.mother = mother;
    }
    if let Some(spouse) = changes.spouse {
        validation::not_self(person_id, spouse, "spouse")?;
        require_existing(repo, spouse)?;
        updated.spouse = spouse;
    }

    validation::dates_in_order(updated.birth_date, updated.death_date)?;

    repo.update(&updated)?;
    info!("updated person {}", updated.id);

    if let Some(spouse_id) = updated.spouse.filter(|id| Some(*id) != previous_spouse) {
        link_back(repo, spouse_id, updated.id);
    }

    Ok(updated)
}

/// Remove a person. Edges pointing at it from other records are left as
/// they are.
pub fn delete_person<R: PersonRepository + ?Sized>(
    repo: &R,
    person_id: PersonId,
) -> KinResult<Person> {
    let person = repo
        .find_by_id(person_id)?
        .ok_or_else(|| KinError::person_not_found(person_id))?;

    if !repo.delete(person_id)? {
        return Err(KinError::person_not_found(person_id));
    }
    info!("deleted person {} ({})", person.id, person.name);
    Ok(person)
}

fn require_existing<R: PersonRepository + ?Sized>(
    repo: &R,
    id: Option<PersonId>,
) -> KinResult<()> {
    match id {
        Some(id) if repo.find_by_id(id)?.is_none() => Err(KinError::person_not_found(id)),
        _ => Ok(()),
    }
}

/// Best effort: point `spouse_id`'s spouse edge at `person_id`. Failures are
/// logged and swallowed.
fn link_back<R: PersonRepository + ?Sized>(repo: &R, spouse_id: PersonId, person_id: PersonId) {
    let result = repo.find_by_id(spouse_id).and_then(|spouse| match spouse {
        Some(mut spouse) if spouse.spouse != Some(person_id) => {
            spouse.spouse = Some(person_id);
            repo.update(&spouse)
        }
        _ => Ok(()),
    });

    if let Err(e) = result {
        warn!(
            "could not link spouse {} back to {}: {}",
            spouse_id, person_id, e
        );
    }
}
