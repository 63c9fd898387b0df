use chrono::{Months, NaiveDate};

use super::follow;
use crate::error::{KinError, KinResult};
use crate::model::{Gender, Person, PersonDetails, PersonId, PersonSummary};
use crate::store::{PersonRepository, PersonStore};

/// Everyone, newest first.
pub fn all_people<R: PersonRepository + ?Sized>(repo: &R) -> KinResult<Vec<Person>> {
    let mut people = repo.find_all()?;
    people.reverse();
    Ok(people)
}

pub fn get_person<S: PersonStore + ?Sized>(store: &S, id: PersonId) -> KinResult<Option<Person>> {
    store.find_by_id(id)
}

/// A person with father, mother and spouse resolved to summaries.
pub fn get_person_details<S: PersonStore + ?Sized>(
    store: &S,
    id: PersonId,
) -> KinResult<Option<PersonDetails>> {
    let Some(person) = store.find_by_id(id)? else {
        return Ok(None);
    };
    let summary = |id| follow(store, id).map(|p| p.as_ref().map(PersonSummary::from));

    Ok(Some(PersonDetails {
        father: summary(person.father)?,
        mother: summary(person.mother)?,
        spouse: summary(person.spouse)?,
        id: person.id,
        name: person.name,
        gender: person.gender,
        birth_date: person.birth_date,
        death_date: person.death_date,
        photo: person.photo,
        biography: person.biography,
    }))
}

/// Men born 10 to 35 years before `birth_date`.
pub fn father_candidates<R: PersonRepository + ?Sized>(
    repo: &R,
    birth_date: NaiveDate,
) -> KinResult<Vec<Person>> {
    let window = (years_from(birth_date, -35)?, years_from(birth_date, -10)?);
    born_within(repo, window, Gender::Male)
}

/// Women born 10 to 40 years before `birth_date`.
pub fn mother_candidates<R: PersonRepository + ?Sized>(
    repo: &R,
    birth_date: NaiveDate,
) -> KinResult<Vec<Person>> {
    let window = (years_from(birth_date, -40)?, years_from(birth_date, -10)?);
    born_within(repo, window, Gender::Female)
}

/// People of the opposite gender born within ten years either side of
/// `birth_date`. For `Other`, men are proposed.
pub fn spouse_candidates<R: PersonRepository + ?Sized>(
    repo: &R,
    birth_date: NaiveDate,
    gender: Gender,
) -> KinResult<Vec<Person>> {
    let wanted = match gender {
        Gender::Male => Gender::Female,
        Gender::Female | Gender::Other => Gender::Male,
    };
    let window = (years_from(birth_date, -10)?, years_from(birth_date, 10)?);
    born_within(repo, window, wanted)
}

fn born_within<R: PersonRepository + ?Sized>(
    repo: &R,
    (start, end): (NaiveDate, NaiveDate),
    gender: Gender,
) -> KinResult<Vec<Person>> {
    Ok(all_people(repo)?
        .into_iter()
        .filter(|p| p.gender == gender)
        .filter(|p| p.birth_date.is_some_and(|d| d >= start && d <= end))
        .collect())
}

fn years_from(date: NaiveDate, years: i32) -> KinResult<NaiveDate> {
    let months = Months::new(years.unsigned_abs() * 12);
    let shifted = if years < 0 {
        date.checked_sub_months(months)
    } else {
        date.checked_add_months(months)
    };
    shifted.ok_or_else(|| KinError::InvalidDate {
        value: format!("{} {:+} years", date, years),
    })
}
