//! Read-side kinship queries over a [`PersonStore`](crate::store::PersonStore).
//!
//! Every query only reads; none depends on another's result, which is what
//! lets [`profile_queries`] run them in parallel.

pub mod children_queries;
pub mod cousin_queries;
pub mod grandparent_queries;
pub mod person_queries;
pub mod profile_queries;
pub mod sibling_queries;
pub mod uncle_aunt_queries;

use crate::error::KinResult;
use crate::model::{Gender, Person, PersonId};
use crate::store::PersonStore;

/// Follow an optional edge. A missing referent is `None`, not an error.
pub(crate) fn follow<S: PersonStore + ?Sized>(
    store: &S,
    id: Option<PersonId>,
) -> KinResult<Option<Person>> {
    match id {
        Some(id) => store.find_by_id(id),
        None => Ok(None),
    }
}

/// Split into (male, female), keeping order. `Other` lands in neither.
pub(crate) fn split_by_gender(people: Vec<Person>) -> (Vec<Person>, Vec<Person>) {
    let mut males = Vec::new();
    let mut females = Vec::new();
    for person in people {
        match person.gender {
            Gender::Male => males.push(person),
            Gender::Female => females.push(person),
            Gender::Other => {}
        }
    }
    (males, females)
}
