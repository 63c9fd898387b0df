use log::debug;

use super::uncle_aunt_queries::parent_siblings;
use crate::error::KinResult;
use crate::model::{Person, PersonId};
use crate::store::{PersonStore, Predicate};

/// Children of the parents' siblings on either side. Only blood uncles and
/// aunts count as parents here; their spouses are not consulted. No gender
/// split and no deduplication.
pub fn cousins<S: PersonStore + ?Sized>(store: &S, subject: &Person) -> KinResult<Vec<Person>> {
    let mut parents = sibling_ids(store, subject.father)?;
    parents.extend(sibling_ids(store, subject.mother)?);

    if parents.is_empty() {
        return Ok(Vec::new());
    }
    let cousins = store.find_where(&Predicate::child_of_any(&parents))?;

    debug!(
        "cousins of {}: {} through {} uncle/aunt id(s)",
        subject.id,
        cousins.len(),
        parents.len()
    );
    Ok(cousins)
}

fn sibling_ids<S: PersonStore + ?Sized>(
    store: &S,
    parent_id: Option<PersonId>,
) -> KinResult<Vec<PersonId>> {
    let predicate = parent_siblings(store, parent_id)?;
    if predicate.is_never() {
        return Ok(Vec::new());
    }
    Ok(store
        .find_where(&predicate)?
        .into_iter()
        .map(|p| p.id)
        .collect())
}
