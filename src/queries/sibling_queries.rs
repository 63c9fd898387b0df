use log::debug;

use super::split_by_gender;
use crate::error::KinResult;
use crate::model::{Person, Siblings};
use crate::store::{PersonStore, Predicate};

/// Everyone sharing the subject's father or mother, split into brothers and
/// sisters. Half-siblings count. With no parent recorded there is nobody to
/// share one with, and the store is not consulted.
pub fn siblings<S: PersonStore + ?Sized>(store: &S, subject: &Person) -> KinResult<Siblings> {
    let predicate = Predicate::shares_parent(subject.father, subject.mother);
    if predicate.is_never() {
        return Ok(Siblings::default());
    }

    let matches = store.find_where(&predicate.except(subject.id))?;
    let (brothers, sisters) = split_by_gender(matches);

    debug!(
        "siblings of {}: {} brother(s), {} sister(s)",
        subject.id,
        brothers.len(),
        sisters.len()
    );
    Ok(Siblings { brothers, sisters })
}
