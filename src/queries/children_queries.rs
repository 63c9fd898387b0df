use log::debug;

use super::split_by_gender;
use crate::error::KinResult;
use crate::model::{Children, Person};
use crate::store::{PersonStore, Predicate};

pub fn children<S: PersonStore + ?Sized>(store: &S, subject: &Person) -> KinResult<Children> {
    let matches = store.find_where(&Predicate::child_of(subject.id))?;
    let (sons, daughters) = split_by_gender(matches);

    debug!(
        "children of {}: {} son(s), {} daughter(s)",
        subject.id,
        sons.len(),
        daughters.len()
    );
    Ok(Children { sons, daughters })
}
