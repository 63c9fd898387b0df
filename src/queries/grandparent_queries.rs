use super::follow;
use crate::error::KinResult;
use crate::model::{GrandparentPair, Grandparents, Person, PersonId};
use crate::store::PersonStore;

/// Both sides' grandparents. Slots are positional: whoever is recorded as
/// `father.father` is the paternal grandfather, whatever their gender.
pub fn grandparents<S: PersonStore + ?Sized>(
    store: &S,
    subject: &Person,
) -> KinResult<Grandparents> {
    Ok(Grandparents {
        paternal: side(store, subject.father)?,
        maternal: side(store, subject.mother)?,
    })
}

fn side<S: PersonStore + ?Sized>(
    store: &S,
    parent_id: Option<PersonId>,
) -> KinResult<GrandparentPair> {
    let Some(parent) = follow(store, parent_id)? else {
        return Ok(GrandparentPair::default());
    };

    Ok(GrandparentPair {
        grandfather: follow(store, parent.father)?,
        grandmother: follow(store, parent.mother)?,
    })
}
