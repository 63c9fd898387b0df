use log::debug;

use super::follow;
use crate::error::KinResult;
use crate::model::{BySide, Gender, Person, PersonId, UnclesAndAunts};
use crate::store::{PersonStore, Predicate};

/// Uncles and aunts on both sides, by blood and by marriage.
///
/// For each sibling of a parent: a brother is an uncle and his wife an aunt;
/// a sister is an aunt and her husband an uncle. Siblings of gender `Other`
/// are skipped along with their spouse. A spouse of the "wrong" gender for
/// the pairing (e.g. a brother's husband) is not listed. Each side is
/// resolved on its own; nothing is deduplicated across sides.
pub fn uncles_and_aunts<S: PersonStore + ?Sized>(
    store: &S,
    subject: &Person,
) -> KinResult<UnclesAndAunts> {
    let (paternal_uncles, paternal_aunts) = side(store, subject.father)?;
    let (maternal_uncles, maternal_aunts) = side(store, subject.mother)?;

    Ok(UnclesAndAunts {
        uncles: BySide {
            paternal: paternal_uncles,
            maternal: maternal_uncles,
        },
        aunts: BySide {
            paternal: paternal_aunts,
            maternal: maternal_aunts,
        },
    })
}

/// Filter selecting the siblings of the person `parent_id` points at.
/// `Never` when the edge is unset, the record is missing, or the parent has
/// no parents of its own.
pub(crate) fn parent_siblings<S: PersonStore + ?Sized>(
    store: &S,
    parent_id: Option<PersonId>,
) -> KinResult<Predicate> {
    let Some(parent) = follow(store, parent_id)? else {
        return Ok(Predicate::Never);
    };
    Ok(Predicate::shares_parent(parent.father, parent.mother).except(parent.id))
}

fn side<S: PersonStore + ?Sized>(
    store: &S,
    parent_id: Option<PersonId>,
) -> KinResult<(Vec<Person>, Vec<Person>)> {
    let predicate = parent_siblings(store, parent_id)?;
    if predicate.is_never() {
        return Ok((Vec::new(), Vec::new()));
    }

    let mut uncles = Vec::new();
    let mut aunts = Vec::new();

    for (sibling, spouse) in store.find_where_with_spouse(&predicate)? {
        match sibling.gender {
            Gender::Male => {
                uncles.push(sibling);
                if let Some(wife) = spouse.filter(|s| s.gender == Gender::Female) {
                    aunts.push(wife);
                }
            }
            Gender::Female => {
                aunts.push(sibling);
                if let Some(husband) = spouse.filter(|s| s.gender == Gender::Male) {
                    uncles.push(husband);
                }
            }
            Gender::Other => {}
        }
    }

    if let Some(id) = parent_id {
        debug!(
            "siblings of parent {}: {} uncle(s), {} aunt(s)",
            id,
            uncles.len(),
            aunts.len()
        );
    }
    Ok((uncles, aunts))
}
