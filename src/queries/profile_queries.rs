use log::debug;

use super::children_queries::children;
use super::cousin_queries::cousins;
use super::follow;
use super::grandparent_queries::grandparents;
use super::sibling_queries::siblings;
use super::uncle_aunt_queries::uncles_and_aunts;
use crate::error::{KinError, KinResult};
use crate::model::relations::summaries;
use crate::model::{Me, Person, PersonId, PersonSummary, Profile, Relations};
use crate::store::PersonStore;

/// The full profile of `id`, or `NotFound` when no such person exists.
pub fn profile<S: PersonStore + ?Sized>(store: &S, id: PersonId) -> KinResult<Profile> {
    find_profile(store, id)?.ok_or_else(|| KinError::person_not_found(id))
}

/// The full profile of `id`, or `None` when no such person exists.
///
/// A store failure in any relation aborts the whole profile; there is no
/// partial result.
pub fn find_profile<S: PersonStore + ?Sized>(
    store: &S,
    id: PersonId,
) -> KinResult<Option<Profile>> {
    let Some(subject) = store.find_by_id(id)? else {
        debug!("profile requested for unknown person {}", id);
        return Ok(None);
    };
    profile_of(store, &subject).map(Some)
}

/// Build the profile of an already loaded person. The relation queries are
/// independent of one another and run on the rayon pool.
pub fn profile_of<S: PersonStore + ?Sized>(store: &S, subject: &Person) -> KinResult<Profile> {
    let ((edges, siblings), ((children, grandparents), (uncles_and_aunts, cousins))) =
        rayon::join(
            || {
                rayon::join(
                    || direct_edges(store, subject),
                    || siblings(store, subject),
                )
            },
            || {
                rayon::join(
                    || rayon::join(|| children(store, subject), || grandparents(store, subject)),
                    || {
                        rayon::join(
                            || uncles_and_aunts(store, subject),
                            || cousins(store, subject),
                        )
                    },
                )
            },
        );

    let (father, mother, spouse) = edges?;
    let siblings = siblings?.summarize();
    let children = children?.summarize();
    let grandparents = grandparents?;
    let uncles_and_aunts = uncles_and_aunts?;
    let cousins = cousins?;

    Ok(Profile {
        me: Me::from(subject),
        relations: Relations {
            father,
            mother,
            spouse,
            brothers: siblings.brothers,
            sisters: siblings.sisters,
            sons: children.sons,
            daughters: children.daughters,
            grandparents: grandparents.summarize(),
            uncles: uncles_and_aunts.uncles.summarize(),
            aunts: uncles_and_aunts.aunts.summarize(),
            cousins: summaries(&cousins),
        },
    })
}

type DirectEdges = (
    Option<PersonSummary>,
    Option<PersonSummary>,
    Option<PersonSummary>,
);

fn direct_edges<S: PersonStore + ?Sized>(store: &S, subject: &Person) -> KinResult<DirectEdges> {
    let summary = |id| follow(store, id).map(|p| p.as_ref().map(PersonSummary::from));
    Ok((
        summary(subject.father)?,
        summary(subject.mother)?,
        summary(subject.spouse)?,
    ))
}
