use crate::model::{Person, PersonId};

/// A single equality (or membership) test on a parent edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    FatherIs(PersonId),
    MotherIs(PersonId),
    /// Matches nothing when the list is empty.
    FatherIn(Vec<PersonId>),
    /// Matches nothing when the list is empty.
    MotherIn(Vec<PersonId>),
}

impl Constraint {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Constraint::FatherIs(id) => person.father == Some(*id),
            Constraint::MotherIs(id) => person.mother == Some(*id),
            Constraint::FatherIn(ids) => person.father.is_some_and(|f| ids.contains(&f)),
            Constraint::MotherIn(ids) => person.mother.is_some_and(|m| ids.contains(&m)),
        }
    }
}

/// Scan filter handed to a person store.
///
/// An empty disjunction is `Never`, never "match everyone"; stores must
/// answer `Never` with an empty result without scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Never,
    AnyOf {
        any: Vec<Constraint>,
        except: Option<PersonId>,
    },
}

impl Predicate {
    pub fn any_of(any: Vec<Constraint>) -> Self {
        if any.is_empty() {
            Predicate::Never
        } else {
            Predicate::AnyOf { any, except: None }
        }
    }

    /// "Same father OR same mother", built only from the edges that are set.
    pub fn shares_parent(father: Option<PersonId>, mother: Option<PersonId>) -> Self {
        let any = father
            .map(Constraint::FatherIs)
            .into_iter()
            .chain(mother.map(Constraint::MotherIs))
            .collect();
        Self::any_of(any)
    }

    /// Everyone whose father or mother is `parent`.
    pub fn child_of(parent: PersonId) -> Self {
        Self::any_of(vec![
            Constraint::FatherIs(parent),
            Constraint::MotherIs(parent),
        ])
    }

    /// Everyone whose father or mother is in `parents`. Duplicates in
    /// `parents` are kept as given.
    pub fn child_of_any(parents: &[PersonId]) -> Self {
        if parents.is_empty() {
            return Predicate::Never;
        }
        Self::any_of(vec![
            Constraint::FatherIn(parents.to_vec()),
            Constraint::MotherIn(parents.to_vec()),
        ])
    }

    /// Additionally require `id != excluded`.
    pub fn except(self, excluded: PersonId) -> Self {
        match self {
            Predicate::Never => Predicate::Never,
            Predicate::AnyOf { any, .. } => Predicate::AnyOf {
                any,
                except: Some(excluded),
            },
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Predicate::Never)
    }

    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Predicate::Never => false,
            Predicate::AnyOf { any, except } => {
                except.map_or(true, |id| person.id != id) && any.iter().any(|c| c.matches(person))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, Id};

    fn child(father: Option<PersonId>, mother: Option<PersonId>) -> Person {
        let mut p = Person::create("Child".into(), Gender::Other);
        p.father = father;
        p.mother = mother;
        p
    }

    #[test]
    fn empty_disjunction_is_never() {
        assert!(Predicate::any_of(Vec::new()).is_never());
        assert!(Predicate::shares_parent(None, None).is_never());
        assert!(Predicate::child_of_any(&[]).is_never());
    }

    #[test]
    fn never_matches_nobody() {
        let p = child(None, None);
        assert!(!Predicate::Never.matches(&p));
        assert!(!Predicate::Never.except(p.id).matches(&p));
    }

    #[test]
    fn shares_parent_matches_either_edge() {
        let dad = Id::generate();
        let mom = Id::generate();
        let predicate = Predicate::shares_parent(Some(dad), Some(mom));

        assert!(predicate.matches(&child(Some(dad), None)));
        assert!(predicate.matches(&child(None, Some(mom))));
        assert!(!predicate.matches(&child(None, None)));
        assert!(!predicate.matches(&child(Some(mom), Some(dad))));
    }

    #[test]
    fn except_excludes_only_that_id() {
        let dad = Id::generate();
        let a = child(Some(dad), None);
        let b = child(Some(dad), None);
        let predicate = Predicate::child_of(dad).except(a.id);

        assert!(!predicate.matches(&a));
        assert!(predicate.matches(&b));
    }

    #[test]
    fn membership_constraints_check_each_side() {
        let uncle = Id::generate();
        let aunt = Id::generate();
        let predicate = Predicate::child_of_any(&[uncle, aunt]);

        assert!(predicate.matches(&child(Some(uncle), None)));
        assert!(predicate.matches(&child(None, Some(aunt))));
        assert!(!predicate.matches(&child(Some(Id::generate()), None)));
    }

    #[test]
    fn empty_membership_matches_nothing() {
        let p = child(Some(Id::generate()), Some(Id::generate()));
        assert!(!Constraint::FatherIn(Vec::new()).matches(&p));
        assert!(!Constraint::MotherIn(Vec::new()).matches(&p));
    }
}
