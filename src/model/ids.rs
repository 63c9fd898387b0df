use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use uuid::Uuid;

/// UUID identity of a stored record. `Id<Person>` (`PersonId`) is what every
/// father/mother/spouse edge holds; the phantom parameter names the record
/// kind the edge points at.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub value: Uuid,
    #[serde(skip)]
    _phantom: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: Uuid) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    pub fn generate() -> Self {
        Self::new(Uuid::new_v4())
    }

    /// Parse from a UUID string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self::new(Uuid::parse_str(s.trim())?))
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Gender, Person, PersonId};

    #[test]
    fn each_person_gets_a_fresh_id() {
        let a = Person::create("A".into(), Gender::Male);
        let b = Person::create("B".into(), Gender::Male);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        let id = PersonId::generate();
        let parsed = PersonId::parse(&format!("  {}\n", id)).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn mongo_object_ids_are_not_person_ids() {
        assert!(PersonId::parse("64f1c0ffee00000000000000").is_err());
    }

    #[test]
    fn edge_serializes_as_bare_string() {
        let mut child = Person::create("Kid".into(), Gender::Other);
        let father = PersonId::generate();
        child.father = Some(father);
        let json = serde_json::to_value(&child).unwrap();
        assert_eq!(json["father"], father.value.to_string());
        let back: PersonId = serde_json::from_value(json["father"].clone()).unwrap();
        assert_eq!(back, father);
    }
}
