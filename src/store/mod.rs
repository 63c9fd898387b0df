//! The person store the kinship queries read from.
//!
//! Queries only need [`PersonStore`]. Writes (ops, import) go through
//! [`PersonRepository`].

pub mod memory;
pub mod predicate;
pub mod sqlite;

pub use memory::MemoryPersonStore;
pub use predicate::{Constraint, Predicate};
pub use sqlite::SqlitePersonStore;

use crate::error::KinResult;
use crate::model::{Person, PersonId};

pub trait PersonStore: Send + Sync {
    fn find_by_id(&self, id: PersonId) -> KinResult<Option<Person>>;

    /// Matches in store order. `Predicate::Never` must yield an empty list.
    fn find_where(&self, predicate: &Predicate) -> KinResult<Vec<Person>>;

    /// Matches paired with their resolved spouse. The default does one lookup
    /// per spouse; stores that can join should override it.
    fn find_where_with_spouse(
        &self,
        predicate: &Predicate,
    ) -> KinResult<Vec<(Person, Option<Person>)>> {
        let people = self.find_where(predicate)?;
        let mut joined = Vec::with_capacity(people.len());
        for person in people {
            let spouse = match person.spouse {
                Some(id) => self.find_by_id(id)?,
                None => None,
            };
            joined.push((person, spouse));
        }
        Ok(joined)
    }
}

pub trait PersonRepository: PersonStore {
    fn insert(&self, person: &Person) -> KinResult<()>;

    /// Fails with `NotFound` when no record has `person.id`.
    fn update(&self, person: &Person) -> KinResult<()>;

    /// Returns false when there was nothing to delete.
    fn delete(&self, id: PersonId) -> KinResult<bool>;

    /// Every person, in store order.
    fn find_all(&self) -> KinResult<Vec<Person>>;
}
