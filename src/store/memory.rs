use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{PersonRepository, PersonStore, Predicate};
use crate::error::{KinError, KinResult};
use crate::model::{Person, PersonId};

/// Vec-backed store; scan order is insertion order.
#[derive(Debug, Default)]
pub struct MemoryPersonStore {
    people: RwLock<Vec<Person>>,
}

impl MemoryPersonStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_people(people: Vec<Person>) -> Self {
        Self {
            people: RwLock::new(people),
        }
    }

    pub fn len(&self) -> KinResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> KinResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> KinResult<RwLockReadGuard<'_, Vec<Person>>> {
        self.people
            .read()
            .map_err(|_| KinError::StoreUnavailable("memory store lock poisoned".into()))
    }

    fn write(&self) -> KinResult<RwLockWriteGuard<'_, Vec<Person>>> {
        self.people
            .write()
            .map_err(|_| KinError::StoreUnavailable("memory store lock poisoned".into()))
    }
}

impl PersonStore for MemoryPersonStore {
    fn find_by_id(&self, id: PersonId) -> KinResult<Option<Person>> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    fn find_where(&self, predicate: &Predicate) -> KinResult<Vec<Person>> {
        if predicate.is_never() {
            return Ok(Vec::new());
        }
        Ok(self
            .read()?
            .iter()
            .filter(|p| predicate.matches(p))
            .cloned()
            .collect())
    }
}

impl PersonRepository for MemoryPersonStore {
    fn insert(&self, person: &Person) -> KinResult<()> {
        let mut people = self.write()?;
        if people.iter().any(|p| p.id == person.id) {
            return Err(KinError::AlreadyExists {
                entity_type: "Person".into(),
                identifier: person.id.to_string(),
            });
        }
        people.push(person.clone());
        Ok(())
    }

    fn update(&self, person: &Person) -> KinResult<()> {
        let mut people = self.write()?;
        match people.iter_mut().find(|p| p.id == person.id) {
            Some(slot) => {
                *slot = person.clone();
                Ok(())
            }
            None => Err(KinError::person_not_found(person.id)),
        }
    }

    fn delete(&self, id: PersonId) -> KinResult<bool> {
        let mut people = self.write()?;
        let before = people.len();
        people.retain(|p| p.id != id);
        Ok(people.len() != before)
    }

    fn find_all(&self) -> KinResult<Vec<Person>> {
        Ok(self.read()?.clone())
    }
}
