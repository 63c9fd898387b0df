use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use super::{PersonRepository, PersonStore, Predicate};
use crate::db::{person_repo, schema};
use crate::error::{KinError, KinResult};
use crate::model::{Person, PersonId};

/// SQLite-backed store. The single connection is shared behind a mutex so
/// the store can be handed to parallel resolvers.
pub struct SqlitePersonStore {
    conn: Mutex<Connection>,
}

impl SqlitePersonStore {
    /// Wrap an open connection, creating the schema if needed.
    pub fn new(conn: Connection) -> KinResult<Self> {
        schema::initialize(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open(path: &Path) -> KinResult<Self> {
        Self::new(Connection::open(path)?)
    }

    pub fn in_memory() -> KinResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> KinResult<T>) -> KinResult<T> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| KinError::StoreUnavailable("connection lock poisoned".into()))?;
        f(&*conn)
    }
}

impl PersonStore for SqlitePersonStore {
    fn find_by_id(&self, id: PersonId) -> KinResult<Option<Person>> {
        self.with_conn(|conn| person_repo::find_by_id(conn, id))
    }

    fn find_where(&self, predicate: &Predicate) -> KinResult<Vec<Person>> {
        if predicate.is_never() {
            return Ok(Vec::new());
        }
        self.with_conn(|conn| person_repo::find_where(conn, predicate))
    }

    fn find_where_with_spouse(
        &self,
        predicate: &Predicate,
    ) -> KinResult<Vec<(Person, Option<Person>)>> {
        if predicate.is_never() {
            return Ok(Vec::new());
        }
        self.with_conn(|conn| person_repo::find_where_with_spouse(conn, predicate))
    }
}

impl PersonRepository for SqlitePersonStore {
    fn insert(&self, person: &Person) -> KinResult<()> {
        self.with_conn(|conn| person_repo::insert(conn, person))
    }

    fn update(&self, person: &Person) -> KinResult<()> {
        if self.with_conn(|conn| person_repo::update(conn, person))? {
            Ok(())
        } else {
            Err(KinError::person_not_found(person.id))
        }
    }

    fn delete(&self, id: PersonId) -> KinResult<bool> {
        self.with_conn(|conn| person_repo::delete(conn, id))
    }

    fn find_all(&self) -> KinResult<Vec<Person>> {
        self.with_conn(person_repo::find_all)
    }
}
