use chrono::NaiveDate;
use rusqlite::{params, params_from_iter, Connection};

use crate::error::{KinError, KinResult};
use crate::model::{Gender, Id, Person, PersonId};
use crate::store::{Constraint, Predicate};

const COLUMNS: [&str; 10] = [
    "id",
    "name",
    "gender",
    "birth_date",
    "death_date",
    "photo",
    "biography",
    "father_id",
    "mother_id",
    "spouse_id",
];

fn select_list(alias: &str) -> String {
    COLUMNS
        .iter()
        .map(|c| format!("{}.{}", alias, c))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn insert(conn: &Connection, person: &Person) -> KinResult<()> {
    conn.execute(
        "INSERT INTO people (id, name, gender, birth_date, death_date, photo, biography, father_id, mother_id, spouse_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            person.id.value.to_string(),
            person.name,
            person.gender.as_str(),
            person.birth_date.map(|d| d.to_string()),
            person.death_date.map(|d| d.to_string()),
            person.photo,
            person.biography,
            person.father.map(|id| id.value.to_string()),
            person.mother.map(|id| id.value.to_string()),
            person.spouse.map(|id| id.value.to_string()),
        ],
    )?;
    Ok(())
}

/// Overwrite every column of an existing row. Returns false when no row has
/// the person's id.
pub fn update(conn: &Connection, person: &Person) -> KinResult<bool> {
    let changed = conn.execute(
        "UPDATE people SET name = ?1, gender = ?2, birth_date = ?3, death_date = ?4, photo = ?5,
         biography = ?6, father_id = ?7, mother_id = ?8, spouse_id = ?9, updated_at = datetime('now')
         WHERE id = ?10",
        params![
            person.name,
            person.gender.as_str(),
            person.birth_date.map(|d| d.to_string()),
            person.death_date.map(|d| d.to_string()),
            person.photo,
            person.biography,
            person.father.map(|id| id.value.to_string()),
            person.mother.map(|id| id.value.to_string()),
            person.spouse.map(|id| id.value.to_string()),
            person.id.value.to_string(),
        ],
    )?;
    Ok(changed > 0)
}

pub fn delete(conn: &Connection, id: PersonId) -> KinResult<bool> {
    let changed = conn.execute(
        "DELETE FROM people WHERE id = ?1",
        params![id.value.to_string()],
    )?;
    Ok(changed > 0)
}

pub fn find_by_id(conn: &Connection, id: PersonId) -> KinResult<Option<Person>> {
    let sql = format!("SELECT {} FROM people p WHERE p.id = ?1", select_list("p"));
    let mut stmt = conn.prepare(&sql)?;

    let result = stmt.query_row(params![id.value.to_string()], |row| {
        Ok(row_to_person(row, 0))
    });

    match result {
        Ok(person) => Ok(Some(person?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// All people in insertion order.
pub fn find_all(conn: &Connection) -> KinResult<Vec<Person>> {
    let sql = format!("SELECT {} FROM people p ORDER BY p.rowid", select_list("p"));
    let mut stmt = conn.prepare(&sql)?;

    let people = stmt
        .query_map([], |row| Ok(row_to_person(row, 0)))?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(people)
}

/// People matching `predicate`, in insertion order. A predicate that can
/// match nothing never reaches the database.
pub fn find_where(conn: &Connection, predicate: &Predicate) -> KinResult<Vec<Person>> {
    let Some((clause, args)) = where_clause(predicate, "p") else {
        return Ok(Vec::new());
    };

    let sql = format!(
        "SELECT {} FROM people p WHERE {} ORDER BY p.rowid",
        select_list("p"),
        clause
    );
    let mut stmt = conn.prepare(&sql)?;

    let people = stmt
        .query_map(params_from_iter(args.iter()), |row| {
            Ok(row_to_person(row, 0))
        })?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(people)
}

/// Like `find_where`, with each match's spouse loaded through a single
/// self-join. A spouse id pointing at a missing row yields `None`.
pub fn find_where_with_spouse(
    conn: &Connection,
    predicate: &Predicate,
) -> KinResult<Vec<(Person, Option<Person>)>> {
    let Some((clause, args)) = where_clause(predicate, "p") else {
        return Ok(Vec::new());
    };

    let sql = format!(
        "SELECT {}, {} FROM people p LEFT JOIN people s ON s.id = p.spouse_id
         WHERE {} ORDER BY p.rowid",
        select_list("p"),
        select_list("s"),
        clause
    );
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt
        .query_map(params_from_iter(args.iter()), |row| {
            let spouse_id: Option<String> = row.get(COLUMNS.len())?;
            let spouse = spouse_id.map(|_| row_to_person(row, COLUMNS.len()));
            Ok((row_to_person(row, 0), spouse))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut joined = Vec::with_capacity(rows.len());
    for (person, spouse) in rows {
        joined.push((person?, spouse.transpose()?));
    }
    Ok(joined)
}

/// Render a predicate as a SQL condition over the columns of `alias`.
/// Returns `None` when the predicate cannot match any row.
fn where_clause(predicate: &Predicate, alias: &str) -> Option<(String, Vec<String>)> {
    let (any, except) = match predicate {
        Predicate::Never => return None,
        Predicate::AnyOf { any, except } => (any, except),
    };

    let mut terms = Vec::new();
    let mut args = Vec::new();

    for constraint in any {
        let (column, ids) = match constraint {
            Constraint::FatherIs(id) => ("father_id", std::slice::from_ref(id)),
            Constraint::MotherIs(id) => ("mother_id", std::slice::from_ref(id)),
            Constraint::FatherIn(ids) => ("father_id", ids.as_slice()),
            Constraint::MotherIn(ids) => ("mother_id", ids.as_slice()),
        };
        if ids.is_empty() {
            continue;
        }
        let placeholders = vec!["?"; ids.len()].join(", ");
        terms.push(format!("{}.{} IN ({})", alias, column, placeholders));
        args.extend(ids.iter().map(|id| id.value.to_string()));
    }

    if terms.is_empty() {
        return None;
    }

    let mut clause = format!("({})", terms.join(" OR "));
    if let Some(id) = except {
        clause.push_str(&format!(" AND {}.id != ?", alias));
        args.push(id.value.to_string());
    }

    Some((clause, args))
}

fn row_to_person(row: &rusqlite::Row, offset: usize) -> KinResult<Person> {
    let id_str: String = row.get(offset)?;
    let gender_str: String = row.get(offset + 2)?;
    let birth_str: Option<String> = row.get(offset + 3)?;
    let death_str: Option<String> = row.get(offset + 4)?;

    Ok(Person {
        id: parse_id(&id_str)?,
        name: row.get(offset + 1)?,
        gender: Gender::parse(&gender_str)
            .ok_or_else(|| KinError::Other(format!("Invalid gender: {}", gender_str)))?,
        birth_date: birth_str.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        death_date: death_str.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok()),
        photo: row.get(offset + 5)?,
        biography: row.get(offset + 6)?,
        father: parse_optional_id(row.get(offset + 7)?)?,
        mother: parse_optional_id(row.get(offset + 8)?)?,
        spouse: parse_optional_id(row.get(offset + 9)?)?,
    })
}

fn parse_id(s: &str) -> KinResult<PersonId> {
    Id::parse(s).map_err(|e| KinError::Other(format!("Invalid UUID: {}", e)))
}

fn parse_optional_id(s: Option<String>) -> KinResult<Option<PersonId>> {
    s.as_deref().map(parse_id).transpose()
}
