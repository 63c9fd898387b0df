use chrono::NaiveDate;
use kinship::error::KinError;
use kinship::model::*;
use kinship::ops::person_ops::{self, NewPerson, PersonChanges};
use kinship::store::*;

fn setup() -> SqlitePersonStore {
    SqlitePersonStore::in_memory().unwrap()
}

// ==========================================================================
// ADD PERSON
// ==========================================================================

#[test]
fn add_person_trims_fields() {
    let store = setup();
    let mut input = NewPerson::new("  Amina  ", Gender::Female);
    input.photo = Some("   ".into());
    input.biography = Some("  Loves gardening ".into());

    let person = person_ops::add_person(&store, input).unwrap();
    assert_eq!(person.name, "Amina");
    assert_eq!(person.photo, None);
    assert_eq!(person.biography, Some("Loves gardening".into()));
    assert_eq!(store.find_by_id(person.id).unwrap().unwrap(), person);
}

#[test]
fn add_person_rejects_blank_name() {
    let store = setup();
    let result = person_ops::add_person(&store, NewPerson::new("   ", Gender::Male));
    assert!(matches!(result, Err(KinError::BlankField { .. })));
}

#[test]
fn add_person_rejects_death_before_birth() {
    let store = setup();
    let mut input = NewPerson::new("Yusuf", Gender::Male);
    input.birth_date = NaiveDate::from_ymd_opt(1950, 1, 1);
    input.death_date = NaiveDate::from_ymd_opt(1949, 1, 1);

    let result = person_ops::add_person(&store, input);
    assert!(matches!(result, Err(KinError::DeathBeforeBirth)));
}

#[test]
fn add_person_rejects_unknown_parent() {
    let store = setup();
    let mut input = NewPerson::new("Orphan", Gender::Other);
    input.father = Some(Id::generate());

    let result = person_ops::add_person(&store, input);
    assert!(matches!(result, Err(KinError::NotFound { .. })));
    assert!(store.find_all().unwrap().is_empty());
}

#[test]
fn add_person_links_spouse_back() {
    let store = setup();
    let husband = person_ops::add_person(&store, NewPerson::new("Omar", Gender::Male)).unwrap();

    let mut input = NewPerson::new("Leila", Gender::Female);
    input.spouse = Some(husband.id);
    let wife = person_ops::add_person(&store, input).unwrap();

    assert_eq!(wife.spouse, Some(husband.id));
    let husband = store.find_by_id(husband.id).unwrap().unwrap();
    assert_eq!(husband.spouse, Some(wife.id));
}

#[test]
fn add_person_with_parents() {
    let store = setup();
    let dad = person_ops::add_person(&store, NewPerson::new("Dad", Gender::Male)).unwrap();
    let mom = person_ops::add_person(&store, NewPerson::new("Mom", Gender::Female)).unwrap();

    let mut input = NewPerson::new("Kid", Gender::Female);
    input.father = Some(dad.id);
    input.mother = Some(mom.id);
    let kid = person_ops::add_person(&store, input).unwrap();

    assert_eq!(kid.father, Some(dad.id));
    assert_eq!(kid.mother, Some(mom.id));
    // Parents are not touched.
    assert_eq!(store.find_by_id(dad.id).unwrap().unwrap(), dad);
}

// ==========================================================================
// UPDATE PERSON
// ==========================================================================

#[test]
fn update_person_partial() {
    let store = setup();
    let mut input = NewPerson::new("Sam", Gender::Other);
    input.biography = Some("Old bio".into());
    input.birth_date = NaiveDate::from_ymd_opt(1980, 1, 1);
    let person = person_ops::add_person(&store, input).unwrap();

    let changes = PersonChanges {
        name: Some("Samira".into()),
        gender: Some(Gender::Female),
        biography: Some(None),
        ..PersonChanges::default()
    };
    let updated = person_ops::update_person(&store, person.id, changes).unwrap();

    assert_eq!(updated.name, "Samira");
    assert_eq!(updated.gender, Gender::Female);
    assert_eq!(updated.biography, None);
    assert_eq!(updated.birth_date, NaiveDate::from_ymd_opt(1980, 1, 1));
    assert_eq!(store.find_by_id(person.id).unwrap().unwrap(), updated);
}

#[test]
fn update_person_rejects_self_reference() {
    let store = setup();
    let person = person_ops::add_person(&store, NewPerson::new("Loop", Gender::Male)).unwrap();

    let changes = PersonChanges {
        father: Some(Some(person.id)),
        ..PersonChanges::default()
    };
    let result = person_ops::update_person(&store, person.id, changes);
    assert!(matches!(result, Err(KinError::SelfReference { .. })));
}

#[test]
fn update_person_rejects_death_before_existing_birth() {
    let store = setup();
    let mut input = NewPerson::new("Yusuf", Gender::Male);
    input.birth_date = NaiveDate::from_ymd_opt(1950, 1, 1);
    let person = person_ops::add_person(&store, input).unwrap();

    let changes = PersonChanges {
        death_date: Some(NaiveDate::from_ymd_opt(1940, 1, 1)),
        ..PersonChanges::default()
    };
    let result = person_ops::update_person(&store, person.id, changes);
    assert!(matches!(result, Err(KinError::DeathBeforeBirth)));
}

#[test]
fn update_person_new_spouse_links_back() {
    let store = setup();
    let a = person_ops::add_person(&store, NewPerson::new("A", Gender::Male)).unwrap();
    let b = person_ops::add_person(&store, NewPerson::new("B", Gender::Female)).unwrap();

    let changes = PersonChanges {
        spouse: Some(Some(b.id)),
        ..PersonChanges::default()
    };
    person_ops::update_person(&store, a.id, changes).unwrap();

    assert_eq!(store.find_by_id(b.id).unwrap().unwrap().spouse, Some(a.id));
}

#[test]
fn update_person_clearing_spouse_leaves_other_side() {
    let store = setup();
    let a = person_ops::add_person(&store, NewPerson::new("A", Gender::Male)).unwrap();
    let mut input = NewPerson::new("B", Gender::Female);
    input.spouse = Some(a.id);
    let b = person_ops::add_person(&store, input).unwrap();

    let changes = PersonChanges {
        spouse: Some(None),
        ..PersonChanges::default()
    };
    let updated = person_ops::update_person(&store, b.id, changes).unwrap();

    assert_eq!(updated.spouse, None);
    assert_eq!(store.find_by_id(a.id).unwrap().unwrap().spouse, Some(b.id));
}

#[test]
fn update_missing_person_is_not_found() {
    let store = setup();
    let result = person_ops::update_person(&store, Id::generate(), PersonChanges::default());
    assert!(matches!(result, Err(KinError::NotFound { .. })));
}

// ==========================================================================
// DELETE PERSON
// ==========================================================================

#[test]
fn delete_person_leaves_dangling_edges() {
    let store = setup();
    let dad = person_ops::add_person(&store, NewPerson::new("Dad", Gender::Male)).unwrap();
    let mut input = NewPerson::new("Kid", Gender::Male);
    input.father = Some(dad.id);
    let kid = person_ops::add_person(&store, input).unwrap();

    let deleted = person_ops::delete_person(&store, dad.id).unwrap();
    assert_eq!(deleted.id, dad.id);
    assert!(store.find_by_id(dad.id).unwrap().is_none());
    assert_eq!(store.find_by_id(kid.id).unwrap().unwrap().father, Some(dad.id));
}

#[test]
fn delete_missing_person_is_not_found() {
    let store = setup();
    let result = person_ops::delete_person(&store, Id::generate());
    assert!(matches!(result, Err(KinError::NotFound { .. })));
}

#[test]
fn ops_work_on_memory_store() {
    let store = MemoryPersonStore::new();
    let a = person_ops::add_person(&store, NewPerson::new("A", Gender::Male)).unwrap();
    let mut input = NewPerson::new("B", Gender::Female);
    input.spouse = Some(a.id);
    let b = person_ops::add_person(&store, input).unwrap();

    assert_eq!(store.find_by_id(a.id).unwrap().unwrap().spouse, Some(b.id));
    person_ops::delete_person(&store, a.id).unwrap();
    assert_eq!(store.len().unwrap(), 1);
}
