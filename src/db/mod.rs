pub mod person_repo;
pub mod schema;
