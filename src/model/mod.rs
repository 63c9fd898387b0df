pub mod ids;
pub mod person;
pub mod relations;
pub mod profile;

// Re-exports for convenience
pub use ids::Id;
pub use person::{Gender, Person, PersonDetails, PersonId, PersonSummary};
pub use relations::{BySide, Children, GrandparentPair, Grandparents, Siblings, UnclesAndAunts};
pub use profile::{Me, Profile, Relations};
