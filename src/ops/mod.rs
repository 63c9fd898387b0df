pub mod person_ops;
