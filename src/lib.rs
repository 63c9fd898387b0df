pub mod config;
pub mod db;
pub mod error;
pub mod migrate;
pub mod model;
pub mod ops;
pub mod queries;
pub mod store;
pub mod validation;
