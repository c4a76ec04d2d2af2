// crates/db/src/queries/mod.rs
// Query methods on `Database`, one module per table family.

pub mod coding;
pub mod dashboard;
pub mod focus;
pub mod hydration;
pub mod mood;
pub mod profile;
pub mod users;
