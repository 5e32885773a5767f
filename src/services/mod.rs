//! Contains the domain services that own the application's business rules.

pub mod budget;
