//! Family register models

pub mod family;
pub mod person;

pub use family::{Couple, Family};
pub use person::Person;
