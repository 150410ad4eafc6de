//! Reference collaborators
//!
//! Ready-made [`FamilyTextSource`](crate::algorithm::resolution::FamilyTextSource)
//! and [`FamilyParser`](crate::algorithm::resolution::FamilyParser)
//! implementations: an in-memory map, a directory of JSON files, and a parser
//! for the structured JSON form of a family.

pub mod directory;
pub mod json;
pub mod memory;

pub use directory::DirectoryTextSource;
pub use json::JsonFamilyParser;
pub use memory::MemoryTextSource;
