//! Historical name variants
//!
//! Parish registers spell the same given name in Finnish, Swedish and Latin
//! forms. This module keeps the equivalences between such variants, scores
//! candidate variants for human review, and persists the mapping.

pub mod defaults;
pub mod equivalence;
pub mod normalize;
pub mod shared;
pub mod similarity;
pub mod store;

pub use equivalence::{NameEquivalenceIndex, NameSuggestion};
pub use normalize::{fold_case, normalize};
pub use shared::SharedEquivalences;
pub use store::EquivalenceStore;
