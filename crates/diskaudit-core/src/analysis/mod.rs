//! Analysis modules: categorisation and ranking over scan results.

pub mod categorize;
pub mod top_folders;

pub use categorize::{categorize, Categorizer, ClassificationRules, ExtensionClass};
pub use top_folders::{rank_folders, top_folders};
