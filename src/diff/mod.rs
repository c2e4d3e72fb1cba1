/// Edit records and the diff result container.
pub mod edit;
/// Delta-only, attribute-level diff over `sqlparser` statements.
pub mod tree;

pub use edit::{Edit, TreeDiff};
pub use tree::diff;
