/// Stable sorting of SELECT projections at every nesting depth.
pub mod select_list;

pub use select_list::{canonicalize, canonicalized};
