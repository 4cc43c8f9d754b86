//! Interfaces for physical objects. Only constructor validation lives here;
//! behaviour belongs to whoever implements the traits.

mod table;
pub use table::{Table, TableSpec};

mod tree;
pub use tree::{Tree, TreeSpec};
