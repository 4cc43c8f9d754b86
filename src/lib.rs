//! Small abstract data types: a bounded stack with one concrete
//! implementation, plus the table and tree interfaces.

pub mod error;
pub mod interpreter;
pub mod program;
pub mod shapes;
pub mod stack;

pub use error::{Error, Result};
pub use interpreter::Interpreter;
pub use program::{Instruction, Program};
pub use shapes::{Table, TableSpec, Tree, TreeSpec};
pub use stack::{BoundedStack, Stack};
