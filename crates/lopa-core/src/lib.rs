pub mod budget;
pub mod graph;
pub mod intern;
pub mod path;

// Core types
pub type VertexId = usize;
pub type Weight = f64;

pub use budget::BudgetClock;
pub use graph::{AdjEntry, Graph, GraphBuilder};
pub use intern::NameTable;
pub use path::PathRecord;
