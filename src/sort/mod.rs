// src/sort/mod.rs
pub mod column;
pub mod compare;
pub mod engine;

pub use column::{ColumnDef, ColumnKind, Direction, TableSchema};
pub use compare::{compare, Comparator};
pub use engine::{sort, sort_indices, SortIndicator, SortState, SortedView};
