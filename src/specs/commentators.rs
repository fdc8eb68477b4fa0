// src/specs/commentators.rs

use crate::sort::{ColumnDef as C, Direction, TableSchema};

pub static COMMENTATORS: TableSchema = TableSchema {
    columns: &[
        C::text("commentator", "Name").width(180.0),
        C::numeric("matches_count", "Matches").desc(),
        C::numeric("avg", "Avg").desc(),
        C::numeric("median", "Median").desc(),
        C::numeric("max", "Max").desc(),
    ],
    initial_key: "avg",
    initial_direction: Direction::Descending,
};

/// Duo names are unordered pairs ("A / B" == "B / A" upstream).
pub static DUOS: TableSchema = TableSchema {
    columns: &[
        C::text("duo", "Duo").width(260.0),
        C::numeric("matches_count", "Matches").desc(),
        C::numeric("avg", "Avg Listeners").desc(),
        C::numeric("median", "Median").desc(),
        C::numeric("max", "Max").desc(),
    ],
    initial_key: "avg",
    initial_direction: Direction::Descending,
};
