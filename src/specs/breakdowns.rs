// src/specs/breakdowns.rs
//! Aggregate tables keyed by one match attribute.

use crate::sort::{ColumnDef as C, Direction, TableSchema};

macro_rules! breakdown {
    ($label_key:literal, $label:literal) => {
        TableSchema {
            columns: &[
                C::category($label_key, $label).width(140.0),
                C::numeric("matches_count", "Matches").desc(),
                C::numeric("avg", "Avg Listeners").desc(),
                C::numeric("median", "Median").desc(),
                C::numeric("min", "Min").desc(),
                C::numeric("max", "Max").desc(),
            ],
            initial_key: "avg",
            initial_direction: Direction::Descending,
        }
    };
}

pub static BY_RESULT: TableSchema = breakdown!("result", "Result");
pub static BY_HOME_AWAY: TableSchema = breakdown!("home_away", "Type");
pub static BY_TV_CATEGORY: TableSchema = breakdown!("category", "Category");

// No min column upstream for these two.
pub static KICKOFF_BLOCKS: TableSchema = TableSchema {
    columns: &[
        C::category("kickoff_block", "Kickoff Block").width(140.0),
        C::numeric("matches_count", "Matches").desc(),
        C::numeric("avg", "Avg Listeners").desc(),
        C::numeric("median", "Median").desc(),
        C::numeric("max", "Max").desc(),
    ],
    initial_key: "kickoff_block",
    initial_direction: Direction::Ascending,
};

pub static WEEKDAY: TableSchema = TableSchema {
    columns: &[
        C::category("weekday", "Weekday").width(120.0),
        C::numeric("matches_count", "Matches").desc(),
        C::numeric("avg", "Avg Listeners").desc(),
        C::numeric("median", "Median").desc(),
        C::numeric("max", "Max").desc(),
    ],
    initial_key: "avg",
    initial_direction: Direction::Descending,
};
