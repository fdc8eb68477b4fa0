// src/specs/podcast.rs

use crate::sort::{ColumnDef as C, Direction, TableSchema};

pub static EPISODES: TableSchema = TableSchema {
    columns: &[
        C::text("title", "Title").width(320.0),
        C::date("published_at", "Published").desc().width(100.0),
        C::text("duration_in_mmss", "Duration").width(70.0),
        C::numeric("total_downloads", "Downloads (24m)").desc().width(110.0),
    ],
    initial_key: "published_at",
    initial_direction: Direction::Descending,
};

// `YYYY-MM` strings; literal comparison is chronological
pub static MONTHLY: TableSchema = TableSchema {
    columns: &[
        C::date("month", "Month"),
        C::numeric("downloads", "Downloads").desc(),
    ],
    initial_key: "month",
    initial_direction: Direction::Ascending,
};

pub static APPS: TableSchema = TableSchema {
    columns: &[
        C::text("app", "App").width(180.0),
        C::numeric("downloads", "Downloads").desc(),
    ],
    initial_key: "downloads",
    initial_direction: Direction::Descending,
};
