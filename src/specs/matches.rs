// src/specs/matches.rs
//! Match tables: full season, upcoming fixtures, top five per season.

use crate::metrics::MetricId;
use crate::sort::{ColumnDef as C, Direction, TableSchema};

pub static ALL_MATCHES: TableSchema = TableSchema {
    columns: &[
        C::date("date", "Date").desc().width(100.0),
        C::text("weekday", "Day").width(80.0),
        C::text("time", "Time").width(55.0),
        C::text("match_name", "Match").width(240.0),
        C::text("commentators", "Commentators").unsortable().width(200.0),
        C::text("tv_channel", "TV Channel"),
        C::text("score", "Score").width(60.0),
        C::category("result", "Result").width(60.0),
        C::numeric("listeners", "Listeners").desc(),
        C::derived("mediaValue", "Media Value", MetricId::MediaValue).desc().width(100.0),
    ],
    initial_key: "date",
    initial_direction: Direction::Descending,
};

pub static FUTURE_MATCHES: TableSchema = TableSchema {
    columns: &[
        C::date("date", "Date").width(100.0),
        C::text("weekday", "Day").width(80.0),
        C::text("time", "Time").width(55.0),
        C::text("match_name", "Match").width(240.0),
        C::text("commentators", "Commentators").unsortable().width(200.0),
        C::category("home_away", "Home/Away"),
        C::category("tv_category", "TV Category"),
        C::numeric("opponent_position", "Opponent Position"),
        C::numeric("predicted_listeners", "Predicted Listeners").desc().width(120.0),
    ],
    initial_key: "date",
    initial_direction: Direction::Ascending,
};

// `season` and `rank` are added while flattening the season-keyed file
pub static TOP5_GAMES: TableSchema = TableSchema {
    columns: &[
        C::text("season", "Season"),
        C::numeric("rank", "Rank").width(45.0),
        C::date("date", "Date").desc().width(100.0),
        C::text("weekday", "Day").width(80.0),
        C::text("time", "Time").width(55.0),
        C::text("match_name", "Match").width(240.0),
        C::text("commentators", "Commentators").unsortable().width(200.0),
        C::text("tv_channel", "TV Channel"),
        C::text("score", "Score").width(60.0),
        C::category("result", "Result").width(60.0),
        C::numeric("listeners", "Listeners").desc(),
    ],
    initial_key: "season",
    initial_direction: Direction::Ascending,
};
