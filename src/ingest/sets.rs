// src/ingest/sets.rs
//! The fixed batch of named result sets and the JSON shape each arrives in.

use serde_json::Value as Json;

use crate::error::IngestError;
use crate::record::{Record, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResultSet {
    AllMatches,
    Top5Games,
    CommentatorDuos,
    ByResult,
    ByHomeAway,
    ByTvCategory,
    Commentators,
    KickoffBlocks,
    Weekday,
    FutureMatches,
    PodcastEpisodes,
    PodcastMonthly,
    PodcastApps,
}

/// How the records sit inside a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// `{ "<key>": [ {..}, .. ] }`; a bare top-level array is accepted too.
    Wrapped(&'static str),
    /// `{ "<season>": [ {..}, .. ], .. }`, flattened with `season` and `rank`.
    SeasonGrouped,
}

impl ResultSet {
    pub const ALL: [ResultSet; 13] = [
        ResultSet::AllMatches,
        ResultSet::Top5Games,
        ResultSet::CommentatorDuos,
        ResultSet::ByResult,
        ResultSet::ByHomeAway,
        ResultSet::ByTvCategory,
        ResultSet::Commentators,
        ResultSet::KickoffBlocks,
        ResultSet::Weekday,
        ResultSet::FutureMatches,
        ResultSet::PodcastEpisodes,
        ResultSet::PodcastMonthly,
        ResultSet::PodcastApps,
    ];

    pub fn file(self) -> &'static str {
        match self {
            ResultSet::AllMatches => "all_matches.json",
            ResultSet::Top5Games => "top5_games.json",
            ResultSet::CommentatorDuos => "commentator_duos.json",
            ResultSet::ByResult => "by_result.json",
            ResultSet::ByHomeAway => "by_home_away.json",
            ResultSet::ByTvCategory => "by_tv_category.json",
            ResultSet::Commentators => "commentators_full_credit.json",
            ResultSet::KickoffBlocks => "kickoff_blocks.json",
            ResultSet::Weekday => "weekday.json",
            ResultSet::FutureMatches => "future_matches.json",
            ResultSet::PodcastEpisodes => "podcast_episodes.json",
            ResultSet::PodcastMonthly => "podcast_monthly.json",
            ResultSet::PodcastApps => "podcast_apps.json",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            ResultSet::AllMatches | ResultSet::FutureMatches => Shape::Wrapped("matches"),
            ResultSet::Top5Games => Shape::SeasonGrouped,
            ResultSet::CommentatorDuos => Shape::Wrapped("duos"),
            ResultSet::ByResult => Shape::Wrapped("results"),
            ResultSet::ByHomeAway => Shape::Wrapped("home_away"),
            ResultSet::ByTvCategory => Shape::Wrapped("categories"),
            ResultSet::Commentators => Shape::Wrapped("commentators"),
            ResultSet::KickoffBlocks => Shape::Wrapped("kickoff_blocks"),
            ResultSet::Weekday => Shape::Wrapped("weekdays"),
            ResultSet::PodcastEpisodes => Shape::Wrapped("episodes"),
            ResultSet::PodcastMonthly => Shape::Wrapped("months"),
            ResultSet::PodcastApps => Shape::Wrapped("apps"),
        }
    }

    /// Human title (table captions, CLI listing).
    pub fn title(self) -> &'static str {
        match self {
            ResultSet::AllMatches => "All Matches",
            ResultSet::Top5Games => "Top 5 Games",
            ResultSet::CommentatorDuos => "Commentator Duos",
            ResultSet::ByResult => "By Result",
            ResultSet::ByHomeAway => "Home vs Away",
            ResultSet::ByTvCategory => "By TV Category",
            ResultSet::Commentators => "Commentators",
            ResultSet::KickoffBlocks => "Kickoff Blocks",
            ResultSet::Weekday => "Weekday",
            ResultSet::FutureMatches => "Future Matches",
            ResultSet::PodcastEpisodes => "Podcast Episodes",
            ResultSet::PodcastMonthly => "Podcast Monthly",
            ResultSet::PodcastApps => "Podcast Apps",
        }
    }

    /// CLI name: the file stem with dashes (`all-matches`).
    pub fn slug(self) -> String {
        self.file().trim_end_matches(".json").replace('_', "-")
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|set| set.slug() == wanted)
    }
}

/// Validate and flatten one file's bytes into records.
pub fn parse(set: ResultSet, bytes: &[u8]) -> Result<Vec<Record>, IngestError> {
    let name = set.file();
    let doc: Json = serde_json::from_slice(bytes).map_err(|source| IngestError::Json { name, source })?;

    match set.shape() {
        Shape::Wrapped(key) => {
            let items = match doc {
                Json::Array(items) => items,
                Json::Object(mut map) => match map.remove(key) {
                    Some(Json::Array(items)) => items,
                    Some(other) => {
                        return Err(shape(name, format!("`{key}` is {}, expected an array", kind_of(&other))));
                    }
                    None => return Err(shape(name, format!("missing `{key}`"))),
                },
                other => return Err(shape(name, format!("top level is {}", kind_of(&other)))),
            };
            items.into_iter().map(|v| to_record(name, v)).collect()
        }
        Shape::SeasonGrouped => {
            let Json::Object(seasons) = doc else {
                return Err(shape(name, format!("top level is {}, expected season map", kind_of(&doc))));
            };
            let mut out = Vec::new();
            for (season, games) in seasons {
                let Json::Array(games) = games else {
                    return Err(shape(name, format!("season `{season}` is not an array")));
                };
                for (i, game) in games.into_iter().enumerate() {
                    let mut rec = to_record(name, game)?;
                    rec.insert("season", season.as_str());
                    rec.insert("rank", Value::Int(i as i64 + 1));
                    out.push(rec);
                }
            }
            Ok(out)
        }
    }
}

fn to_record(name: &'static str, v: Json) -> Result<Record, IngestError> {
    if !v.is_object() {
        return Err(shape(name, format!("element is {}, expected an object", kind_of(&v))));
    }
    serde_json::from_value(v).map_err(|source| IngestError::Json { name, source })
}

fn shape(name: &'static str, detail: String) -> IngestError {
    IngestError::Shape { name, detail }
}

fn kind_of(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
