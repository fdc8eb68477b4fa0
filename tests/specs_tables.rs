// tests/specs_tables.rs
use std::collections::HashSet;

use radio_dash::csv::{self, Delimiter};
use radio_dash::ingest::ResultSet;
use radio_dash::record::Record;
use radio_dash::sort::{sort_indices, Direction, SortState};
use radio_dash::specs::{self, commentators::DUOS, matches::ALL_MATCHES};

#[test]
fn every_set_starts_on_a_sortable_column() {
    for set in ResultSet::ALL {
        let schema = specs::schema_for(set);
        let col = schema
            .column(schema.initial_key)
            .unwrap_or_else(|| panic!("{}: initial key {} missing", set.file(), schema.initial_key));
        assert!(col.sortable, "{}: initial key not sortable", set.file());
    }
}

#[test]
fn column_keys_are_unique_per_table() {
    for set in ResultSet::ALL {
        let schema = specs::schema_for(set);
        let mut seen = HashSet::new();
        for col in schema.columns {
            assert!(seen.insert(col.key), "{}: duplicate column {}", set.file(), col.key);
        }
    }
}

#[test]
fn documented_initial_orders() {
    assert_eq!(ALL_MATCHES.initial_state(), SortState::desc("date"));
    assert_eq!(DUOS.initial_state(), SortState::desc("avg"));
    assert_eq!(
        specs::schema_for(ResultSet::FutureMatches).initial_state(),
        SortState::asc("date")
    );
    assert_eq!(specs::schema_for(ResultSet::PodcastApps).initial_state().direction, Direction::Descending);
}

#[test]
fn slugs_round_trip() {
    for set in ResultSet::ALL {
        assert_eq!(ResultSet::from_slug(&set.slug()), Some(set));
    }
    assert_eq!(ResultSet::AllMatches.slug(), "all-matches");
    assert_eq!(ResultSet::from_slug("ALL_MATCHES"), Some(ResultSet::AllMatches));
    assert_eq!(ResultSet::from_slug("nope"), None);
}

#[test]
fn table_copy_follows_the_view_order() {
    let records = vec![
        Record::new().with("duo", "A/B").with("matches_count", 4_i64).with("avg", 1000_i64),
        Record::new().with("duo", "C, D").with("matches_count", 2_i64).with("avg", 2500.5),
    ];
    let ix = sort_indices(&records, &DUOS, &SortState::desc("avg"));

    let tsv = csv::table_to_string(&records, &ix, &DUOS, Delimiter::Tsv.sep());
    let lines: Vec<&str> = tsv.lines().collect();
    assert_eq!(lines[0], "Duo\tMatches\tAvg Listeners\tMedian\tMax");
    assert_eq!(lines[1], "C, D\t2\t2,500.5\tN/A\tN/A");
    assert_eq!(lines[2], "A/B\t4\t1,000\tN/A\tN/A");

    // commas force quoting in CSV
    let out = csv::table_to_string(&records, &ix, &DUOS, Delimiter::Csv.sep());
    assert!(out.lines().nth(1).unwrap().starts_with("\"C, D\",2,\"2,500.5\""));
}

#[test]
fn delimiter_names() {
    assert_eq!(Delimiter::parse("CSV"), Some(Delimiter::Csv));
    assert_eq!(Delimiter::parse("tsv"), Some(Delimiter::Tsv));
    assert_eq!(Delimiter::parse("xlsx"), None);
}
