// tests/metrics_format.rs
use radio_dash::metrics::{self, MetricId};
use radio_dash::record::Record;
use radio_dash::specs::{self, matches::ALL_MATCHES, podcast::EPISODES};

#[test]
fn media_value_per_thousand_listeners() {
    let r = Record::new().with("listeners", 5000_i64);
    assert_eq!(metrics::derive(&r, MetricId::MediaValue), 125.0);
    assert_eq!(metrics::display(&r, MetricId::MediaValue).as_deref(), Some("€ 125"));

    let r = Record::new().with("listeners", 50_000_i64);
    assert_eq!(metrics::display(&r, MetricId::MediaValue).as_deref(), Some("€ 1.250"));
}

#[test]
fn media_value_without_listeners() {
    let r = Record::new().with("match_name", "Ajax - PSV");
    assert_eq!(metrics::derive(&r, MetricId::MediaValue), 0.0);
    assert_eq!(metrics::display(&r, MetricId::MediaValue), None);

    let col = ALL_MATCHES.column("mediaValue").unwrap();
    assert_eq!(specs::format_cell(&r, col), specs::NA);
}

#[test]
fn numbers_use_grouping() {
    assert_eq!(metrics::format_number(12345.0), "12,345");
    assert_eq!(metrics::format_number(1234.5), "1,234.5");
    assert_eq!(metrics::format_number(999.0), "999");
    assert_eq!(metrics::format_number(1_000_000.0), "1,000,000");
    assert_eq!(metrics::format_number(0.125), "0.13");
    assert_eq!(metrics::format_number(-2500.0), "-2,500");
    assert_eq!(metrics::format_number(f64::NAN), "N/A");
}

#[test]
fn euro_rounds_to_whole() {
    assert_eq!(metrics::format_eur(0.0), "€ 0");
    assert_eq!(metrics::format_eur(999.6), "€ 1.000");
    assert_eq!(metrics::format_eur(1_234_567.0), "€ 1.234.567");
}

#[test]
fn short_dutch_dates() {
    assert_eq!(metrics::format_date("2025-01-05"), "5 jan. 2025");
    assert_eq!(metrics::format_date("2025-03-10"), "10 mrt. 2025");
    assert_eq!(metrics::format_date("2024-05-31"), "31 mei 2024");
    assert_eq!(metrics::format_date("2024-10-01T19:30:00+02:00"), "1 okt. 2024");
}

#[test]
fn unparsable_dates_are_verbatim() {
    assert_eq!(metrics::format_date("week 12"), "week 12");
    assert_eq!(metrics::format_date("2025-13-40"), "2025-13-40");
}

#[test]
fn cells_by_column_kind() {
    let r = Record::new()
        .with("title", "Aflevering 12")
        .with("published_at", "2025-01-05")
        .with("total_downloads", 12345_i64);

    let cell = |key: &str| specs::format_cell(&r, EPISODES.column(key).unwrap());
    assert_eq!(cell("title"), "Aflevering 12");
    assert_eq!(cell("published_at"), "5 jan. 2025");
    assert_eq!(cell("total_downloads"), "12,345");
    assert_eq!(cell("duration_in_mmss"), "N/A");
}
