//! Tests for individual row parsing and validation

use super::{record, standard_header};
use crate::Error;
use crate::app::models::EventType;
use crate::app::services::csv_ingest::ColumnMap;
use crate::app::services::csv_ingest::row_parser::parse_event_row;
use chrono::NaiveDate;

fn standard_columns() -> ColumnMap {
    ColumnMap::resolve(&standard_header()).unwrap()
}

#[test]
fn test_parse_valid_row() {
    let columns = standard_columns();
    let row = record(&["EQIX", "PRICE_UPDATE", "165.75", "2025-06-01"]);

    let event = parse_event_row(&row, &columns).unwrap();

    assert_eq!(event.ticker, "EQIX");
    assert_eq!(event.event_type, EventType::PriceUpdate);
    assert_eq!(event.amount, "165.75".parse().unwrap());
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
}

#[test]
fn test_parse_trims_ticker() {
    let columns = standard_columns();
    let row = record(&["  GOOG ", "SPLIT", "20", "2025-02-10"]);

    let event = parse_event_row(&row, &columns).unwrap();
    assert_eq!(event.ticker, "GOOG");
}

#[test]
fn test_insufficient_columns_preserves_raw_row() {
    let columns = standard_columns();
    let row = record(&["GOOG", "SPLIT"]);

    let error = parse_event_row(&row, &columns).unwrap_err();

    match &error {
        Error::RowParse { message, .. } => assert!(message.contains("insufficient columns")),
        other => panic!("expected row parse error, got {:?}", other),
    }
    assert_eq!(error.raw_row().unwrap(), &["GOOG", "SPLIT"]);
}

#[test]
fn test_invalid_event_type_wraps_cause() {
    let columns = standard_columns();
    let row = record(&["EQIX", "price_update", "165.75", "2025-06-01"]);

    let error = parse_event_row(&row, &columns).unwrap_err();

    match &error {
        Error::RowParse { source, .. } => assert!(source.is_some()),
        other => panic!("expected row parse error, got {:?}", other),
    }
    assert_eq!(
        error.raw_row().unwrap(),
        &["EQIX", "price_update", "165.75", "2025-06-01"]
    );
}

#[test]
fn test_invalid_amount_fails() {
    let columns = standard_columns();
    let row = record(&["EQIX", "PRICE_UPDATE", "not-a-number", "2025-06-01"]);

    let error = parse_event_row(&row, &columns).unwrap_err();
    assert!(matches!(error, Error::RowParse { .. }));
}

#[test]
fn test_invalid_date_fails() {
    let columns = standard_columns();

    for bad_date in ["2025-13-01", "01/06/2025", "2025-06-01T00:00:00"] {
        let row = record(&["EQIX", "PRICE_UPDATE", "165.75", bad_date]);
        let error = parse_event_row(&row, &columns).unwrap_err();
        assert!(
            matches!(error, Error::RowParse { .. }),
            "date '{}' should be rejected",
            bad_date
        );
    }
}

#[test]
fn test_empty_ticker_fails() {
    let columns = standard_columns();
    let row = record(&["   ", "SPLIT", "2", "2025-01-01"]);

    let error = parse_event_row(&row, &columns).unwrap_err();
    assert!(matches!(error, Error::RowParse { .. }));
}

#[test]
fn test_event_id_is_fresh_per_parse() {
    let columns = standard_columns();
    let row = record(&["EQIX", "PRICE_UPDATE", "165.75", "2025-06-01"]);

    let first = parse_event_row(&row, &columns).unwrap();
    let second = parse_event_row(&row, &columns).unwrap();

    assert_ne!(first.event_id, second.event_id);
}

#[test]
fn test_parse_with_reordered_columns() {
    let headers = record(&["date", "amount", "ticker", "eventType"]);
    let columns = ColumnMap::resolve(&headers).unwrap();
    let row = record(&["2025-06-01", "165.75", "EQIX", "PRICE_UPDATE"]);

    let event = parse_event_row(&row, &columns).unwrap();

    assert_eq!(event.ticker, "EQIX");
    assert_eq!(event.event_type, EventType::PriceUpdate);
    assert_eq!(event.amount, "165.75".parse().unwrap());
    assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
}
