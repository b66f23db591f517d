mod common;
use bikeshare::data::{Columns, TripTable, load_data, load_table};
use bikeshare::errors::AppError;
use bikeshare::models::{City, DayFilter, Filters, MonthFilter, Trip};
use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use common::{chicago_table, setup_data_dir, washington_table};

fn filters(month: MonthFilter, day: DayFilter) -> Filters {
    Filters::new(City::Chicago, month, day)
}

#[test]
fn test_load_reads_all_rows_and_optional_columns() {
    let table = chicago_table();
    assert_eq!(table.len(), 6);
    assert_eq!(table.columns(), Columns::all());

    let wash = washington_table();
    assert_eq!(wash.len(), 3);
    assert!(!wash.columns().gender);
    assert!(!wash.columns().birth_year);
}

#[test]
fn test_blank_cells_become_none() {
    let table = chicago_table();
    let third = &table.trips()[2];
    assert_eq!(third.user_type.as_deref(), Some("Customer"));
    assert_eq!(third.gender, None);
    assert_eq!(third.birth_year, None);

    let fifth = &table.trips()[4];
    assert_eq!(fifth.gender, None);
    assert_eq!(fifth.birth_year, Some(1970.0));
}

#[test]
fn test_derived_columns_follow_start_time() {
    for trip in chicago_table().iter() {
        assert_eq!(trip.month(), trip.start_time.month());
        assert_eq!(trip.weekday(), trip.start_time.weekday());
        assert_eq!(trip.hour(), trip.start_time.hour());
    }

    let table = chicago_table();
    let first = &table.trips()[0];
    assert_eq!(first.month(), 6);
    assert_eq!(first.weekday(), Weekday::Fri);
    assert_eq!(first.hour(), 15);
}

#[test]
fn test_end_time_column_is_ignored() {
    let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-02-01 10:00:00,n/a,10,A,B,Subscriber
2017-02-01 11:00:00,,20,A,B,Customer
";
    let table = load_table(csv.as_bytes(), "end_time.csv").expect("load");
    assert_eq!(table.len(), 2);
    assert_eq!(table.trips()[0].hour(), 10);
}

#[test]
fn test_filter_by_month_keeps_only_that_month() {
    let june = chicago_table().filter(&filters(MonthFilter::Month(6), DayFilter::All));
    assert_eq!(june.len(), 3);
    assert!(june.iter().all(|t| t.month() == 6));
}

#[test]
fn test_filter_by_day_keeps_only_that_weekday() {
    let fridays = chicago_table().filter(&filters(MonthFilter::All, DayFilter::Day(Weekday::Fri)));
    assert_eq!(fridays.len(), 3);
    assert!(fridays.iter().all(|t| t.weekday() == Weekday::Fri));
}

#[test]
fn test_filter_by_month_and_day() {
    let table = chicago_table();
    let f = filters(MonthFilter::Month(6), DayFilter::Day(Weekday::Fri));
    let filtered = table.filter(&f);

    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|t| f.accepts(t)));
    // the source table is not touched
    assert_eq!(table.len(), 6);
    // optional column knowledge carries over
    assert_eq!(filtered.columns(), table.columns());
}

#[test]
fn test_filter_all_all_is_identity() {
    let table = chicago_table();
    let all = table.filter(&filters(MonthFilter::All, DayFilter::All));
    assert_eq!(all.trips(), table.trips());
}

#[test]
fn test_filter_with_no_match_is_empty() {
    let march = chicago_table().filter(&filters(MonthFilter::Month(3), DayFilter::All));
    assert!(march.is_empty());
}

#[test]
fn test_filter_on_synthetic_table() {
    let at = |d: u32, h: u32| {
        NaiveDate::from_ymd_opt(2017, 2, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    };
    // 2017-02-06 is a Monday
    let table = TripTable::new(
        vec![
            Trip::new(at(6, 7), 60.0, "A", "B", Some("Subscriber")),
            Trip::new(at(7, 8), 60.0, "A", "B", Some("Subscriber")),
            Trip::new(at(13, 9), 60.0, "B", "A", Some("Customer")),
        ],
        Columns::default(),
    );

    let mondays = table.filter(&filters(MonthFilter::Month(2), DayFilter::Day(Weekday::Mon)));
    let hours: Vec<u32> = mondays.iter().map(|t| t.hour()).collect();
    assert_eq!(hours, vec![7, 9]);
}

#[test]
fn test_missing_required_column_is_an_error() {
    let csv = "Start Time,Trip Duration,Start Station\n2017-01-01 00:00:00,10,A\n";
    let err = load_table(csv.as_bytes(), "broken.csv").unwrap_err();
    match err {
        AppError::MissingColumn { file, column } => {
            assert_eq!(file, "broken.csv");
            assert_eq!(column, "End Station");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_timestamp_reports_row() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-01 00:00:00,10,A,B,Subscriber
yesterday,10,A,B,Subscriber
";
    let err = load_table(csv.as_bytes(), "bad.csv").unwrap_err();
    assert!(matches!(
        err,
        AppError::InvalidTimestamp { row: 3, ref value } if value == "yesterday"
    ));
}

#[test]
fn test_iso_timestamps_are_accepted() {
    let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-04-02T10:15:00,10,A,B,Subscriber
2017-04-02 11:15:00.250,10,A,B,
";
    let table = load_table(csv.as_bytes(), "iso.csv").expect("load");
    assert_eq!(table.len(), 2);
    assert_eq!(table.trips()[0].hour(), 10);
    assert_eq!(table.trips()[1].user_type, None);
}

#[test]
fn test_load_data_reads_city_file_and_filters() {
    let dir = setup_data_dir("load_data_reads_city_file");
    let f = Filters::new(City::Washington, MonthFilter::Month(6), DayFilter::All);

    let table = load_data(&dir, &f).expect("load washington");
    assert_eq!(table.len(), 1);
    assert_eq!(table.trips()[0].start_station, "14th & Belmont St NW");
}

#[test]
fn test_load_data_missing_city_file() {
    let dir = setup_data_dir("load_data_missing_city_file");
    let f = Filters::new(City::NewYork, MonthFilter::All, DayFilter::All);

    let err = load_data(&dir, &f).unwrap_err();
    match err {
        AppError::DatasetNotFound(path) => assert!(path.ends_with("new_york_city.csv")),
        other => panic!("unexpected error: {other}"),
    }
}
