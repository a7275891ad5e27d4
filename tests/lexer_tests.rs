mod common;
use chrono::Weekday;
use common::time;
use std::collections::BTreeMap;
use webreg2ics::errors::RowError;
use webreg2ics::utils::days::{DayCodeTable, weekday_index};
use webreg2ics::utils::{parse_time_of_day, parse_time_range, weekday_indices};

fn indices(code: &str) -> Vec<u32> {
    weekday_indices(code).into_iter().map(weekday_index).collect()
}

#[test]
fn test_weekday_codes_longest_match_first() {
    assert_eq!(indices("MWF"), vec![0, 2, 4]);
    assert_eq!(indices("TuTh"), vec![1, 3]);
    assert_eq!(indices("MTuWThF"), vec![0, 1, 2, 3, 4]);
    assert_eq!(indices("Th"), vec![3]);
}

#[test]
fn test_weekday_codes_skip_unknown_characters() {
    // "x", "T" alone and "Sa" are not in the table and must not stall the scan
    assert_eq!(indices("MxW"), vec![0, 2]);
    assert_eq!(indices("TW"), vec![2]);
    assert_eq!(indices("Sa"), Vec::<u32>::new());
    assert_eq!(indices("TBA"), Vec::<u32>::new());
    assert_eq!(indices(""), Vec::<u32>::new());
}

#[test]
fn test_custom_day_table_with_weekend() {
    let mut codes = webreg2ics::utils::days::default_day_codes();
    codes.insert("Sa".to_string(), Weekday::Sat);
    let table = DayCodeTable::new(codes);

    assert_eq!(
        table.weekday_indices("FSa"),
        vec![Weekday::Fri, Weekday::Sat]
    );
    assert_eq!(table.code_for(Weekday::Thu), Some("Th"));

    let only_long = DayCodeTable::new(BTreeMap::from([("Mon".to_string(), Weekday::Mon)]));
    assert_eq!(only_long.weekday_indices("MonMon"), vec![Weekday::Mon, Weekday::Mon]);
}

#[test]
fn test_parse_time_of_day() {
    assert_eq!(parse_time_of_day("10:00a").unwrap(), time(10, 0));
    assert_eq!(parse_time_of_day("12:30p").unwrap(), time(12, 30));
    assert_eq!(parse_time_of_day("2:30p").unwrap(), time(14, 30));
    assert_eq!(parse_time_of_day("12:00a").unwrap(), time(0, 0));
    assert_eq!(parse_time_of_day(" 9:05P ").unwrap(), time(9 + 12, 5));
}

#[test]
fn test_parse_time_of_day_rejects_placeholders() {
    for bad in ["TBA", "tba", "", "   ", "10:00", "10:00x", "25:00a", "10:7a", "ab:cda"] {
        match parse_time_of_day(bad) {
            Err(RowError::InvalidTimeFormat(_)) => {}
            other => panic!("{bad:?} should be InvalidTimeFormat, got {other:?}"),
        }
    }
}

#[test]
fn test_parse_time_range() {
    let r = parse_time_range("10:00a-10:50a").unwrap();
    assert_eq!(r.start, time(10, 0));
    assert_eq!(r.end, time(10, 50));

    let r = parse_time_range("11:30a - 2:30p").unwrap();
    assert_eq!((r.start, r.end), (time(11, 30), time(14, 30)));
}

#[test]
fn test_parse_time_range_does_not_reorder() {
    let r = parse_time_range("3:00p-1:00p").unwrap();
    assert_eq!((r.start, r.end), (time(15, 0), time(13, 0)));
}

#[test]
fn test_parse_time_range_errors() {
    for bad in ["TBA", "10:00a", "10:00a-", "-10:50a", "10:00a-TBA", "10:00a-10:50a-11:00a"] {
        assert!(
            matches!(parse_time_range(bad), Err(RowError::InvalidTimeFormat(_))),
            "{bad:?} should fail"
        );
    }
}
