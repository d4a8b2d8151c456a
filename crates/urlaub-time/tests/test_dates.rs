//! Integration tests for `Date` and `DateRange`.

use proptest::prelude::*;
use urlaub_time::{Date, DateRange, Weekday};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_weekday_sequence() {
    let monday = date(2024, 1, 1);
    let names: Vec<Weekday> = (0..7).map(|i| (monday + i).weekday()).collect();
    assert_eq!(
        names,
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ]
    );
}

#[test]
fn test_leap_years() {
    assert!(Date::from_ymd(2000, 2, 29).is_ok());
    assert!(Date::from_ymd(2100, 2, 29).is_err());
    assert_eq!(DateRange::year(2024).unwrap().len_days(), 366);
    assert_eq!(DateRange::year(2100).unwrap().len_days(), 365);
}

#[test]
fn test_parse_equivalent_spellings() {
    assert_eq!(Date::parse("2024-01-04").unwrap(), Date::parse("04.01.2024").unwrap());
    assert_eq!("2024-01-04".parse::<Date>().unwrap(), date(2024, 1, 4));
}

proptest! {
    #[test]
    fn prop_iso_string_roundtrip(offset in 0i32..100_000) {
        let d = date(1700, 1, 1) + offset;
        prop_assert_eq!(Date::parse(&d.to_iso_string()).unwrap(), d);
    }

    #[test]
    fn prop_range_length_matches_iteration(start in 0i32..5000, len in 0i32..400) {
        let s = date(2000, 1, 1) + start;
        let r = DateRange::new(s, s + len).unwrap();
        prop_assert_eq!(r.len_days() as usize, r.days().count());
    }
}
