//! Easter Sunday computation (Gauss/Meeus anonymous Gregorian algorithm).
//!
//! Every moveable feast and the Holy Week lock are offsets from this date.

use crate::date::{is_leap_year, Date};
use urlaub_core::errors::Result;
use urlaub_core::Year;

/// Easter Sunday as `(month, day)` for `year`.
///
/// Pure integer arithmetic; the month is always 3 or 4.
pub fn easter_month_day(year: Year) -> (u32, u32) {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    ((n / 31) as u32, (n % 31 + 1) as u32)
}

/// Day of the year (1-based) of Easter Sunday in `year`.
pub fn easter_sunday_day_of_year(year: Year) -> u32 {
    let (month, day) = easter_month_day(year);
    let leap = u32::from(is_leap_year(year));
    match month {
        3 => 59 + leap + day,
        _ => 90 + leap + day,
    }
}

/// Easter Sunday of `year` as a [`Date`].
///
/// Fails only when `year` lies outside the supported range.
pub fn easter_sunday(year: Year) -> Result<Date> {
    let (month, day) = easter_month_day(year);
    Date::from_ymd(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_easter_dates() {
        let cases = [
            (2008, 3, 23),
            (2019, 4, 21),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2038, 4, 25),
            (2285, 3, 22),
        ];
        for (y, m, d) in cases {
            assert_eq!(easter_month_day(y), (m, d), "Easter {y}");
        }
    }

    #[test]
    fn day_of_year_matches_date() {
        for y in [2000, 2023, 2024, 2025, 2100] {
            let e = easter_sunday(y).unwrap();
            assert_eq!(easter_sunday_day_of_year(y), e.day_of_year(), "year {y}");
        }
    }
}
