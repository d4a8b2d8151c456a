//! `Weekday`: day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7), ISO style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-first index (Sunday = 0 … Saturday = 6), the
    /// numbering storage layers and browsers use.
    pub fn sunday_index(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Return `true` for the weekly rest day. Only Sunday qualifies;
    /// Saturday is an ordinary working day.
    pub fn is_rest_day(&self) -> bool {
        matches!(self, Weekday::Sunday)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Montag",
            Weekday::Tuesday => "Dienstag",
            Weekday::Wednesday => "Mittwoch",
            Weekday::Thursday => "Donnerstag",
            Weekday::Friday => "Freitag",
            Weekday::Saturday => "Samstag",
            Weekday::Sunday => "Sonntag",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_first_numbering() {
        assert_eq!(Weekday::Sunday.sunday_index(), 0);
        assert_eq!(Weekday::Monday.sunday_index(), 1);
        assert_eq!(Weekday::Saturday.sunday_index(), 6);
    }

    #[test]
    fn only_sunday_rests() {
        assert!(Weekday::Sunday.is_rest_day());
        assert!(!Weekday::Saturday.is_rest_day());
        assert!(!Weekday::Monday.is_rest_day());
    }

    #[test]
    fn ordinal_roundtrip() {
        for n in 1..=7 {
            assert_eq!(Weekday::from_ordinal(n).map(|w| w.ordinal()), Some(n));
        }
        assert_eq!(Weekday::from_ordinal(0), None);
    }
}
