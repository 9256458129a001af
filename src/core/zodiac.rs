use crate::domain::model::ZodiacId;
use chrono::{Datelike, NaiveDate};

const ANCHOR_YEAR: i32 = 1900;

/// 입춘 cutoff. Births before Feb 4 belong to the previous zodiac year.
const SPRING_START_MONTH: u32 = 2;
const SPRING_START_DAY: u32 = 4;

/// Zodiac for a calendar year, anchored at 1900 = rat. Total over `i32`.
pub fn calculate_zodiac(year: i32) -> ZodiacId {
    let offset = (i64::from(year) - i64::from(ANCHOR_YEAR)).rem_euclid(12);
    ZodiacId::ALL[offset as usize]
}

/// Zodiac for a birth date, rolling January and early-February births
/// back a year. This approximates the start-of-spring boundary with a
/// fixed date; it does not convert to the lunar calendar.
pub fn calculate_zodiac_from_birth(year: i32, month: u32, day: u32) -> ZodiacId {
    calculate_zodiac(zodiac_year(year, month, day))
}

pub fn calculate_zodiac_from_date(date: NaiveDate) -> ZodiacId {
    calculate_zodiac_from_birth(date.year(), date.month(), date.day())
}

/// The year whose zodiac applies to a birth on `year-month-day`.
pub fn zodiac_year(year: i32, month: u32, day: u32) -> i32 {
    let before_spring =
        month < SPRING_START_MONTH || (month == SPRING_START_MONTH && day < SPRING_START_DAY);
    if before_spring {
        year.wrapping_sub(1)
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ZodiacId::*;

    #[test]
    fn test_anchor_and_full_cycle() {
        let expected = [
            Rat, Ox, Tiger, Rabbit, Dragon, Snake, Horse, Goat, Monkey, Rooster, Dog, Pig,
        ];
        for (i, id) in expected.iter().enumerate() {
            assert_eq!(calculate_zodiac(1900 + i as i32), *id);
        }
    }

    #[test]
    fn test_periodic_over_wide_range() {
        for year in -3000..3000 {
            assert_eq!(calculate_zodiac(year), calculate_zodiac(year + 12));
        }
    }

    #[test]
    fn test_total_at_extremes() {
        // only checks that nothing overflows
        let _ = calculate_zodiac(i32::MIN);
        let _ = calculate_zodiac(i32::MAX);
        let _ = calculate_zodiac_from_birth(i32::MIN, 1, 1);
    }

    #[test]
    fn test_negative_years_wrap() {
        assert_eq!(calculate_zodiac(1888), Rat);
        assert_eq!(calculate_zodiac(1899), Pig);
        assert_eq!(calculate_zodiac(-1), calculate_zodiac(11));
    }

    #[test]
    fn test_known_years() {
        assert_eq!(calculate_zodiac(1984), Rat);
        assert_eq!(calculate_zodiac(1990), Horse);
        assert_eq!(calculate_zodiac(2000), Dragon);
        assert_eq!(calculate_zodiac(2024), Dragon);
        assert_eq!(calculate_zodiac(2025), Snake);
    }

    #[test]
    fn test_january_rolls_back() {
        for day in 1..=31 {
            assert_eq!(calculate_zodiac_from_birth(2000, 1, day), calculate_zodiac(1999));
        }
    }

    #[test]
    fn test_february_boundary() {
        assert_eq!(calculate_zodiac_from_birth(2000, 2, 3), calculate_zodiac(1999));
        assert_eq!(calculate_zodiac_from_birth(2000, 2, 4), calculate_zodiac(2000));
        assert_eq!(calculate_zodiac_from_birth(2000, 2, 29), Dragon);
    }

    #[test]
    fn test_rest_of_year_unchanged() {
        for month in 3..=12 {
            assert_eq!(calculate_zodiac_from_birth(1990, month, 15), Horse);
        }
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(1985, 2, 3).unwrap();
        assert_eq!(calculate_zodiac_from_date(date), Rat);
        let date = NaiveDate::from_ymd_opt(1985, 2, 4).unwrap();
        assert_eq!(calculate_zodiac_from_date(date), Ox);
    }
}
