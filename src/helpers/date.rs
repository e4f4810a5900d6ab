//! Date helper functions

use chrono::Datelike;

/// Placeholder replaced with the years of experience in descriptions
pub const YEARS_PLACEHOLDER: &str = ":years";

/// Whole calendar years between `start_year` and the year of `now`.
///
/// Takes the clock value as a parameter so every render can recompute it
/// and tests can pin it.
///
/// # Examples
/// ```ignore
/// years_of_experience(&NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), 2020) // -> 5
/// ```
pub fn years_of_experience<D: Datelike>(now: &D, start_year: i32) -> i32 {
    now.year() - start_year
}

/// Replace every `:years` placeholder in `template`
pub fn interpolate_years(template: &str, years: i32) -> String {
    template.replace(YEARS_PLACEHOLDER, &years.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_years_of_experience() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(years_of_experience(&date, 2020), 5);

        let first_day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(years_of_experience(&first_day, 2020), 0);
    }

    #[test]
    fn test_years_of_experience_accepts_datetimes() {
        let now = Utc.with_ymd_and_hms(2031, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(years_of_experience(&now, 2020), 11);
    }

    #[test]
    fn test_interpolate_years() {
        assert_eq!(
            interpolate_years("with :years years of experience", 5),
            "with 5 years of experience"
        );
        assert_eq!(interpolate_years("no placeholder", 5), "no placeholder");
    }
}
