//! Raw-line validators used by the descriptor table
//!
//! Each validator is a pure predicate. Numeric and date validators ignore
//! surrounding whitespace; text validators only reject blank lines.

use crate::time;

/// Non-empty after trimming
pub fn is_non_blank(raw: &str) -> bool {
    !raw.trim().is_empty()
}

/// Integer in [1, 5]
pub fn is_song_rating(raw: &str) -> bool {
    matches!(raw.trim().parse::<i64>(), Ok(v) if (1..=5).contains(&v))
}

/// Integer >= 0 that fits a day count
pub fn is_stale_days(raw: &str) -> bool {
    matches!(raw.trim().parse::<i32>(), Ok(v) if v >= 0)
}

/// Integer >= 0; index properties get bounds-checked custom validators on top
pub fn is_non_negative_integer(raw: &str) -> bool {
    matches!(raw.trim().parse::<i64>(), Ok(v) if v >= 0)
}

/// Exactly one character, 'y' or 'n' in either case
pub fn is_yes_no(raw: &str) -> bool {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => matches!(c.to_ascii_lowercase(), 'y' | 'n'),
        _ => false,
    }
}

/// ISO-8601 local date-time (`2023-03-09T11:30:00`)
pub fn is_local_date_time(raw: &str) -> bool {
    time::parse_local_date_time(raw).is_some()
}

/// Comma-separated list with no blank entries
pub fn is_genre_list(raw: &str) -> bool {
    is_non_blank(raw) && raw.split(',').all(is_non_blank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert!(is_non_blank("Hey Jude"));
        assert!(is_non_blank(" x "));
        assert!(!is_non_blank(""));
        assert!(!is_non_blank("   \t"));
    }

    #[test]
    fn test_song_rating_bounds() {
        for ok in ["1", "3", "5", " 5 "] {
            assert!(is_song_rating(ok), "{ok:?} should be accepted");
        }
        for bad in ["0", "6", "-1", "", "three", "4.5"] {
            assert!(!is_song_rating(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_non_negative_integer() {
        assert!(!is_non_negative_integer("7a"));
        assert!(is_non_negative_integer("0"));
        assert!(!is_non_negative_integer("-1"));
    }

    #[test]
    fn test_stale_days() {
        assert!(is_stale_days("0"));
        assert!(is_stale_days("365"));
        assert!(!is_stale_days("-3"));
        assert!(!is_stale_days("99999999999"));
        assert!(!is_stale_days(""));
    }

    #[test]
    fn test_yes_no_single_char() {
        for ok in ["y", "Y", "n", "N", " y "] {
            assert!(is_yes_no(ok), "{ok:?} should be accepted");
        }
        for bad in ["", "yes", "no", "x", "yn"] {
            assert!(!is_yes_no(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_local_date_time() {
        assert!(is_local_date_time("2023-03-09T11:30:00"));
        assert!(is_local_date_time("2023-03-09T11:30"));
        assert!(!is_local_date_time("2023-03-09 11:30:00"));
        assert!(!is_local_date_time(""));
    }

    #[test]
    fn test_genre_list() {
        assert!(is_genre_list("rock"));
        assert!(is_genre_list("rock, pop,rap"));
        assert!(!is_genre_list(""));
        assert!(!is_genre_list("rock,,pop"));
        assert!(!is_genre_list("rock, "));
        assert!(!is_genre_list(","));
    }
}
