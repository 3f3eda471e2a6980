//! Working-day counting.
//!
//! This module counts the calendar days in a sprint window that fall on a
//! working weekday. Whole weeks contribute one day per policy weekday, and
//! only the trailing partial week is scanned, so irregular policies (e.g. a
//! four-day week without Wednesday) and arbitrarily long ranges cost the same.

use chrono::{Duration, NaiveDate};

use crate::models::WorkingDayPolicy;

/// Counts working days in `[start, finish]`, both inclusive.
///
/// When `only_from` is given the range is clipped to
/// `[max(start, only_from), finish]`, which yields the remaining working days
/// of a sprint as seen from that day.
///
/// # Arguments
///
/// * `start` - The first day of the range
/// * `finish` - The last day of the range
/// * `policy` - The weekdays considered working days
/// * `only_from` - Optional lower clip, normally "today"
///
/// # Returns
///
/// The number of working days. Zero when `start > finish` or when
/// `only_from` lies after `finish`.
///
/// # Example
///
/// ```
/// use sprint_capacity::calculation::count_working_days;
/// use sprint_capacity::models::WorkingDayPolicy;
/// use chrono::NaiveDate;
///
/// let policy = WorkingDayPolicy::default();
/// // Mon 2024-01-01 to Fri 2024-01-12: two full weeks
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let finish = NaiveDate::from_ymd_opt(2024, 1, 12).unwrap();
/// assert_eq!(count_working_days(start, finish, &policy, None), 10);
///
/// // From the second Monday onwards
/// let today = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
/// assert_eq!(count_working_days(start, finish, &policy, Some(today)), 5);
/// ```
pub fn count_working_days(
    start: NaiveDate,
    finish: NaiveDate,
    policy: &WorkingDayPolicy,
    only_from: Option<NaiveDate>,
) -> u32 {
    let first = match only_from {
        Some(from) => start.max(from),
        None => start,
    };

    if first > finish {
        return 0;
    }

    let span = (finish - first).num_days() + 1;
    let full_weeks = span / 7;
    let whole_week_days = full_weeks * policy.days().len() as i64;

    let tail = (first + Duration::days(full_weeks * 7))
        .iter_days()
        .take_while(|day| *day <= finish)
        .filter(|day| policy.is_working_day(*day))
        .count() as i64;

    (whole_week_days + tail) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_two_full_weeks_have_ten_working_days() {
        let policy = WorkingDayPolicy::default();
        let count = count_working_days(
            make_date("2024-01-01"),
            make_date("2024-01-12"),
            &policy,
            None,
        );
        assert_eq!(count, 10);
    }

    #[test]
    fn test_single_day_range() {
        let policy = WorkingDayPolicy::default();
        // Tuesday
        assert_eq!(
            count_working_days(make_date("2024-01-02"), make_date("2024-01-02"), &policy, None),
            1
        );
        // Saturday
        assert_eq!(
            count_working_days(make_date("2024-01-06"), make_date("2024-01-06"), &policy, None),
            0
        );
    }

    #[test]
    fn test_inverted_range_counts_zero() {
        let policy = WorkingDayPolicy::default();
        let count = count_working_days(
            make_date("2024-01-12"),
            make_date("2024-01-01"),
            &policy,
            None,
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_only_from_clips_range() {
        let policy = WorkingDayPolicy::default();
        // Thursday 2024-01-04 onwards: Thu, Fri, then the full second week
        let count = count_working_days(
            make_date("2024-01-01"),
            make_date("2024-01-12"),
            &policy,
            Some(make_date("2024-01-04")),
        );
        assert_eq!(count, 7);
    }

    #[test]
    fn test_only_from_before_start_equals_total() {
        let policy = WorkingDayPolicy::default();
        let start = make_date("2024-01-01");
        let finish = make_date("2024-01-12");
        assert_eq!(
            count_working_days(start, finish, &policy, Some(make_date("2023-12-15"))),
            count_working_days(start, finish, &policy, None)
        );
    }

    #[test]
    fn test_only_from_after_finish_counts_zero() {
        let policy = WorkingDayPolicy::default();
        let count = count_working_days(
            make_date("2024-01-01"),
            make_date("2024-01-12"),
            &policy,
            Some(make_date("2024-01-13")),
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_only_from_on_finish_counts_last_day() {
        let policy = WorkingDayPolicy::default();
        let count = count_working_days(
            make_date("2024-01-01"),
            make_date("2024-01-12"),
            &policy,
            Some(make_date("2024-01-12")),
        );
        assert_eq!(count, 1);
    }

    #[test]
    fn test_non_contiguous_policy() {
        // Four-day week without Wednesday
        let policy = WorkingDayPolicy::new([Weekday::Mon, Weekday::Tue, Weekday::Thu, Weekday::Fri]);
        let count = count_working_days(
            make_date("2024-01-01"),
            make_date("2024-01-12"),
            &policy,
            None,
        );
        assert_eq!(count, 8);
    }

    #[test]
    fn test_weekend_only_policy() {
        let policy = WorkingDayPolicy::new([Weekday::Sat, Weekday::Sun]);
        let count = count_working_days(
            make_date("2024-01-01"),
            make_date("2024-01-14"),
            &policy,
            None,
        );
        assert_eq!(count, 4);
    }

    #[test]
    fn test_empty_policy_counts_zero() {
        let policy = WorkingDayPolicy::new([]);
        let count = count_working_days(
            make_date("2024-01-01"),
            make_date("2024-01-31"),
            &policy,
            None,
        );
        assert_eq!(count, 0);
    }

    #[test]
    fn test_range_across_month_boundary() {
        let policy = WorkingDayPolicy::default();
        // Mon 2024-01-29 to Fri 2024-02-09
        let count = count_working_days(
            make_date("2024-01-29"),
            make_date("2024-02-09"),
            &policy,
            None,
        );
        assert_eq!(count, 10);
    }

    #[test]
    fn test_leap_year_has_262_weekdays() {
        let policy = WorkingDayPolicy::default();
        let count = count_working_days(
            make_date("2024-01-01"),
            make_date("2024-12-31"),
            &policy,
            None,
        );
        assert_eq!(count, 262);
    }

    #[test]
    fn test_partial_weeks_match_daily_scan() {
        let policy = WorkingDayPolicy::new([Weekday::Sun, Weekday::Tue, Weekday::Thu]);
        let start = make_date("2024-01-03");
        for len in 0..40 {
            let finish = start + Duration::days(len);
            let scanned = start
                .iter_days()
                .take_while(|day| *day <= finish)
                .filter(|day| policy.is_working_day(*day))
                .count() as u32;
            assert_eq!(
                count_working_days(start, finish, &policy, None),
                scanned,
                "Mismatch for range ending {}",
                finish
            );
        }
    }

    #[test]
    fn test_unbounded_range_counts_weekly() {
        let policy = WorkingDayPolicy::default();
        // 5200 whole weeks starting on a Monday
        let start = make_date("2024-01-01");
        let finish = start + Duration::days(5200 * 7 - 1);
        assert_eq!(count_working_days(start, finish, &policy, None), 26_000);

        let everything = count_working_days(
            NaiveDate::MIN,
            NaiveDate::MAX,
            &policy,
            Some(make_date("2024-01-08")),
        );
        assert!(everything > 26_000);
    }
}
