use crate::models::{DailyLogEntry, TrackerData};
use chrono::{Datelike, Duration, NaiveDate};

/// Recomputes both streak fields from the daily logs. `current_streak` is
/// overwritten; `longest_streak` is max-ed with its previous value and never
/// shrinks, even when the logs are empty or were edited down.
pub fn update_streaks(data: &mut TrackerData, today: NaiveDate) {
    let (current, longest) = compute_streaks(&data.daily_logs, today);
    data.current_streak = current;
    data.longest_streak = data.longest_streak.max(longest);
}

/// Pure streak computation over the logs for a caller-supplied `today`.
/// Returns `(current, longest_run)` where `longest_run` is the longest
/// consecutive-day run present in the logs, before any max-with-previous.
pub fn compute_streaks(logs: &[DailyLogEntry], today: NaiveDate) -> (u32, u32) {
    let mut dates: Vec<NaiveDate> = logs.iter().map(|log| log.date).collect();
    dates.sort_unstable();

    // Walk backward from the most recent entry, comparing each entry's
    // day-gap from today against the count of days already accepted; the
    // walk breaks at the first mismatch. The current streak stays 0 unless
    // today itself has an entry.
    let mut includes_today = false;
    let mut run = 0i64;
    for date in dates.iter().rev() {
        let gap = (today - *date).num_days();
        if gap == 0 {
            includes_today = true;
            run += 1;
        } else if gap == run {
            run += 1;
        } else {
            break;
        }
    }
    let current = if includes_today { run as u32 } else { 0 };

    // Longest run: forward scan, counter resets whenever the gap to the
    // previous entry is not exactly one day.
    let mut longest = 0u32;
    let mut streak = 0u32;
    for (i, date) in dates.iter().enumerate() {
        if i == 0 {
            streak = 1;
        } else if (*date - dates[i - 1]).num_days() == 1 {
            streak += 1;
        } else {
            streak = 1;
        }
        longest = longest.max(streak);
    }

    (current, longest)
}

pub fn total_hours(logs: &[DailyLogEntry]) -> f64 {
    logs.iter().map(|log| log.hours).sum()
}

pub fn average_hours(logs: &[DailyLogEntry]) -> f64 {
    if logs.is_empty() {
        0.0
    } else {
        total_hours(logs) / logs.len() as f64
    }
}

/// Check-ins within the trailing week, today inclusive. Seven of these
/// unlock the weekly review.
pub const REVIEW_UNLOCK_DAYS: usize = 7;

pub fn recent_check_in_count(logs: &[DailyLogEntry], today: NaiveDate) -> usize {
    logs.iter()
        .filter(|log| (today - log.date).num_days() <= 7)
        .count()
}

/// The upcoming Sunday. On a Sunday this is the next one, seven days out,
/// never today.
pub fn week_ending(today: NaiveDate) -> NaiveDate {
    let days_until_sunday = match (7 - today.weekday().num_days_from_sunday() as i64) % 7 {
        0 => 7,
        days => days,
    };
    today + Duration::days(days_until_sunday)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(date: NaiveDate) -> DailyLogEntry {
        DailyLogEntry {
            date,
            hours: 2.0,
            topic: "rust".to_string(),
            proof: "https://example.com/notes".to_string(),
            is_low_energy: false,
            timestamp: Utc::now(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_logs_yield_zero_streaks() {
        assert_eq!(compute_streaks(&[], day(2026, 1, 5)), (0, 0));
    }

    #[test]
    fn single_entry_today_counts_one() {
        let today = day(2026, 1, 5);
        let logs = vec![entry(today)];
        assert_eq!(compute_streaks(&logs, today), (1, 1));
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let today = day(2026, 1, 5);
        let logs = vec![
            entry(today),
            entry(today - Duration::days(1)),
            entry(today - Duration::days(2)),
        ];
        let (current, longest) = compute_streaks(&logs, today);
        assert_eq!(current, 3);
        assert!(longest >= 3);
    }

    #[test]
    fn no_entry_today_means_zero_current_streak() {
        let today = day(2026, 1, 5);
        let logs = vec![
            entry(today - Duration::days(2)),
            entry(today - Duration::days(3)),
        ];
        let (current, longest) = compute_streaks(&logs, today);
        assert_eq!(current, 0);
        assert_eq!(longest, 2);
    }

    #[test]
    fn current_streak_stops_at_first_gap() {
        let today = day(2026, 1, 10);
        // Contiguous run ending today, then a hole, then an older run.
        let logs = vec![
            entry(today),
            entry(today - Duration::days(1)),
            entry(today - Duration::days(4)),
            entry(today - Duration::days(5)),
        ];
        let (current, longest) = compute_streaks(&logs, today);
        assert_eq!(current, 2);
        assert_eq!(longest, 2);
    }

    #[test]
    fn longest_run_found_in_older_history() {
        let today = day(2026, 2, 1);
        let logs = vec![
            entry(day(2026, 1, 10)),
            entry(day(2026, 1, 11)),
            entry(day(2026, 1, 12)),
            entry(day(2026, 1, 13)),
            entry(day(2026, 1, 20)),
        ];
        let (current, longest) = compute_streaks(&logs, today);
        assert_eq!(current, 0);
        assert_eq!(longest, 4);
    }

    #[test]
    fn longest_streak_never_decreases() {
        let today = day(2026, 1, 5);
        let mut data = TrackerData::new(Utc::now());
        data.longest_streak = 10;
        data.daily_logs.push(entry(today));

        update_streaks(&mut data, today);
        assert_eq!(data.current_streak, 1);
        assert_eq!(data.longest_streak, 10);
    }

    #[test]
    fn longest_streak_retained_on_empty_logs() {
        let mut data = TrackerData::new(Utc::now());
        data.longest_streak = 4;
        update_streaks(&mut data, day(2026, 1, 5));
        assert_eq!(data.current_streak, 0);
        assert_eq!(data.longest_streak, 4);
    }

    #[test]
    fn week_ending_on_sunday_is_next_sunday() {
        let sunday = day(2026, 1, 4);
        assert_eq!(week_ending(sunday), day(2026, 1, 11));
    }

    #[test]
    fn week_ending_midweek_is_upcoming_sunday() {
        let wednesday = day(2026, 1, 7);
        assert_eq!(week_ending(wednesday), day(2026, 1, 11));
    }

    #[test]
    fn history_totals_and_average() {
        let today = day(2026, 1, 5);
        let mut logs = vec![entry(today), entry(today - Duration::days(1))];
        logs[0].hours = 2.5;
        logs[1].hours = 1.5;
        assert_eq!(total_hours(&logs), 4.0);
        assert_eq!(average_hours(&logs), 2.0);
        assert_eq!(average_hours(&[]), 0.0);
    }

    #[test]
    fn review_gate_counts_trailing_week_only() {
        let today = day(2026, 1, 15);
        let mut logs: Vec<DailyLogEntry> = (0..7)
            .map(|offset| entry(today - Duration::days(offset)))
            .collect();
        logs.push(entry(today - Duration::days(20)));
        assert_eq!(recent_check_in_count(&logs, today), 7);
    }
}
