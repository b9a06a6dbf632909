use crate::models::{
    CalendarResponse, Classification, CompletionRecord, DayCellView, Topic, TopicFlags,
};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use tracing::warn;

/// Collapses a raw record list into one entry per date, last write wins.
/// Records whose date does not parse as `YYYY-MM-DD` are dropped. Every
/// other engine operation runs on this view, which also keeps the streak
/// scan bound sound in the presence of duplicates.
pub fn dedupe(records: &[CompletionRecord]) -> BTreeMap<NaiveDate, TopicFlags> {
    let mut by_date = BTreeMap::new();
    for record in records {
        match NaiveDate::parse_from_str(&record.date, "%Y-%m-%d") {
            Ok(date) => {
                by_date.insert(date, record.flags);
            }
            Err(err) => {
                warn!("dropping record with malformed date {:?}: {err}", record.date);
            }
        }
    }
    by_date
}

/// Classifies every day of `(year, month)` relative to `today`.
/// Returns `None` when the month is not a valid calendar month.
pub fn classify_month(
    records: &[CompletionRecord],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Option<CalendarResponse> {
    let by_date = dedupe(records);
    let mut days = Vec::with_capacity(31);

    for day in 1..=days_in_month(year, month)? {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let flags = by_date.get(&date).copied();
        let status = if date > today {
            Classification::Future
        } else if flags.is_some_and(|f| f.is_fully_complete()) {
            Classification::Complete
        } else {
            Classification::Incomplete
        };
        days.push(DayCellView {
            day,
            date: date_key(date),
            status,
            flags,
        });
    }

    Some(CalendarResponse { year, month, days })
}

/// Counts consecutive fully-complete days ending at (or immediately
/// before) `today`, walking backward one calendar day at a time.
///
/// A missing record for `today` itself is skipped rather than breaking
/// the chain, so an unfinished today does not reset the streak. Any
/// other missing day, or a partially-complete day, ends the scan.
pub fn compute_streak(records: &[CompletionRecord], today: NaiveDate) -> u32 {
    let by_date = dedupe(records);
    let mut streak = 0;
    let mut check = today;

    // The today-skip uses at most one step, so len + 1 covers the
    // longest possible chain over a deduplicated map.
    for _ in 0..=by_date.len() {
        match by_date.get(&check) {
            None if check == today => check = check - Duration::days(1),
            None => break,
            Some(flags) if flags.is_fully_complete() => {
                streak += 1;
                check = check - Duration::days(1);
            }
            Some(_) => break,
        }
    }

    streak
}

/// Returns an updated record list with `topic` set to `value` on `date`.
/// Existing records for the date are updated in place (all duplicate
/// occurrences, so a last-write-wins read stays consistent); otherwise a
/// fresh record is appended with the other flags false. Pure: the input
/// list is never mutated.
pub fn upsert_topic(
    records: &[CompletionRecord],
    date: &str,
    topic: Topic,
    value: bool,
) -> Vec<CompletionRecord> {
    let mut updated = records.to_vec();
    let mut found = false;
    for record in updated.iter_mut().filter(|r| r.date == date) {
        record.flags.set(topic, value);
        found = true;
    }
    if !found {
        let mut record = CompletionRecord::new(date);
        record.flags.set(topic, value);
        updated.push(record);
    }
    updated
}

/// True when a record exists for `date` with all three topics done.
pub fn all_complete_on(records: &[CompletionRecord], date: NaiveDate) -> bool {
    dedupe(records)
        .get(&date)
        .is_some_and(|flags| flags.is_fully_complete())
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, ai: bool, code: bool, trading: bool) -> CompletionRecord {
        CompletionRecord {
            date: date.to_string(),
            flags: TopicFlags {
                ai_knowledge: ai,
                codebasics: code,
                trading,
            },
        }
    }

    fn complete(date: &str) -> CompletionRecord {
        record(date, true, true, true)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn streak_empty_records_is_zero() {
        assert_eq!(compute_streak(&[], day(2024, 5, 10)), 0);
    }

    #[test]
    fn streak_counts_today_when_complete() {
        let records = vec![complete("2024-05-10")];
        assert_eq!(compute_streak(&records, day(2024, 5, 10)), 1);
    }

    #[test]
    fn streak_leniency_skips_missing_today() {
        let records = vec![complete("2024-05-09")];
        assert_eq!(compute_streak(&records, day(2024, 5, 10)), 1);
    }

    #[test]
    fn streak_zero_when_yesterday_missing() {
        let records = vec![complete("2024-05-01")];
        assert_eq!(compute_streak(&records, day(2024, 5, 10)), 0);
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let records = vec![
            complete("2024-05-08"),
            complete("2024-05-09"),
            complete("2024-05-10"),
        ];
        assert_eq!(compute_streak(&records, day(2024, 5, 10)), 3);
    }

    #[test]
    fn streak_breaks_at_gap() {
        let records = vec![complete("2024-05-08"), complete("2024-05-10")];
        assert_eq!(compute_streak(&records, day(2024, 5, 10)), 1);
    }

    #[test]
    fn streak_breaks_at_partial_day() {
        let records = vec![
            complete("2024-05-08"),
            record("2024-05-09", true, true, false),
            complete("2024-05-10"),
        ];
        assert_eq!(compute_streak(&records, day(2024, 5, 10)), 1);
    }

    #[test]
    fn streak_partial_today_ends_scan_without_counting() {
        let records = vec![complete("2024-05-09"), record("2024-05-10", true, false, false)];
        assert_eq!(compute_streak(&records, day(2024, 5, 10)), 0);
    }

    #[test]
    fn streak_crosses_month_boundary() {
        let records = vec![
            complete("2024-04-29"),
            complete("2024-04-30"),
            complete("2024-05-01"),
        ];
        assert_eq!(compute_streak(&records, day(2024, 5, 1)), 3);
    }

    #[test]
    fn streak_crosses_year_boundary() {
        let records = vec![complete("2023-12-31"), complete("2024-01-01")];
        assert_eq!(compute_streak(&records, day(2024, 1, 1)), 2);
    }

    #[test]
    fn streak_bounded_by_record_count_plus_one() {
        let records: Vec<_> = (1..=20)
            .map(|d| complete(&format!("2024-05-{d:02}")))
            .collect();
        let streak = compute_streak(&records, day(2024, 5, 20));
        assert!(streak as usize <= records.len() + 1);
        assert_eq!(streak, 20);
    }

    #[test]
    fn streak_duplicate_dates_use_last_write() {
        // The earlier complete entry for 05-10 is superseded by a
        // partial one, so the day must not count.
        let records = vec![
            complete("2024-05-09"),
            complete("2024-05-10"),
            record("2024-05-10", true, false, false),
        ];
        assert_eq!(compute_streak(&records, day(2024, 5, 10)), 0);
    }

    #[test]
    fn dedupe_drops_malformed_dates() {
        let records = vec![record("not-a-date", true, true, true), complete("2024-05-10")];
        let by_date = dedupe(&records);
        assert_eq!(by_date.len(), 1);
        assert!(by_date.contains_key(&day(2024, 5, 10)));
    }

    #[test]
    fn classify_month_marks_future_days() {
        let cal = classify_month(&[], 2024, 5, day(2024, 5, 10)).unwrap();
        assert_eq!(cal.days.len(), 31);
        for cell in &cal.days {
            if cell.day > 10 {
                assert_eq!(cell.status, Classification::Future);
            } else {
                assert_eq!(cell.status, Classification::Incomplete);
            }
        }
    }

    #[test]
    fn classify_month_future_record_stays_future() {
        let records = vec![complete("2024-05-20")];
        let cal = classify_month(&records, 2024, 5, day(2024, 5, 10)).unwrap();
        assert_eq!(cal.days[19].status, Classification::Future);
    }

    #[test]
    fn classify_month_complete_and_partial_days() {
        let records = vec![complete("2024-05-08"), record("2024-05-09", true, false, true)];
        let cal = classify_month(&records, 2024, 5, day(2024, 5, 10)).unwrap();
        assert_eq!(cal.days[7].status, Classification::Complete);
        assert_eq!(cal.days[8].status, Classification::Incomplete);
        assert_eq!(cal.days[9].status, Classification::Incomplete);
        assert!(cal.days[8].flags.is_some());
        assert!(cal.days[9].flags.is_none());
    }

    #[test]
    fn classify_month_partial_today_is_incomplete() {
        let records = vec![record("2024-05-10", true, true, false)];
        let cal = classify_month(&records, 2024, 5, day(2024, 5, 10)).unwrap();
        assert_eq!(cal.days[9].status, Classification::Incomplete);
    }

    #[test]
    fn classify_month_handles_leap_february() {
        let cal = classify_month(&[], 2024, 2, day(2024, 2, 15)).unwrap();
        assert_eq!(cal.days.len(), 29);
        let cal = classify_month(&[], 2023, 2, day(2023, 2, 15)).unwrap();
        assert_eq!(cal.days.len(), 28);
    }

    #[test]
    fn classify_month_rejects_invalid_month() {
        assert!(classify_month(&[], 2024, 13, day(2024, 5, 10)).is_none());
        assert!(classify_month(&[], 2024, 0, day(2024, 5, 10)).is_none());
    }

    #[test]
    fn upsert_creates_record_with_other_flags_false() {
        let updated = upsert_topic(&[], "2024-05-10", Topic::Codebasics, true);
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].date, "2024-05-10");
        assert!(updated[0].flags.codebasics);
        assert!(!updated[0].flags.ai_knowledge);
        assert!(!updated[0].flags.trading);
    }

    #[test]
    fn upsert_updates_only_the_named_flag() {
        let records = vec![record("2024-05-10", true, false, true)];
        let updated = upsert_topic(&records, "2024-05-10", Topic::Codebasics, true);
        assert_eq!(updated.len(), 1);
        assert!(updated[0].flags.is_fully_complete());

        let reverted = upsert_topic(&updated, "2024-05-10", Topic::Trading, false);
        assert!(reverted[0].flags.ai_knowledge);
        assert!(reverted[0].flags.codebasics);
        assert!(!reverted[0].flags.trading);
    }

    #[test]
    fn upsert_is_idempotent() {
        let once = upsert_topic(&[], "2024-05-10", Topic::AiKnowledge, true);
        let twice = upsert_topic(&once, "2024-05-10", Topic::AiKnowledge, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn upsert_does_not_mutate_input() {
        let records = vec![record("2024-05-10", false, false, false)];
        let _ = upsert_topic(&records, "2024-05-10", Topic::Trading, true);
        assert!(!records[0].flags.trading);
    }

    #[test]
    fn upsert_updates_every_duplicate_occurrence() {
        let records = vec![
            record("2024-05-10", true, false, false),
            record("2024-05-10", false, true, false),
        ];
        let updated = upsert_topic(&records, "2024-05-10", Topic::Trading, true);
        assert_eq!(updated.len(), 2);
        assert!(updated.iter().all(|r| r.flags.trading));
        // Last write still wins on read.
        assert!(dedupe(&updated)[&day(2024, 5, 10)].codebasics);
    }

    #[test]
    fn all_complete_on_requires_every_flag() {
        let records = vec![record("2024-05-10", true, true, false)];
        assert!(!all_complete_on(&records, day(2024, 5, 10)));
        let records = upsert_topic(&records, "2024-05-10", Topic::Trading, true);
        assert!(all_complete_on(&records, day(2024, 5, 10)));
        assert!(!all_complete_on(&records, day(2024, 5, 11)));
    }
}
