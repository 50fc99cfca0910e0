#[cfg(test)]
mod tests {
    use rollcall::libs::record::{AttendanceRecord, LogEntry, RecordId, Seq};
    use rollcall::libs::summary::{aggregate_duration, aggregate_status, summarize, DayStatus};

    fn record(date: &str, seq: Seq, status: &str, duration: Option<f64>) -> AttendanceRecord {
        AttendanceRecord {
            id: RecordId::Plain("65a1f0c2".to_string()),
            user: "worker".to_string(),
            date: date.to_string(),
            seq,
            log: Vec::new(),
            status: status.to_string(),
            duration,
            error: None,
            at: "2025-02-01T09:05:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_status_single_present_is_pending() {
        assert_eq!(aggregate_status(Some("passed"), None), DayStatus::Pending);
        assert_eq!(aggregate_status(None, Some("passed")), DayStatus::Pending);
        assert_eq!(aggregate_status(Some("pending"), None), DayStatus::Pending);
    }

    #[test]
    fn test_status_single_failed_is_still_pending() {
        // A lone record is pending even when its own status is failed.
        assert_eq!(aggregate_status(Some("failed"), None), DayStatus::Pending);
        assert_eq!(aggregate_status(None, Some("failed")), DayStatus::Pending);
    }

    #[test]
    fn test_status_either_failed_fails_the_day() {
        assert_eq!(aggregate_status(Some("failed"), Some("passed")), DayStatus::Failed);
        assert_eq!(aggregate_status(Some("passed"), Some("failed")), DayStatus::Failed);
        assert_eq!(aggregate_status(Some("failed"), Some("failed")), DayStatus::Failed);
    }

    #[test]
    fn test_status_both_passed() {
        assert_eq!(aggregate_status(Some("passed"), Some("passed")), DayStatus::Passed);
    }

    #[test]
    fn test_status_empty_string_counts_as_absent() {
        // Upstream truthiness: an empty status behaves like a missing record.
        assert_eq!(aggregate_status(Some(""), Some("passed")), DayStatus::Pending);
        assert_eq!(aggregate_status(Some("passed"), Some("")), DayStatus::Pending);
        assert_eq!(aggregate_status(Some(""), Some("")), DayStatus::Passed);
    }

    #[test]
    fn test_status_both_absent_falls_through_to_passed() {
        assert_eq!(aggregate_status(None, None), DayStatus::Passed);
    }

    #[test]
    fn test_status_is_case_sensitive() {
        // Only the exact literal fails the day; aggregation does not fold case.
        assert_eq!(aggregate_status(Some("Failed"), Some("passed")), DayStatus::Passed);
    }

    #[test]
    fn test_duration_average_of_both() {
        assert_eq!(aggregate_duration(Some(4000.0), Some(6000.0)), "5.0s");
        assert_eq!(aggregate_duration(Some(1234.0), Some(1000.0)), "1.1s");
    }

    #[test]
    fn test_duration_missing_side_is_dash() {
        assert_eq!(aggregate_duration(Some(4000.0), None), "-");
        assert_eq!(aggregate_duration(None, Some(6000.0)), "-");
        assert_eq!(aggregate_duration(None, None), "-");
    }

    #[test]
    fn test_duration_zero_counts_as_absent() {
        assert_eq!(aggregate_duration(Some(0.0), Some(6000.0)), "-");
        assert_eq!(aggregate_duration(Some(4000.0), Some(0.0)), "-");
    }

    #[test]
    fn test_day_status_literals() {
        assert_eq!(DayStatus::Passed.as_str(), "passed");
        assert_eq!(DayStatus::Failed.as_str(), "failed");
        assert_eq!(DayStatus::Pending.as_str(), "pending");
        assert_eq!(DayStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_summarize_full_day() {
        let sign_in = record("2025-02-01", Seq::SignIn, "passed", Some(4000.0));
        let sign_out = record("2025-02-01", Seq::SignOut, "passed", Some(6000.0));
        let bucket = vec![&sign_in, &sign_out];

        let summary = summarize(&bucket).unwrap();
        assert_eq!(summary.date, "2025-02-01");
        assert!(summary.sign_in);
        assert!(summary.sign_out);
        assert_eq!(summary.duration, "5.0s");
        assert_eq!(summary.status, DayStatus::Passed);
        assert!(summary.holiday.is_none());
    }

    #[test]
    fn test_summarize_sign_in_only() {
        let sign_in = record("2025-02-02", Seq::SignIn, "passed", Some(4000.0));
        let bucket = vec![&sign_in];

        let summary = summarize(&bucket).unwrap();
        assert!(summary.sign_in);
        assert!(!summary.sign_out);
        assert_eq!(summary.duration, "-");
        assert_eq!(summary.status, DayStatus::Pending);
    }

    #[test]
    fn test_summarize_empty_bucket() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_summarize_first_match_per_seq() {
        // Duplicate seq entries: the first bucket member of each kind wins.
        let first = record("2025-02-03", Seq::SignIn, "passed", Some(2000.0));
        let second = record("2025-02-03", Seq::SignIn, "failed", Some(9000.0));
        let out = record("2025-02-03", Seq::SignOut, "passed", Some(2000.0));
        let bucket = vec![&first, &second, &out];

        let summary = summarize(&bucket).unwrap();
        assert_eq!(summary.status, DayStatus::Passed);
        assert_eq!(summary.duration, "2.0s");
    }

    #[test]
    fn test_summarize_flags_holiday() {
        let mut sign_in = record("2025-02-04", Seq::SignIn, "", None);
        sign_in.log.push(LogEntry {
            at: "2025-02-04T00:00:01.000Z".to_string(),
            msg: "Skip holiday for Diwali festival".to_string(),
        });
        let bucket = vec![&sign_in];

        let summary = summarize(&bucket).unwrap();
        let holiday = summary.holiday.unwrap();
        assert_eq!(holiday.label.as_deref(), Some("festival"));
    }
}
