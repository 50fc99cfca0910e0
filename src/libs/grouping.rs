//! Partitions the flat record list into per-date buckets.
//!
//! The tracker feed arrives newest-first; buckets are created while
//! scanning the input in reverse so dates come out oldest-first. The
//! ordering of dates is not semantically significant to consumers, who only
//! need membership lookup, but it is what the dashboard renders top to
//! bottom. Records are borrowed from the fetched snapshot, never cloned.

use super::record::{AttendanceRecord, Seq};
use std::collections::HashMap;

/// Per-date buckets over a fetched record snapshot.
pub struct DayGroups<'a> {
    /// Dates in order of first occurrence during the reverse scan.
    dates: Vec<&'a str>,
    buckets: HashMap<&'a str, Vec<&'a AttendanceRecord>>,
}

impl<'a> DayGroups<'a> {
    /// Builds the grouping by scanning the input in reverse.
    pub fn build(records: &'a [AttendanceRecord]) -> Self {
        let mut dates: Vec<&str> = Vec::new();
        let mut buckets: HashMap<&str, Vec<&AttendanceRecord>> = HashMap::new();

        for record in records.iter().rev() {
            let date = record.date.as_str();
            buckets
                .entry(date)
                .or_insert_with(|| {
                    dates.push(date);
                    Vec::new()
                })
                .push(record);
        }

        Self { dates, buckets }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Dates in bucket-creation order.
    pub fn dates(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.dates.iter().copied()
    }

    /// All records for a date, in reverse-scan order. Unknown dates yield
    /// an empty slice.
    pub fn records(&self, date: &str) -> &[&'a AttendanceRecord] {
        self.buckets.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First sign-in record in the date's bucket, if any.
    ///
    /// First match only; duplicate records for one `seq` (an upstream
    /// invariant violation) are not rejected, merely ignored past the first.
    pub fn sign_in(&self, date: &str) -> Option<&'a AttendanceRecord> {
        self.records(date).iter().find(|r| r.seq == Seq::SignIn).copied()
    }

    /// First sign-out record in the date's bucket, if any.
    pub fn sign_out(&self, date: &str) -> Option<&'a AttendanceRecord> {
        self.records(date).iter().find(|r| r.seq == Seq::SignOut).copied()
    }

    /// Iterates `(date, bucket)` pairs in bucket-creation order.
    pub fn iter<'g>(&'g self) -> impl Iterator<Item = (&'a str, &'g [&'a AttendanceRecord])> + 'g {
        self.dates.iter().map(move |date| (*date, self.records(date)))
    }
}
