//! Transaction records and the per-employee append-only log.

use std::cmp::Reverse;
use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a transaction record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// A calculated payment. The amount is money.
    Payment,
    /// A granted vacation or payout request. The amount is a day count.
    Vacation,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Payment => f.write_str("payment"),
            TransactionKind::Vacation => f.write_str("vacation"),
        }
    }
}

/// One immutable entry in a [`TransactionLog`].
///
/// Timestamps are kept at whole-second precision.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{TransactionKind, TransactionRecord};
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let record = TransactionRecord::at(
///     Utc.with_ymd_and_hms(2026, 3, 2, 9, 30, 0).unwrap(),
///     TransactionKind::Payment,
///     Decimal::new(5500, 0),
///     "Salaried 5000 + 10% bonus",
/// );
/// assert_eq!(
///     record.to_string(),
///     "2026-03-02 09:30:00 | payment | 5500 | Salaried 5000 + 10% bonus"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// When the event was logged.
    pub timestamp: DateTime<Utc>,
    /// Payment or vacation.
    pub kind: TransactionKind,
    /// Money for payments, days for vacations.
    pub amount: Decimal,
    /// Which policy or rule produced the record.
    pub description: String,
}

impl TransactionRecord {
    /// Creates a record stamped with the current time.
    pub fn new(kind: TransactionKind, amount: Decimal, description: impl Into<String>) -> Self {
        Self::at(Utc::now(), kind, amount, description)
    }

    /// Creates a record with an explicit timestamp, truncated to seconds.
    pub fn at(
        timestamp: DateTime<Utc>,
        kind: TransactionKind,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(0),
            kind,
            amount,
            description: description.into(),
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.amount,
            self.description
        )
    }
}

/// Append-only history of one employee's payments and vacations.
///
/// There is no way to edit or remove a record once appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionLog {
    records: Vec<TransactionRecord>,
}

impl TransactionLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Number of records logged so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates records in append order.
    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }

    /// Returns the records newest first.
    ///
    /// Records sharing a timestamp keep their append order relative to each
    /// other; the sort is stable, not a plain reversal.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{TransactionKind, TransactionLog, TransactionRecord};
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let early = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();
    /// let late = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).unwrap();
    ///
    /// let mut log = TransactionLog::new();
    /// log.append(TransactionRecord::at(early, TransactionKind::Payment, Decimal::ONE, "a"));
    /// log.append(TransactionRecord::at(late, TransactionKind::Payment, Decimal::ONE, "b"));
    /// log.append(TransactionRecord::at(late, TransactionKind::Vacation, Decimal::ONE, "c"));
    ///
    /// let order: Vec<&str> = log.render().iter().map(|r| r.description.as_str()).collect();
    /// assert_eq!(order, vec!["b", "c", "a"]);
    /// ```
    pub fn render(&self) -> Vec<&TransactionRecord> {
        let mut ordered: Vec<&TransactionRecord> = self.records.iter().collect();
        ordered.sort_by_key(|r| Reverse(r.timestamp));
        ordered
    }

    /// Sums the amounts of all records of one kind.
    ///
    /// Returns `None` if the sum overflows.
    pub fn total_for(&self, kind: TransactionKind) -> Option<Decimal> {
        self.records
            .iter()
            .filter(|r| r.kind == kind)
            .try_fold(Decimal::ZERO, |total, r| total.checked_add(r.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_new_record_has_whole_second_timestamp() {
        let record = TransactionRecord::new(TransactionKind::Payment, dec("10"), "test");
        assert_eq!(record.timestamp.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn test_at_truncates_subseconds() {
        let stamp = base_time() + Duration::milliseconds(750);
        let record = TransactionRecord::at(stamp, TransactionKind::Vacation, dec("3"), "x");
        assert_eq!(record.timestamp, base_time());
    }

    #[test]
    fn test_append_grows_log() {
        let mut log = TransactionLog::new();
        assert!(log.is_empty());

        log.append(TransactionRecord::at(
            base_time(),
            TransactionKind::Payment,
            dec("100"),
            "first",
        ));
        log.append(TransactionRecord::at(
            base_time(),
            TransactionKind::Payment,
            dec("200"),
            "second",
        ));

        assert_eq!(log.len(), 2);
        let appended: Vec<&str> = log.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(appended, vec!["first", "second"]);
    }

    #[test]
    fn test_render_orders_newest_first() {
        let mut log = TransactionLog::new();
        for (offset, name) in [(0, "oldest"), (60, "middle"), (120, "newest")] {
            log.append(TransactionRecord::at(
                base_time() + Duration::seconds(offset),
                TransactionKind::Payment,
                dec("1"),
                name,
            ));
        }

        let rendered: Vec<&str> = log.render().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(rendered, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_render_keeps_append_order_for_ties() {
        let mut log = TransactionLog::new();
        for name in ["first", "second", "third"] {
            log.append(TransactionRecord::at(
                base_time(),
                TransactionKind::Vacation,
                dec("1"),
                name,
            ));
        }

        let rendered: Vec<&str> = log.render().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(rendered, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_render_does_not_mutate_log() {
        let mut log = TransactionLog::new();
        log.append(TransactionRecord::at(
            base_time(),
            TransactionKind::Payment,
            dec("1"),
            "a",
        ));
        log.append(TransactionRecord::at(
            base_time() + Duration::seconds(5),
            TransactionKind::Payment,
            dec("2"),
            "b",
        ));
        let before = log.clone();

        let _ = log.render();
        let _ = log.render();

        assert_eq!(log, before);
    }

    #[test]
    fn test_total_for_filters_by_kind() {
        let mut log = TransactionLog::new();
        log.append(TransactionRecord::at(
            base_time(),
            TransactionKind::Payment,
            dec("5500"),
            "pay",
        ));
        log.append(TransactionRecord::at(
            base_time(),
            TransactionKind::Vacation,
            dec("5"),
            "vac",
        ));
        log.append(TransactionRecord::at(
            base_time(),
            TransactionKind::Payment,
            dec("4800.50"),
            "pay",
        ));

        assert_eq!(log.total_for(TransactionKind::Payment), Some(dec("10300.50")));
        assert_eq!(log.total_for(TransactionKind::Vacation), Some(dec("5")));
    }

    #[test]
    fn test_total_for_overflow_is_none() {
        let mut log = TransactionLog::new();
        for _ in 0..2 {
            log.append(TransactionRecord::at(
                base_time(),
                TransactionKind::Payment,
                Decimal::MAX,
                "pay",
            ));
        }
        assert_eq!(log.total_for(TransactionKind::Payment), None);
        assert_eq!(log.total_for(TransactionKind::Vacation), Some(Decimal::ZERO));
    }

    #[test]
    fn test_record_serialization() {
        let record = TransactionRecord::at(
            base_time(),
            TransactionKind::Vacation,
            dec("5"),
            "Standard time off",
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"kind\":\"vacation\""));
        assert!(json.contains("\"amount\":\"5\""));
        assert!(json.contains("\"timestamp\":\"2026-01-15T10:00:00Z\""));
    }

    #[test]
    fn test_log_serializes_as_array() {
        let mut log = TransactionLog::new();
        log.append(TransactionRecord::at(
            base_time(),
            TransactionKind::Payment,
            dec("0"),
            "Interns are not paid",
        ));
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.starts_with('['));
    }
}
