//! Query filtering over cash flow snapshots.
//!
//! Filters compose as a logical AND and run in a fixed order. A filter is
//! applied only when its value is present and non-blank; malformed dates
//! are skipped silently instead of rejecting the request.
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

use super::cash_flows::CashFlow;

/// An immutable set of optional filter criteria for listing cash flows.
#[derive(Clone, Debug, Default)]
pub struct CashFlowQuery {
    pub kind: Option<String>,
    pub source: Option<String>,
    /// Comma-separated set of tags to intersect against each record.
    pub labels: Option<String>,
    pub gte_amount: Option<f64>,
    pub lte_amount: Option<f64>,
    /// Case-insensitive substring match on the description.
    pub search: Option<String>,
    /// `dd-MM-yyyy`, inclusive from the start of that day (local time).
    pub start_date: Option<String>,
    /// `dd-MM-yyyy`, inclusive through the end of that day (local time).
    pub end_date: Option<String>,
}

impl CashFlowQuery {
    /// Keep the records satisfying every present filter.
    pub fn apply(&self, mut records: Vec<CashFlow>) -> Vec<CashFlow> {
        if let Some(kind) = present(&self.kind) {
            let kind = kind.to_lowercase();
            records.retain(|record| record.kind.to_lowercase() == kind);
        }

        if let Some(source) = present(&self.source) {
            let source = source.to_lowercase();
            records.retain(|record| record.source.to_lowercase() == source);
        }

        if let Some(labels) = present(&self.labels) {
            let requested = tag_set(labels);
            records.retain(|record| {
                record
                    .labels()
                    .iter()
                    .any(|label| requested.contains(&label.to_lowercase()))
            });
        }

        if let Some(min) = self.gte_amount {
            records.retain(|record| record.amount >= min);
        }

        if let Some(max) = self.lte_amount {
            records.retain(|record| record.amount <= max);
        }

        if let Some(term) = present(&self.search) {
            let term = term.to_lowercase();
            records.retain(|record| record.description.to_lowercase().contains(&term));
        }

        if let Some(raw) = present(&self.start_date)
            && let Some(start) = day_start(raw)
        {
            records.retain(|record| record.created_at >= start);
        }

        if let Some(raw) = present(&self.end_date)
            && let Some(end) = day_end(raw)
        {
            records.retain(|record| record.created_at <= end);
        }

        records
    }
}

/// A blank filter value counts as absent.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.trim().is_empty())
}

fn tag_set(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// `dd-MM-yyyy` to the start of that day, resolved in the local time zone.
fn day_start(raw: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%d-%m-%Y").ok()?;
    local_midnight(date)
}

/// `dd-MM-yyyy` to the start of the *next* day, making the range inclusive
/// through the end of the given day.
fn day_end(raw: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw, "%d-%m-%Y").ok()?;
    local_midnight(date.succ_opt()?)
}

fn local_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .map(|instant| instant.with_timezone(&Utc))
}
