use chrono::Utc;
use uuid::Uuid;

pub use cash_flows::{CashFlow, CashFlowDraft};
pub use error::EngineError;
pub use query::CashFlowQuery;
pub use validator::{FieldValue, Validator};

mod cash_flows;
mod error;
mod query;
mod store;
mod validator;

type ResultEngine<T> = Result<T, EngineError>;

/// Orchestrates the record store, the validator and the query filter.
///
/// The engine owns id and timestamp assignment. It never touches the
/// response layer: failures surface as [`EngineError`] values and are
/// mapped to HTTP statuses by the caller.
#[derive(Debug, Default)]
pub struct Engine {
    store: store::Store,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `draft`, assign a fresh id and timestamps, persist the
    /// record and return its id. Validation failure aborts before anything
    /// is stored.
    pub fn create(&mut self, draft: CashFlowDraft) -> ResultEngine<String> {
        draft.validate()?;

        let now = Utc::now();
        let record = draft.into_record(Uuid::new_v4().to_string(), now, now);
        let id = record.id.clone();
        self.store.add(record);

        Ok(id)
    }

    /// Persist a fully-specified record without validation.
    ///
    /// Only the bulk seed path uses this; it can store records the
    /// validator would reject.
    pub fn create_raw(&mut self, record: CashFlow) {
        self.store.add(record);
    }

    /// Drop every stored record.
    pub fn reset(&mut self) {
        self.store.clear();
    }

    /// Snapshot of the store with every present filter of `query` applied.
    pub fn cash_flows(&self, query: &CashFlowQuery) -> Vec<CashFlow> {
        query.apply(self.store.get_all())
    }

    pub fn cash_flow(&self, id: &str) -> ResultEngine<CashFlow> {
        self.store
            .get_by_id(id)
            .cloned()
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    /// Replace every mutable field of the record carrying `id`.
    ///
    /// The id and `created_at` are preserved and `updated_at` is
    /// refreshed. The lookup runs before validation, so a missing id
    /// reports [`EngineError::KeyNotFound`] even for an invalid draft.
    pub fn update(&mut self, id: &str, draft: CashFlowDraft) -> ResultEngine<()> {
        let existing = self.cash_flow(id)?;
        draft.validate()?;

        let record = draft.into_record(existing.id, existing.created_at, Utc::now());
        if self.store.replace(record) {
            Ok(())
        } else {
            Err(EngineError::KeyNotFound(id.to_string()))
        }
    }

    pub fn remove(&mut self, id: &str) -> ResultEngine<()> {
        if self.store.delete(id) {
            Ok(())
        } else {
            Err(EngineError::KeyNotFound(id.to_string()))
        }
    }

    /// Distinct `type` values across the store, in first-seen order.
    pub fn available_types(&self) -> Vec<String> {
        distinct(self.store.get_all().into_iter().map(|record| record.kind))
    }

    /// Distinct `source` values across the store, in first-seen order.
    pub fn available_sources(&self) -> Vec<String> {
        distinct(self.store.get_all().into_iter().map(|record| record.source))
    }

    /// Distinct trimmed labels across the store, in first-seen order.
    pub fn available_labels(&self) -> Vec<String> {
        distinct(
            self.store
                .get_all()
                .into_iter()
                .flat_map(|record| record.labels()),
        )
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
