//! In-memory storage for cash flow records.
use super::cash_flows::CashFlow;

/// The record store backing the engine.
///
/// `add` performs no uniqueness check on the id; callers must supply fresh
/// ids. Duplicate ids are stored as-is.
#[derive(Debug, Default)]
pub(crate) struct Store {
    records: Vec<CashFlow>,
}

impl Store {
    /// Snapshot of every record, safe for the caller to mutate.
    pub(crate) fn get_all(&self) -> Vec<CashFlow> {
        self.records.clone()
    }

    pub(crate) fn get_by_id(&self, id: &str) -> Option<&CashFlow> {
        self.records.iter().find(|record| record.id == id)
    }

    pub(crate) fn add(&mut self, record: CashFlow) {
        self.records.push(record);
    }

    /// Replace the record carrying the same id. Returns `false` when the id
    /// is not in the store.
    pub(crate) fn replace(&mut self, record: CashFlow) -> bool {
        match self
            .records
            .iter()
            .position(|existing| existing.id == record.id)
        {
            Some(index) => {
                self.records[index] = record;
                true
            }
            None => false,
        }
    }

    pub(crate) fn delete(&mut self, id: &str) -> bool {
        match self.records.iter().position(|record| record.id == id) {
            Some(index) => {
                self.records.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }
}
