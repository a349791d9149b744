use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome marker carried by every response envelope.
///
/// `fail` marks client-caused errors (400/404 class), `error` marks
/// server-caused ones (500 class).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Fail,
    Error,
}

/// Standard wrapper for every API response.
#[derive(Debug, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    pub data: Option<T>,
}

impl<T> DataResponse<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data,
        }
    }

    pub fn fail(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: ResponseStatus::Fail,
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data,
        }
    }
}

pub mod cash_flow {
    use super::*;

    /// Request body shared by create and update.
    ///
    /// Every field is optional on purpose: validation reports all missing
    /// fields at once instead of failing at deserialization.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct CashFlowUpsert {
        #[serde(rename = "type")]
        pub kind: Option<String>,
        pub source: Option<String>,
        pub label: Option<String>,
        pub amount: Option<f64>,
        pub description: Option<String>,
    }

    /// Query-string filters for the list endpoint.
    ///
    /// Everything arrives as an optional string; numeric values are parsed
    /// leniently at the boundary and ignored when malformed.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CashFlowListQuery {
        #[serde(rename = "type")]
        pub kind: Option<String>,
        pub source: Option<String>,
        pub labels: Option<String>,
        pub gte_amount: Option<String>,
        pub lte_amount: Option<String>,
        pub search: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    /// A cash flow record as serialized on the wire.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CashFlowView {
        pub id: String,
        #[serde(rename = "type")]
        pub kind: String,
        pub source: String,
        pub label: String,
        pub amount: f64,
        pub description: String,
        /// RFC3339 timestamp.
        pub created_at: DateTime<Utc>,
        /// RFC3339 timestamp.
        pub updated_at: DateTime<Utc>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CashFlowList {
        pub cash_flows: Vec<CashFlowView>,
        pub total: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CashFlowCreated {
        pub cash_flow_id: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CashFlowDetail {
        pub cash_flow: CashFlowView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TypeList {
        pub types: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SourceList {
        pub sources: Vec<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct LabelList {
        pub labels: Vec<String>,
    }
}
