//! Cash flow API endpoints

use api_types::{
    DataResponse,
    cash_flow::{
        CashFlowCreated, CashFlowDetail, CashFlowList, CashFlowListQuery, CashFlowUpsert,
        CashFlowView, LabelList, SourceList, TypeList,
    },
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use engine::{CashFlow, CashFlowDraft, CashFlowQuery};

use crate::{ServerError, seed, server::ServerState};

fn view(record: CashFlow) -> CashFlowView {
    CashFlowView {
        id: record.id,
        kind: record.kind,
        source: record.source,
        label: record.label,
        amount: record.amount,
        description: record.description,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}

fn draft(payload: CashFlowUpsert) -> CashFlowDraft {
    CashFlowDraft {
        kind: payload.kind,
        source: payload.source,
        label: payload.label,
        amount: payload.amount,
        description: payload.description,
    }
}

fn filter(params: CashFlowListQuery) -> CashFlowQuery {
    CashFlowQuery {
        kind: params.kind,
        source: params.source,
        labels: params.labels,
        gte_amount: lenient_number(params.gte_amount),
        lte_amount: lenient_number(params.lte_amount),
        search: params.search,
        start_date: params.start_date,
        end_date: params.end_date,
    }
}

/// Malformed numeric parameters are ignored rather than rejected.
fn lenient_number(raw: Option<String>) -> Option<f64> {
    raw.and_then(|value| value.trim().parse().ok())
}

pub async fn index() -> Json<DataResponse<()>> {
    Json(DataResponse::success("cash flow service ready", None))
}

/// Drop every stored record and bulk-load the seed document.
pub async fn setup(State(state): State<ServerState>) -> Json<DataResponse<()>> {
    let records = seed::load(&state.seed_path).await;

    let mut engine = state.engine.write().await;
    engine.reset();
    for record in records {
        engine.create_raw(record);
    }

    Json(DataResponse::success("initial data loaded", None))
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<CashFlowListQuery>,
) -> Json<DataResponse<CashFlowList>> {
    let query = filter(params);

    let engine = state.engine.read().await;
    let cash_flows: Vec<CashFlowView> = engine.cash_flows(&query).into_iter().map(view).collect();
    let total = cash_flows.len();

    Json(DataResponse::success(
        "cash flow list retrieved",
        Some(CashFlowList { cash_flows, total }),
    ))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CashFlowUpsert>,
) -> Result<Json<DataResponse<CashFlowCreated>>, ServerError> {
    let mut engine = state.engine.write().await;
    let cash_flow_id = engine.create(draft(payload))?;

    Ok(Json(DataResponse::success(
        "cash flow created",
        Some(CashFlowCreated { cash_flow_id }),
    )))
}

pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<CashFlowDetail>>, ServerError> {
    let engine = state.engine.read().await;
    let record = engine.cash_flow(&id)?;

    Ok(Json(DataResponse::success(
        "cash flow retrieved",
        Some(CashFlowDetail {
            cash_flow: view(record),
        }),
    )))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CashFlowUpsert>,
) -> Result<Json<DataResponse<()>>, ServerError> {
    let mut engine = state.engine.write().await;
    engine.update(&id, draft(payload))?;

    Ok(Json(DataResponse::success("cash flow updated", None)))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<()>>, ServerError> {
    let mut engine = state.engine.write().await;
    engine.remove(&id)?;

    Ok(Json(DataResponse::success("cash flow deleted", None)))
}

pub async fn types(State(state): State<ServerState>) -> Json<DataResponse<TypeList>> {
    let engine = state.engine.read().await;

    Json(DataResponse::success(
        "cash flow types retrieved",
        Some(TypeList {
            types: engine.available_types(),
        }),
    ))
}

pub async fn sources(State(state): State<ServerState>) -> Json<DataResponse<SourceList>> {
    let engine = state.engine.read().await;

    Json(DataResponse::success(
        "cash flow sources retrieved",
        Some(SourceList {
            sources: engine.available_sources(),
        }),
    ))
}

pub async fn labels(State(state): State<ServerState>) -> Json<DataResponse<LabelList>> {
    let engine = state.engine.read().await;

    Json(DataResponse::success(
        "cash flow labels retrieved",
        Some(LabelList {
            labels: engine.available_labels(),
        }),
    ))
}
