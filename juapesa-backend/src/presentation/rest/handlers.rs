use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use crate::application::{
    ConvertCommand, ConvertUseCase, DebitCommand, DebitUseCase, ForecastQuery, ForecastUseCase,
    KycCommand, KycUseCase, RebalanceCommand, RebalanceUseCase, UssdCommand, UssdUseCase,
};
use crate::domain::{Clock, DebitReceipt, ForecastWindow};
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// POST /api/ussd/session
pub async fn ussd_session<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<UssdRequest>,
) -> Result<Json<UssdResponse>, ApiError> {
    let use_case = UssdUseCase::new(Arc::clone(&state.cache));

    let step = use_case
        .execute(UssdCommand {
            session_id: req.session_id,
            phone: req.phone,
            input: req.input,
            menu_state: req.menu_state,
        })
        .await?;

    Ok(Json(UssdResponse {
        prompt: step.prompt,
        next_menu_state: step.next_menu_state,
        actions: step.actions,
    }))
}

/// POST /api/convert
pub async fn convert<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let use_case = ConvertUseCase::new(Arc::clone(&state.clock));

    let result = use_case.execute(ConvertCommand {
        user_id: req.user_id,
        from_rail: req.from.rail,
        from_operator: req.from.operator,
        amount: req.from.amount,
        to_token: req.to.token,
        to_chain: req.to.chain,
        mode: req.mode,
    })?;

    Ok(Json(ConvertResponse {
        status: result.status.to_string(),
        tx_id: result.tx_id,
        estimated_completion: result.estimated_completion.to_string(),
        fees: result.fees,
    }))
}

/// POST /api/liquidity/rebalance
pub async fn rebalance<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<RebalanceRequest>,
) -> Result<Json<RebalanceResponse>, ApiError> {
    let use_case = RebalanceUseCase::new(Arc::clone(&state.clock));

    let result = use_case.execute(RebalanceCommand {
        source_pool: req.source_pool,
        dest_pool: req.dest_pool,
        amount: req.amount,
        reason: req.reason,
        predicted_demand_window: req.predicted_demand_window,
    })?;

    Ok(Json(RebalanceResponse {
        order_id: result.order_id,
        status: result.status.to_string(),
    }))
}

/// POST /api/kyc/verify
pub async fn kyc_verify(Json(req): Json<KycRequest>) -> Result<Json<KycResponse>, ApiError> {
    let decision = KycUseCase::execute(&KycCommand {
        phone: req.phone,
        id_number: req.id_number,
        full_name: req.full_name,
    })?;

    Ok(Json(KycResponse {
        status: decision.status,
        level: decision.level,
    }))
}

/// POST /api/daraja/debit
pub async fn daraja_debit<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<DebitRequest>,
) -> Result<Json<DebitReceipt>, ApiError> {
    let use_case = DebitUseCase::new(Arc::clone(&state.integrations.mobile_money));

    let receipt = use_case
        .execute(DebitCommand {
            phone: req.phone,
            amount: req.amount,
        })
        .await?;

    Ok(Json(receipt))
}

/// POST /api/forecast
pub async fn forecast<C: Clock>(
    State(state): State<Arc<AppState<C>>>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let use_case = ForecastUseCase::new(Arc::clone(&state.summarizer));

    let result = use_case.predict(ForecastQuery {
        operator: req.operator,
        window: req.window,
    })?;

    Ok(Json(ForecastResponse {
        operator: result.operator,
        window: result.window,
        predicted_net_flow: result.predicted_net_flow,
    }))
}

/// GET /api/operators/{operator}/summary
pub async fn operator_summary<C: Clock>(
    Path(operator): Path<String>,
    Query(query): Query<SummaryQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let use_case = ForecastUseCase::new(Arc::clone(&state.summarizer));
    let window = query
        .window
        .unwrap_or_else(|| ForecastWindow::default().as_str().to_string());

    let summary = use_case.operator_summary(&operator, &window).await?;

    Ok(Json(SummaryResponse { operator, summary }))
}
