use crate::error::WebError;
use axum::Router;
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use context::{ApiContext, REQUEST_ID_HEADER};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod context;
mod owners;
mod pets;
mod vets;
mod visits;
mod welcome;

/// 构造完整路由（含请求追踪与请求 id）
pub fn router(ctx: ApiContext) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/", get(welcome::handler))
        .merge(owners::router())
        .merge(pets::router())
        .merge(visits::router())
        .merge(vets::router())
        .fallback(not_found)
        .with_state(ctx)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

async fn not_found() -> WebError {
    WebError::NotFound("page".to_string())
}

/// 302 重定向
pub(crate) fn redirect(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
