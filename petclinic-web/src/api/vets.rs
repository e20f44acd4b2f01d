use super::context::{ApiContext, RequestContext};
use crate::error::WebError;
use crate::views;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use maud::Markup;
use petclinic_application::catalog::ListVets;
use petclinic_application::dto::VetDto;
use petclinic_application::query::QueryBus;
use petclinic_domain::persist::PageRequest;
use serde::{Deserialize, Serialize};

const PAGE_SIZE: usize = 5;

pub(super) fn router() -> Router<ApiContext> {
    Router::new()
        .route("/vets.html", get(show_vet_list))
        .route("/vets", get(show_resources_vet_list))
}

#[derive(Debug, Deserialize)]
pub(super) struct PageParams {
    page: Option<usize>,
}

#[tracing::instrument(skip(ctx, req))]
async fn show_vet_list(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Query(params): Query<PageParams>,
) -> Result<Markup, WebError> {
    let page = params.page.unwrap_or(1).max(1);
    let vets = ctx
        .queries
        .dispatch(
            &req,
            ListVets {
                page: PageRequest::of(page - 1, PAGE_SIZE),
            },
        )
        .await?;
    Ok(views::vet_list(&vets))
}

/// JSON 形式的兽医目录
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct Vets {
    vet_list: Vec<VetDto>,
}

#[tracing::instrument(skip(ctx, req))]
async fn show_resources_vet_list(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
) -> Result<Json<Vets>, WebError> {
    let vets = ctx
        .queries
        .dispatch(
            &req,
            ListVets {
                page: PageRequest::Unpaged,
            },
        )
        .await?;
    Ok(Json(Vets {
        vet_list: vets.into_content(),
    }))
}
