use super::context::{ApiContext, RequestContext};
use super::redirect;
use crate::error::WebError;
use crate::forms::{FieldErrors, OwnerForm};
use crate::views;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use maud::Markup;
use petclinic_application::command::CommandBus;
use petclinic_application::context::AppContext;
use petclinic_application::dto::OwnerDto;
use petclinic_application::owners::{CreateOwner, FindOwners, GetOwner, UpdateOwner};
use petclinic_application::query::QueryBus;
use petclinic_domain::owner::OwnerId;
use petclinic_domain::persist::PageRequest;
use petclinic_domain::value_object::Version;
use serde::Deserialize;

const PAGE_SIZE: usize = 5;
const NOT_FOUND: &str = "has not been found";

pub(super) fn router() -> Router<ApiContext> {
    Router::new()
        .route("/owners/find", get(init_find_form))
        .route("/owners", get(process_find_form))
        .route("/owners/new", get(init_creation_form).post(process_creation_form))
        .route("/owners/{owner_id}", get(show_owner))
        .route(
            "/owners/{owner_id}/edit",
            get(init_update_form).post(process_update_form),
        )
}

/// 加载主人；不存在时返回 404
pub(super) async fn load_owner(
    ctx: &ApiContext,
    req: &AppContext,
    owner_id: OwnerId,
) -> Result<OwnerDto, WebError> {
    ctx.queries
        .dispatch(req, GetOwner { owner_id })
        .await?
        .ok_or_else(|| WebError::NotFound(format!("owner {owner_id}")))
}

#[tracing::instrument]
async fn init_find_form() -> Markup {
    views::owners_find("", &FieldErrors::new())
}

#[derive(Debug, Deserialize)]
pub(super) struct FindParams {
    #[serde(default, rename = "lastName")]
    last_name: String,
    page: Option<usize>,
}

#[tracing::instrument(skip(ctx, req))]
async fn process_find_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Query(params): Query<FindParams>,
) -> Result<Response, WebError> {
    let page = params.page.unwrap_or(1).max(1);
    let owners = ctx
        .queries
        .dispatch(
            &req,
            FindOwners {
                last_name: params.last_name.clone(),
                page: PageRequest::of(page - 1, PAGE_SIZE),
            },
        )
        .await?;

    if owners.total_elements() == 0 {
        let mut errors = FieldErrors::new();
        errors.reject("lastName", NOT_FOUND);
        return Ok(views::owners_find(&params.last_name, &errors).into_response());
    }

    if owners.total_elements() == 1 {
        if let Some(id) = owners.content().first().and_then(|o| o.id) {
            return Ok(redirect(&format!("/owners/{id}")));
        }
    }

    Ok(views::owner_list(&owners, &params.last_name).into_response())
}

#[tracing::instrument]
async fn init_creation_form() -> Markup {
    views::owner_form(&OwnerForm::default(), &FieldErrors::new(), true)
}

#[tracing::instrument(skip(ctx, req))]
async fn process_creation_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Form(form): Form<OwnerForm>,
) -> Result<Response, WebError> {
    let details = match form.validate() {
        Ok(details) => details,
        Err(errors) => return Ok(views::owner_form(&form, &errors, true).into_response()),
    };

    let owner_id = ctx.commands.dispatch(&req, CreateOwner { details }).await?;
    Ok(redirect(&format!("/owners/{owner_id}")))
}

#[tracing::instrument(skip(ctx, req))]
async fn show_owner(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path(owner_id): Path<OwnerId>,
) -> Result<Markup, WebError> {
    let owner = load_owner(&ctx, &req, owner_id).await?;
    Ok(views::owner_details(&owner))
}

#[tracing::instrument(skip(ctx, req))]
async fn init_update_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path(owner_id): Path<OwnerId>,
) -> Result<Markup, WebError> {
    let owner = load_owner(&ctx, &req, owner_id).await?;
    Ok(views::owner_form(
        &OwnerForm::from(&owner),
        &FieldErrors::new(),
        false,
    ))
}

#[tracing::instrument(skip(ctx, req))]
async fn process_update_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path(owner_id): Path<OwnerId>,
    Form(form): Form<OwnerForm>,
) -> Result<Response, WebError> {
    let details = match form.validate() {
        Ok(details) => details,
        Err(errors) => return Ok(views::owner_form(&form, &errors, false).into_response()),
    };

    ctx.commands
        .dispatch(
            &req,
            UpdateOwner {
                owner_id,
                details,
                expected_version: form.version.map(Version::from),
            },
        )
        .await?;
    Ok(redirect(&format!("/owners/{owner_id}")))
}
