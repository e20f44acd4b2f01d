use super::context::{ApiContext, RequestContext};
use super::owners::load_owner;
use super::redirect;
use crate::error::WebError;
use crate::forms::{FieldErrors, VisitForm};
use crate::views;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use maud::Markup;
use petclinic_application::command::CommandBus;
use petclinic_application::dto::{OwnerDto, PetDto};
use petclinic_application::error::AppError;
use petclinic_application::owners::AddVisit;
use petclinic_domain::owner::{OwnerId, PetId};

pub(super) fn router() -> Router<ApiContext> {
    Router::new().route(
        "/owners/{owner_id}/pets/{pet_id}/visits/new",
        get(init_new_visit_form).post(process_new_visit_form),
    )
}

fn find_pet(owner: &OwnerDto, pet_id: PetId) -> Result<&PetDto, WebError> {
    owner
        .pet(pet_id)
        .ok_or_else(|| WebError::NotFound(format!("pet {pet_id}")))
}

#[tracing::instrument(skip(ctx, req))]
async fn init_new_visit_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path((owner_id, pet_id)): Path<(OwnerId, PetId)>,
) -> Result<Markup, WebError> {
    let owner = load_owner(&ctx, &req, owner_id).await?;
    let pet = find_pet(&owner, pet_id)?;
    Ok(views::visit_form(
        &owner,
        pet,
        &VisitForm::default(),
        &FieldErrors::new(),
    ))
}

/// 校验通过则追加就诊记录并重定向到主人详情；否则带错误重新渲染表单
#[tracing::instrument(skip(ctx, req))]
async fn process_new_visit_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path((owner_id, pet_id)): Path<(OwnerId, PetId)>,
    Form(form): Form<VisitForm>,
) -> Result<Response, WebError> {
    let owner = load_owner(&ctx, &req, owner_id).await?;
    let pet = find_pet(&owner, pet_id)?;

    let (date, description) = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => return Ok(views::visit_form(&owner, pet, &form, &errors).into_response()),
    };

    let added = ctx
        .commands
        .dispatch(
            &req,
            AddVisit {
                owner_id,
                pet_id,
                date,
                description,
            },
        )
        .await;

    match added {
        Ok(visit_id) => {
            tracing::info!(%owner_id, %pet_id, %visit_id, "visit added");
            Ok(redirect(&format!("/owners/{owner_id}")))
        }
        Err(AppError::Validation { field, message }) => {
            let mut errors = FieldErrors::new();
            errors.reject(field, message);
            Ok(views::visit_form(&owner, pet, &form, &errors).into_response())
        }
        Err(err) => Err(err.into()),
    }
}
