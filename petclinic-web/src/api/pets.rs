use super::context::{ApiContext, RequestContext};
use super::owners::load_owner;
use super::redirect;
use crate::error::WebError;
use crate::forms::{FieldErrors, PetForm};
use crate::views;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use maud::Markup;
use petclinic_application::catalog::ListPetTypes;
use petclinic_application::command::CommandBus;
use petclinic_application::context::AppContext;
use petclinic_application::dto::{OwnerDto, PetTypeDto};
use petclinic_application::error::AppError;
use petclinic_application::owners::{AddPet, UpdatePet};
use petclinic_application::query::QueryBus;
use petclinic_domain::owner::{OwnerId, PetId};
use petclinic_domain::value_object::Version;

pub(super) fn router() -> Router<ApiContext> {
    Router::new()
        .route(
            "/owners/{owner_id}/pets/new",
            get(init_creation_form).post(process_creation_form),
        )
        .route(
            "/owners/{owner_id}/pets/{pet_id}/edit",
            get(init_update_form).post(process_update_form),
        )
}

async fn pet_types(ctx: &ApiContext, req: &AppContext) -> Result<Vec<PetTypeDto>, WebError> {
    Ok(ctx.queries.dispatch(req, ListPetTypes).await?)
}

/// 重新渲染表单（200），附带字段错误与用户输入
async fn redisplay(
    ctx: &ApiContext,
    req: &AppContext,
    owner: &OwnerDto,
    form: &PetForm,
    errors: &FieldErrors,
    is_new: bool,
) -> Result<Response, WebError> {
    let types = pet_types(ctx, req).await?;
    Ok(views::pet_form(owner, form, &types, errors, is_new).into_response())
}

#[tracing::instrument(skip(ctx, req))]
async fn init_creation_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path(owner_id): Path<OwnerId>,
) -> Result<Markup, WebError> {
    let owner = load_owner(&ctx, &req, owner_id).await?;
    let types = pet_types(&ctx, &req).await?;
    Ok(views::pet_form(
        &owner,
        &PetForm::default(),
        &types,
        &FieldErrors::new(),
        true,
    ))
}

#[tracing::instrument(skip(ctx, req))]
async fn process_creation_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path(owner_id): Path<OwnerId>,
    Form(form): Form<PetForm>,
) -> Result<Response, WebError> {
    let owner = load_owner(&ctx, &req, owner_id).await?;
    let pet = match form.validate() {
        Ok(pet) => pet,
        Err(errors) => return redisplay(&ctx, &req, &owner, &form, &errors, true).await,
    };

    let added = ctx
        .commands
        .dispatch(
            &req,
            AddPet {
                owner_id,
                name: pet.name,
                birth_date: pet.birth_date,
                pet_type: pet.pet_type,
            },
        )
        .await;

    match added {
        Ok(_) => Ok(redirect(&format!("/owners/{owner_id}"))),
        Err(AppError::Validation { field, message }) => {
            let mut errors = FieldErrors::new();
            errors.reject(field, message);
            redisplay(&ctx, &req, &owner, &form, &errors, true).await
        }
        Err(err) => Err(err.into()),
    }
}

#[tracing::instrument(skip(ctx, req))]
async fn init_update_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path((owner_id, pet_id)): Path<(OwnerId, PetId)>,
) -> Result<Markup, WebError> {
    let owner = load_owner(&ctx, &req, owner_id).await?;
    let pet = owner
        .pet(pet_id)
        .ok_or_else(|| WebError::NotFound(format!("pet {pet_id}")))?;
    let types = pet_types(&ctx, &req).await?;
    let form = PetForm {
        version: Some(owner.version),
        ..PetForm::from(pet)
    };
    Ok(views::pet_form(&owner, &form, &types, &FieldErrors::new(), false))
}

#[tracing::instrument(skip(ctx, req))]
async fn process_update_form(
    State(ctx): State<ApiContext>,
    RequestContext(req): RequestContext,
    Path((owner_id, pet_id)): Path<(OwnerId, PetId)>,
    Form(form): Form<PetForm>,
) -> Result<Response, WebError> {
    let owner = load_owner(&ctx, &req, owner_id).await?;
    if owner.pet(pet_id).is_none() {
        return Err(WebError::NotFound(format!("pet {pet_id}")));
    }
    let pet = match form.validate() {
        Ok(pet) => pet,
        Err(errors) => return redisplay(&ctx, &req, &owner, &form, &errors, false).await,
    };

    let updated = ctx
        .commands
        .dispatch(
            &req,
            UpdatePet {
                owner_id,
                pet_id,
                name: pet.name,
                birth_date: pet.birth_date,
                pet_type: pet.pet_type,
                expected_version: form.version.map(Version::from),
            },
        )
        .await;

    match updated {
        Ok(()) => Ok(redirect(&format!("/owners/{owner_id}"))),
        Err(AppError::Validation { field, message }) => {
            let mut errors = FieldErrors::new();
            errors.reject(field, message);
            redisplay(&ctx, &req, &owner, &form, &errors, false).await
        }
        Err(err) => Err(err.into()),
    }
}
