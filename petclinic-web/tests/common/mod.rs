#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use chrono::NaiveDate;
use http_body_util::BodyExt; // for `collect`
use petclinic_application::command::CommandBus;
use petclinic_application::context::AppContext;
use petclinic_application::dto::OwnerDto;
use petclinic_application::owners::{AddPet, CreateOwner, GetOwner, OwnerDetails};
use petclinic_application::query::QueryBus;
use petclinic_domain::owner::{OwnerId, PetId};
use petclinic_domain::value_object::Telephone;
use petclinic_infra::sqlite::Database;
use petclinic_web::{ApiContext, router};
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub ctx: ApiContext,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers.get(header::LOCATION).and_then(|v| v.to_str().ok())
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let db = Database::in_memory().await.unwrap();
        let ctx = ApiContext::from_database(&db).unwrap();
        Self {
            router: router(ctx.clone()),
            ctx,
        }
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn create_owner(&self, first_name: &str, last_name: &str) -> OwnerId {
        self.ctx
            .commands
            .dispatch(
                &AppContext::default(),
                CreateOwner {
                    details: OwnerDetails {
                        first_name: first_name.to_string(),
                        last_name: last_name.to_string(),
                        address: "110 W. Liberty St.".to_string(),
                        city: "Madison".to_string(),
                        telephone: Telephone::parse("6085551023").unwrap(),
                    },
                },
            )
            .await
            .unwrap()
    }

    pub async fn add_pet(&self, owner_id: OwnerId, name: &str) -> PetId {
        self.ctx
            .commands
            .dispatch(
                &AppContext::default(),
                AddPet {
                    owner_id,
                    name: name.to_string(),
                    birth_date: NaiveDate::from_ymd_opt(2010, 9, 7).unwrap(),
                    pet_type: "cat".to_string(),
                },
            )
            .await
            .unwrap()
    }

    pub async fn owner(&self, owner_id: OwnerId) -> OwnerDto {
        self.ctx
            .queries
            .dispatch(&AppContext::default(), GetOwner { owner_id })
            .await
            .unwrap()
            .unwrap()
    }
}
