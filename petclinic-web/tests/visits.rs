mod common;

use axum::http::StatusCode;
use chrono::{Local, NaiveDate};
use common::TestApp;

async fn george_with_leo(app: &TestApp) -> (String, petclinic_domain::owner::OwnerId, petclinic_domain::owner::PetId) {
    let owner_id = app.create_owner("George", "Franklin").await;
    let pet_id = app.add_pet(owner_id, "Leo").await;
    (
        format!("/owners/{owner_id}/pets/{pet_id}/visits/new"),
        owner_id,
        pet_id,
    )
}

#[tokio::test]
async fn init_new_visit_form() {
    let app = TestApp::new().await;
    let (uri, _, _) = george_with_leo(&app).await;

    let res = app.get(&uri).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("New Visit"));
    assert!(res.body.contains("Leo"));
    assert!(res.body.contains("id=\"description\""));
}

#[tokio::test]
async fn process_new_visit_form_success() {
    let app = TestApp::new().await;
    let (uri, owner_id, pet_id) = george_with_leo(&app).await;

    let res = app
        .post_form(&uri, "date=2024-01-15&description=Visit%20Description")
        .await;
    assert_eq!(res.status, StatusCode::FOUND);
    assert_eq!(res.location(), Some(format!("/owners/{owner_id}").as_str()));

    let owner = app.owner(owner_id).await;
    let visits = &owner.pet(pet_id).unwrap().visits;
    assert_eq!(visits.len(), 1);
    assert!(visits[0].id.is_some());
    assert_eq!(visits[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(visits[0].description, "Visit Description");

    let details = app.get(&format!("/owners/{owner_id}")).await;
    assert!(details.body.contains("Visit Description"));
}

#[tokio::test]
async fn blank_or_whitespace_description_redisplays_the_form() {
    let app = TestApp::new().await;
    let (uri, owner_id, pet_id) = george_with_leo(&app).await;

    for body in ["date=2024-01-15&description=", "description=%20%20%09%20"] {
        let res = app.post_form(&uri, body).await;
        assert_eq!(res.status, StatusCode::OK, "{body}");
        assert!(res.location().is_none());
        assert!(res.body.contains("data-field=\"description\""));
        assert!(res.body.contains("must not be blank"));
    }

    let owner = app.owner(owner_id).await;
    assert!(owner.pet(pet_id).unwrap().visits.is_empty());
}

#[tokio::test]
async fn non_iso_date_is_a_field_error() {
    let app = TestApp::new().await;
    let (uri, owner_id, pet_id) = george_with_leo(&app).await;

    let res = app
        .post_form(&uri, "date=2024%2F01%2F15&description=checkup")
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("data-field=\"date\""));
    // 用户输入原样回显
    assert!(res.body.contains("2024/01/15"));
    assert!(res.body.contains("checkup"));

    let owner = app.owner(owner_id).await;
    assert!(owner.pet(pet_id).unwrap().visits.is_empty());
}

#[tokio::test]
async fn empty_date_defaults_to_today() {
    let app = TestApp::new().await;
    let (uri, owner_id, pet_id) = george_with_leo(&app).await;

    let res = app.post_form(&uri, "date=&description=rabies%20shot").await;
    assert_eq!(res.status, StatusCode::FOUND);

    let owner = app.owner(owner_id).await;
    let visits = &owner.pet(pet_id).unwrap().visits;
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].date, Local::now().date_naive());
}

#[tokio::test]
async fn special_characters_and_unknown_fields() {
    let app = TestApp::new().await;
    let (uri, owner_id, pet_id) = george_with_leo(&app).await;

    let res = app
        .post_form(
            &uri,
            "description=Visit%20for%20%40%23%24%25%20symptoms%20%26%20treatment!&petId=999&extra=1",
        )
        .await;
    assert_eq!(res.status, StatusCode::FOUND);

    let owner = app.owner(owner_id).await;
    assert_eq!(
        owner.pet(pet_id).unwrap().visits[0].description,
        "Visit for @#$% symptoms & treatment!"
    );
}

#[tokio::test]
async fn unknown_owner_or_pet_is_not_found() {
    let app = TestApp::new().await;
    let (_, owner_id, pet_id) = george_with_leo(&app).await;
    let other = app.create_owner("Betty", "Davis").await;

    let res = app.get(&format!("/owners/9999/pets/{pet_id}/visits/new")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app.get(&format!("/owners/{owner_id}/pets/9999/visits/new")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    // 宠物不属于该主人
    let res = app
        .post_form(
            &format!("/owners/{other}/pets/{pet_id}/visits/new"),
            "description=checkup",
        )
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(app.owner(owner_id).await.pet(pet_id).unwrap().visits.is_empty());
}
