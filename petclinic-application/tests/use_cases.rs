use chrono::{Local, NaiveDate};
use petclinic_application::bootstrap::{Buses, Repositories};
use petclinic_application::catalog::{ListPetTypes, ListVets};
use petclinic_application::command::CommandBus;
use petclinic_application::context::AppContext;
use petclinic_application::error::AppError;
use petclinic_application::owners::{
    AddPet, AddVisit, CreateOwner, FindOwners, GetOwner, OwnerDetails, UpdateOwner, UpdatePet,
};
use petclinic_application::query::QueryBus;
use petclinic_domain::owner::{OwnerId, PetId};
use petclinic_domain::persist::PageRequest;
use petclinic_domain::error::DomainError;
use petclinic_domain::value_object::{Telephone, Version};
use petclinic_infra::memory::{
    InMemoryOwnerRepository, InMemoryPetTypeRepository, InMemoryVetRepository,
};
use std::sync::Arc;

fn buses() -> Buses {
    let repos = Repositories {
        owners: Arc::new(InMemoryOwnerRepository::new()),
        pet_types: Arc::new(InMemoryPetTypeRepository::with_reference_data()),
        vets: Arc::new(InMemoryVetRepository::with_reference_data()),
    };
    Buses::build(&repos).unwrap()
}

fn details(first_name: &str, last_name: &str) -> OwnerDetails {
    OwnerDetails {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "638 Cardinal Ave.".to_string(),
        city: "Sun Prairie".to_string(),
        telephone: Telephone::parse("6085551749").unwrap(),
    }
}

async fn create(buses: &Buses, first_name: &str, last_name: &str) -> OwnerId {
    buses
        .commands
        .dispatch(
            &AppContext::default(),
            CreateOwner {
                details: details(first_name, last_name),
            },
        )
        .await
        .unwrap()
}

async fn add_pet(buses: &Buses, owner_id: OwnerId, name: &str) -> Result<PetId, AppError> {
    buses
        .commands
        .dispatch(
            &AppContext::default(),
            AddPet {
                owner_id,
                name: name.to_string(),
                birth_date: NaiveDate::from_ymd_opt(2019, 6, 8).unwrap(),
                pet_type: "cat".to_string(),
            },
        )
        .await
}

#[tokio::test]
async fn created_owner_is_found_by_last_name() {
    let buses = buses();
    let ctx = AppContext::with_correlation_id("t-1");
    let id = create(&buses, "Maria", "Escobito").await;

    let page = buses
        .queries
        .dispatch(
            &ctx,
            FindOwners {
                last_name: "Esco".to_string(),
                page: PageRequest::of(0, 5),
            },
        )
        .await
        .unwrap();
    assert_eq!(page.total_elements(), 1);
    assert_eq!(page.content()[0].id, Some(id));
    assert_eq!(page.content()[0].full_name(), "Maria Escobito");
}

#[tokio::test]
async fn blank_last_name_lists_every_owner() {
    let buses = buses();
    create(&buses, "A", "Black").await;
    create(&buses, "B", "White").await;

    let page = buses
        .queries
        .dispatch(
            &AppContext::default(),
            FindOwners {
                last_name: "  ".to_string(),
                page: PageRequest::Unpaged,
            },
        )
        .await
        .unwrap();
    assert_eq!(page.total_elements(), 2);
}

#[tokio::test]
async fn update_owner_then_search_shows_new_name() {
    let buses = buses();
    let id = create(&buses, "Carlos", "Estaban").await;

    buses
        .commands
        .dispatch(
            &AppContext::default(),
            UpdateOwner {
                owner_id: id,
                details: details("Charles", "Estaban"),
                expected_version: Some(Version::from(1)),
            },
        )
        .await
        .unwrap();

    let page = buses
        .queries
        .dispatch(
            &AppContext::default(),
            FindOwners {
                last_name: "Estaban".to_string(),
                page: PageRequest::Unpaged,
            },
        )
        .await
        .unwrap();
    assert_eq!(page.content()[0].first_name, "Charles");
}

#[tokio::test]
async fn update_from_a_stale_form_is_a_conflict() {
    let buses = buses();
    let id = create(&buses, "Maria", "Escobito").await;
    let update = |first_name: &str| UpdateOwner {
        owner_id: id,
        details: details(first_name, "Escobito"),
        expected_version: Some(Version::from(1)),
    };

    buses
        .commands
        .dispatch(&AppContext::default(), update("Mary"))
        .await
        .unwrap();
    let err = buses
        .commands
        .dispatch(&AppContext::default(), update("Marie"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::VersionConflict {
            expected: 1,
            actual: 2
        })
    ));

    let owner = buses
        .queries
        .dispatch(&AppContext::default(), GetOwner { owner_id: id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.first_name, "Mary");
    assert_eq!(owner.version, 2);
}

#[tokio::test]
async fn duplicate_pet_name_is_a_field_error() {
    let buses = buses();
    let id = create(&buses, "Harold", "Davis").await;

    add_pet(&buses, id, "Basil").await.unwrap();
    let err = add_pet(&buses, id, "basil").await.unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "name", .. }));

    let owner = buses
        .queries
        .dispatch(&AppContext::default(), GetOwner { owner_id: id })
        .await
        .unwrap()
        .unwrap();
    assert_eq!(owner.pets.len(), 1);
}

#[tokio::test]
async fn unknown_pet_type_is_a_field_error() {
    let buses = buses();
    let id = create(&buses, "David", "Schroeder").await;
    let err = buses
        .commands
        .dispatch(
            &AppContext::default(),
            AddPet {
                owner_id: id,
                name: "Freddy".to_string(),
                birth_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
                pet_type: "dragon".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "type", .. }));
}

#[tokio::test]
async fn update_pet_may_keep_its_own_name() {
    let buses = buses();
    let id = create(&buses, "Jeff", "Black").await;
    let lucky = add_pet(&buses, id, "Lucky").await.unwrap();
    add_pet(&buses, id, "Sly").await.unwrap();

    let rename = |name: &str| UpdatePet {
        owner_id: id,
        pet_id: lucky,
        name: name.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2011, 8, 6).unwrap(),
        pet_type: "dog".to_string(),
        expected_version: None,
    };

    buses
        .commands
        .dispatch(&AppContext::default(), rename("LUCKY"))
        .await
        .unwrap();
    let err = buses
        .commands
        .dispatch(&AppContext::default(), rename("sly"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "name", .. }));

    let owner = buses
        .queries
        .dispatch(&AppContext::default(), GetOwner { owner_id: id })
        .await
        .unwrap()
        .unwrap();
    let pet = owner.pet(lucky).unwrap();
    assert_eq!(pet.name, "LUCKY");
    assert_eq!(pet.pet_type, "dog");
}

#[tokio::test]
async fn add_visit_defaults_to_today_and_keeps_description() {
    let buses = buses();
    let id = create(&buses, "Eduardo", "Rodriquez").await;
    let rosy = add_pet(&buses, id, "Rosy").await.unwrap();

    let visit_id = buses
        .commands
        .dispatch(
            &AppContext::default(),
            AddVisit {
                owner_id: id,
                pet_id: rosy,
                date: None,
                description: "rabies shot".to_string(),
            },
        )
        .await
        .unwrap();

    let owner = buses
        .queries
        .dispatch(&AppContext::default(), GetOwner { owner_id: id })
        .await
        .unwrap()
        .unwrap();
    let visits = &owner.pet(rosy).unwrap().visits;
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].id, Some(visit_id));
    assert_eq!(visits[0].date, Local::now().date_naive());
    assert_eq!(visits[0].description, "rabies shot");
}

#[tokio::test]
async fn blank_visit_description_is_rejected_without_saving() {
    let buses = buses();
    let id = create(&buses, "Jean", "Coleman").await;
    let pet = add_pet(&buses, id, "Samantha").await.unwrap();

    let err = buses
        .commands
        .dispatch(
            &AppContext::default(),
            AddVisit {
                owner_id: id,
                pet_id: pet,
                date: None,
                description: "   ".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { field: "description", .. }));

    let owner = buses
        .queries
        .dispatch(&AppContext::default(), GetOwner { owner_id: id })
        .await
        .unwrap()
        .unwrap();
    assert!(owner.pet(pet).unwrap().visits.is_empty());
}

#[tokio::test]
async fn visit_for_foreign_pet_is_not_found() {
    let buses = buses();
    let george = create(&buses, "George", "Franklin").await;
    let betty = create(&buses, "Betty", "Davis").await;
    let leo = add_pet(&buses, george, "Leo").await.unwrap();

    let err = buses
        .commands
        .dispatch(
            &AppContext::default(),
            AddVisit {
                owner_id: betty,
                pet_id: leo,
                date: None,
                description: "checkup".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn missing_owner_is_none_or_not_found() {
    let buses = buses();
    let missing = OwnerId::new(404);
    let owner = buses
        .queries
        .dispatch(&AppContext::default(), GetOwner { owner_id: missing })
        .await
        .unwrap();
    assert!(owner.is_none());

    let err = add_pet(&buses, missing, "Ghost").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn reference_catalogs_are_listed() {
    let buses = buses();
    let types = buses
        .queries
        .dispatch(&AppContext::default(), ListPetTypes)
        .await
        .unwrap();
    assert_eq!(types.first().map(|t| t.name.as_str()), Some("bird"));

    let vets = buses
        .queries
        .dispatch(
            &AppContext::default(),
            ListVets {
                page: PageRequest::Unpaged,
            },
        )
        .await
        .unwrap();
    assert_eq!(vets.total_elements(), 6);
    let json = serde_json::to_value(&vets).unwrap();
    assert_eq!(json["content"][0]["lastName"], "Carter");
}
