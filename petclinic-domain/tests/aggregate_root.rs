use async_trait::async_trait;
use chrono::NaiveDate;
use petclinic_domain::aggregate::Aggregate;
use petclinic_domain::aggregate_root::AggregateRoot;
use petclinic_domain::entity::Entity;
use petclinic_domain::error::{DomainError, DomainResult};
use petclinic_domain::owner::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId, Visit};
use petclinic_domain::persist::AggregateRepository;
use petclinic_domain::value_object::{Telephone, Version};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MemRepo {
    rows: Mutex<HashMap<OwnerId, Owner>>,
    saves: Mutex<usize>,
}

#[async_trait]
impl AggregateRepository<Owner> for MemRepo {
    async fn find_by_id(&self, id: &OwnerId) -> DomainResult<Option<Owner>> {
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn save(&self, mut owner: Owner) -> DomainResult<Owner> {
        let mut rows = self.rows.lock().unwrap();
        if owner.is_new() {
            owner.assign_id(OwnerId::new(rows.len() as i64 + 1));
        }
        let mut next_pet = rows
            .values()
            .map(|o| o.pets().len() as i64)
            .sum::<i64>()
            + 1;
        for pet in owner.pets_mut() {
            if pet.is_new() {
                pet.assign_id(PetId::new(next_pet));
                next_pet += 1;
            }
        }
        owner.set_version(owner.version().next());
        owner.link_children();
        rows.insert(*owner.id().unwrap(), owner.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(owner)
    }
}

fn new_owner() -> Owner {
    Owner::builder()
        .first_name("George")
        .last_name("Franklin")
        .address("110 W. Liberty St.")
        .city("Madison")
        .telephone(Telephone::parse("6085551023").unwrap())
        .build()
}

fn cat() -> Pet {
    Pet::builder()
        .name("Leo")
        .birth_date(NaiveDate::from_ymd_opt(2010, 9, 7).unwrap())
        .pet_type(PetType::new(PetTypeId::new(1), "cat"))
        .build()
}

#[tokio::test]
async fn create_assigns_identity_and_rejects_persisted_aggregates() {
    let repo = Arc::new(MemRepo::default());
    let root = AggregateRoot::<Owner, _>::new(repo.clone());

    let saved = root.create(new_owner()).await.unwrap();
    assert!(!saved.is_new());
    assert_eq!(saved.version().value(), 1);

    let err = root.create(saved).await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidState { .. }));
}

#[tokio::test]
async fn execute_loads_changes_and_saves_the_whole_tree() {
    let repo = Arc::new(MemRepo::default());
    let root = AggregateRoot::<Owner, _>::new(repo.clone());
    let id = *root.create(new_owner()).await.unwrap().id().unwrap();

    let (owner, ()) = root
        .execute(&id, |o| {
            o.add_pet(cat());
            Ok(())
        })
        .await
        .unwrap();
    let pet = owner.pet("leo").unwrap();
    assert_eq!(pet.owner_id(), Some(id));
    let pet_id = *pet.id().unwrap();

    let (owner, ()) = root
        .execute(&id, |o| o.add_visit(pet_id, Visit::today("rabies shot")?))
        .await
        .unwrap();
    let visits = owner.pet_by_id(pet_id).unwrap().visits();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].pet_id(), Some(pet_id));
    assert_eq!(owner.version().value(), 3);
}

#[tokio::test]
async fn stale_expected_version_is_rejected_before_the_change() {
    let repo = Arc::new(MemRepo::default());
    let root = AggregateRoot::<Owner, _>::new(repo.clone());
    let id = *root.create(new_owner()).await.unwrap().id().unwrap();

    let (owner, ()) = root
        .execute_expecting(&id, Some(Version::from(1)), |o| {
            o.set_city("Monona");
            Ok(())
        })
        .await
        .unwrap();
    assert_eq!(owner.version().value(), 2);

    let err = root
        .execute_expecting(&id, Some(Version::from(1)), |o| {
            o.set_city("Sun Prairie");
            Ok(())
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::VersionConflict {
            expected: 1,
            actual: 2
        }
    ));
    assert_eq!(*repo.saves.lock().unwrap(), 2);
    let stored = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(stored.city(), "Monona");
}

#[tokio::test]
async fn execute_on_unknown_id_is_not_found() {
    let root = AggregateRoot::<Owner, _>::new(MemRepo::default());
    let err = root
        .execute(&OwnerId::new(99), |_| Ok(()))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn failed_change_is_not_persisted() {
    let repo = Arc::new(MemRepo::default());
    let root = AggregateRoot::<Owner, _>::new(repo.clone());
    let id = *root.create(new_owner()).await.unwrap().id().unwrap();

    let err = root
        .execute(&id, |o| o.add_visit(PetId::new(404), Visit::today("ghost")?))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
    assert_eq!(*repo.saves.lock().unwrap(), 1);
}
