use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use petclinic_domain::aggregate::Aggregate;
use petclinic_domain::entity::Entity;
use petclinic_domain::error::{DomainError, DomainResult};
use petclinic_domain::owner::{LastNameStartsWith, Owner, OwnerId, PetId, VisitId, all_owners};
use petclinic_domain::persist::{AggregateRepository, OwnerRepository, Page, PageRequest};
use petclinic_domain::specification::Specification;
use std::sync::atomic::{AtomicI64, Ordering};

/// 基于 DashMap 的主人聚合仓储
///
/// 标识由原子计数器分配；保存时比较版本号，语义与 SQLite 实现一致。
pub struct InMemoryOwnerRepository {
    owners: DashMap<OwnerId, Owner>,
    next_owner: AtomicI64,
    next_pet: AtomicI64,
    next_visit: AtomicI64,
}

impl Default for InMemoryOwnerRepository {
    fn default() -> Self {
        Self {
            owners: DashMap::new(),
            next_owner: AtomicI64::new(1),
            next_pet: AtomicI64::new(1),
            next_visit: AtomicI64::new(1),
        }
    }
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn assign_child_ids(&self, owner: &mut Owner) {
        for pet in owner.pets_mut() {
            if pet.is_new() {
                pet.assign_id(PetId::new(self.next_pet.fetch_add(1, Ordering::SeqCst)));
            }
            for visit in pet.visits_mut() {
                if visit.is_new() {
                    visit.assign_id(VisitId::new(self.next_visit.fetch_add(1, Ordering::SeqCst)));
                }
            }
        }
    }

    fn matching(&self, spec: &dyn Specification<Owner>, page: PageRequest) -> Page<Owner> {
        let mut found: Vec<Owner> = self
            .owners
            .iter()
            .filter(|e| spec.is_satisfied_by(e.value()))
            .map(|e| e.value().clone())
            .collect();
        found.sort_by_key(|o| o.id().copied());
        page.slice(found)
    }
}

#[async_trait]
impl AggregateRepository<Owner> for InMemoryOwnerRepository {
    async fn find_by_id(&self, id: &OwnerId) -> DomainResult<Option<Owner>> {
        Ok(self.owners.get(id).map(|e| e.value().clone()))
    }

    async fn save(&self, mut owner: Owner) -> DomainResult<Owner> {
        let next_version = owner.version().next();

        match owner.id().copied() {
            None => {
                let id = OwnerId::new(self.next_owner.fetch_add(1, Ordering::SeqCst));
                owner.assign_id(id);
                self.assign_child_ids(&mut owner);
                owner.set_version(next_version);
                owner.link_children();
                self.owners.insert(id, owner.clone());
            }
            Some(id) => match self.owners.entry(id) {
                Entry::Vacant(_) => {
                    return Err(DomainError::not_found(format!("owner {id}")));
                }
                Entry::Occupied(mut stored) => {
                    let actual = stored.get().version();
                    if actual != owner.version() {
                        return Err(DomainError::VersionConflict {
                            expected: owner.version().value(),
                            actual: actual.value(),
                        });
                    }
                    self.assign_child_ids(&mut owner);
                    owner.set_version(next_version);
                    owner.link_children();
                    stored.insert(owner.clone());
                }
            },
        }

        Ok(owner)
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn find_by_last_name_starting_with(
        &self,
        prefix: &str,
        page: PageRequest,
    ) -> DomainResult<Page<Owner>> {
        Ok(self.matching(&LastNameStartsWith::new(prefix), page))
    }

    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<Owner>> {
        Ok(self.matching(&all_owners(), page))
    }
}
