use async_trait::async_trait;
use petclinic_domain::error::DomainResult;
use petclinic_domain::owner::{PetType, PetTypeId};
use petclinic_domain::persist::{Page, PageRequest, PetTypeRepository, VetRepository};
use petclinic_domain::vet::{Specialty, SpecialtyId, Vet, VetId};
use sqlx::sqlite::SqlitePool;

use super::limit_offset;

pub struct SqlitePetTypeRepository {
    pool: SqlitePool,
}

impl SqlitePetTypeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PetTypeRepository for SqlitePetTypeRepository {
    #[tracing::instrument(skip(self))]
    async fn find_pet_types(&self) -> DomainResult<Vec<PetType>> {
        let rows: Vec<(i64, String)> = sqlx::query_as("SELECT id, name FROM types ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(id, name)| PetType::new(PetTypeId::new(id), name))
            .collect())
    }
}

pub struct SqliteVetRepository {
    pool: SqlitePool,
}

impl SqliteVetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VetRepository for SqliteVetRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<Vet>> {
        let (limit, offset) = limit_offset(page);
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vets")
            .fetch_one(&self.pool)
            .await?;

        let rows: Vec<(i64, String, String)> = sqlx::query_as(
            "SELECT id, first_name, last_name FROM vets ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let mut vets = Vec::with_capacity(rows.len());
        for (id, first_name, last_name) in rows {
            let specialties: Vec<(i64, String)> = sqlx::query_as(
                "SELECT s.id, s.name
                 FROM specialties s JOIN vet_specialties vs ON vs.specialty_id = s.id
                 WHERE vs.vet_id = ?",
            )
            .bind(id)
            .fetch_all(&self.pool)
            .await?;

            let specialties = specialties
                .into_iter()
                .map(|(sid, name)| Specialty::new(SpecialtyId::new(sid), name))
                .collect();
            vets.push(Vet::new(VetId::new(id), first_name, last_name, specialties));
        }

        Ok(Page::new(vets, page, total as u64))
    }
}
