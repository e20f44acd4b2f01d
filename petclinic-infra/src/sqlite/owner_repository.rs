use async_trait::async_trait;
use chrono::NaiveDate;
use petclinic_domain::aggregate::Aggregate;
use petclinic_domain::entity::Entity;
use petclinic_domain::error::{DomainError, DomainResult};
use petclinic_domain::owner::{Owner, OwnerId, Pet, PetId, PetType, PetTypeId, Visit, VisitId};
use petclinic_domain::persist::{AggregateRepository, OwnerRepository, Page, PageRequest};
use petclinic_domain::value_object::{Telephone, Version};
use sqlx::SqliteConnection;
use sqlx::sqlite::SqlitePool;
use std::collections::HashMap;
use super::limit_offset;
use tracing::debug;

type OwnerRow = (i64, i64, String, String, String, String, String);
type PetRow = (i64, String, NaiveDate, i64, String);
type VisitRow = (i64, i64, NaiveDate, String);

const OWNER_COLUMNS: &str = "id, version, first_name, last_name, address, city, telephone";

/// 主人聚合的 SQLite 仓储：加载时一次取齐宠物与就诊记录，保存时级联写入
pub struct SqliteOwnerRepository {
    pool: SqlitePool,
}

impl SqliteOwnerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn load(&self, rows: Vec<OwnerRow>) -> DomainResult<Vec<Owner>> {
        let mut conn = self.pool.acquire().await?;
        let mut owners = Vec::with_capacity(rows.len());
        for row in rows {
            owners.push(load_children(&mut conn, row).await?);
        }
        Ok(owners)
    }

    /// `filter` 中的每个 `?` 依次绑定 `args`，分页参数追加在其后
    async fn page(
        &self,
        filter: &str,
        args: &[&str],
        page: PageRequest,
    ) -> DomainResult<Page<Owner>> {
        let count_sql = format!("SELECT COUNT(*) FROM owners {filter}");
        let mut count = sqlx::query_as::<_, (i64,)>(&count_sql);
        for arg in args {
            count = count.bind(*arg);
        }
        let (total,) = count.fetch_one(&self.pool).await?;

        let (limit, offset) = limit_offset(page);
        let select_sql =
            format!("SELECT {OWNER_COLUMNS} FROM owners {filter} ORDER BY id LIMIT ? OFFSET ?");
        let mut select = sqlx::query_as::<_, OwnerRow>(&select_sql);
        for arg in args {
            select = select.bind(*arg);
        }
        let rows = select
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let owners = self.load(rows).await?;
        Ok(Page::new(owners, page, total as u64))
    }
}

async fn load_children(conn: &mut SqliteConnection, row: OwnerRow) -> DomainResult<Owner> {
    let (id, version, first_name, last_name, address, city, telephone) = row;

    let pets: Vec<PetRow> = sqlx::query_as(
        "SELECT p.id, p.name, p.birth_date, t.id, t.name
         FROM pets p JOIN types t ON p.type_id = t.id
         WHERE p.owner_id = ? ORDER BY p.id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    let visit_rows: Vec<VisitRow> = sqlx::query_as(
        "SELECT v.id, v.pet_id, v.visit_date, v.description
         FROM visits v JOIN pets p ON v.pet_id = p.id
         WHERE p.owner_id = ? ORDER BY v.id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await?;

    let mut visits: HashMap<i64, Vec<Visit>> = HashMap::new();
    for (visit_id, pet_id, date, description) in visit_rows {
        let visit = Visit::builder()
            .id(VisitId::new(visit_id))
            .pet_id(PetId::new(pet_id))
            .date(date)
            .description(description)
            .build();
        visits.entry(pet_id).or_default().push(visit);
    }

    let owner_id = OwnerId::new(id);
    let pets = pets
        .into_iter()
        .map(|(pet_id, name, birth_date, type_id, type_name)| {
            Pet::builder()
                .id(PetId::new(pet_id))
                .owner_id(owner_id)
                .name(name)
                .birth_date(birth_date)
                .pet_type(PetType::new(PetTypeId::new(type_id), type_name))
                .visits(visits.remove(&pet_id).unwrap_or_default())
                .build()
        })
        .collect();

    Ok(Owner::builder()
        .id(owner_id)
        .version(Version::from_value(version as usize))
        .first_name(first_name)
        .last_name(last_name)
        .address(address)
        .city(city)
        .telephone(Telephone::parse(telephone)?)
        .pets(pets)
        .build())
}

#[async_trait]
impl AggregateRepository<Owner> for SqliteOwnerRepository {
    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: &OwnerId) -> DomainResult<Option<Owner>> {
        let row: Option<OwnerRow> =
            sqlx::query_as(&format!("SELECT {OWNER_COLUMNS} FROM owners WHERE id = ?"))
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await?;

        match row {
            Some(row) => {
                let mut conn = self.pool.acquire().await?;
                Ok(Some(load_children(&mut conn, row).await?))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self, owner), fields(owner_id = ?owner.id(), version = %owner.version()))]
    async fn save(&self, mut owner: Owner) -> DomainResult<Owner> {
        let current = owner.version();
        let next = current.next();
        let mut tx = self.pool.begin().await?;

        let owner_id = match owner.id().copied() {
            None => {
                let (id,): (i64,) = sqlx::query_as(
                    "INSERT INTO owners (version, first_name, last_name, address, city, telephone)
                     VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
                )
                .bind(next.value() as i64)
                .bind(owner.first_name())
                .bind(owner.last_name())
                .bind(owner.address())
                .bind(owner.city())
                .bind(owner.telephone().as_str())
                .fetch_one(&mut *tx)
                .await?;
                let id = OwnerId::new(id);
                owner.assign_id(id);
                id
            }
            Some(id) => {
                let updated = sqlx::query(
                    "UPDATE owners
                     SET version = ?, first_name = ?, last_name = ?, address = ?, city = ?, telephone = ?
                     WHERE id = ? AND version = ?",
                )
                .bind(next.value() as i64)
                .bind(owner.first_name())
                .bind(owner.last_name())
                .bind(owner.address())
                .bind(owner.city())
                .bind(owner.telephone().as_str())
                .bind(id.into_inner())
                .bind(current.value() as i64)
                .execute(&mut *tx)
                .await?;

                if updated.rows_affected() == 0 {
                    let stored: Option<(i64,)> =
                        sqlx::query_as("SELECT version FROM owners WHERE id = ?")
                            .bind(id.into_inner())
                            .fetch_optional(&mut *tx)
                            .await?;
                    return Err(match stored {
                        Some((actual,)) => DomainError::VersionConflict {
                            expected: current.value(),
                            actual: actual as usize,
                        },
                        None => DomainError::not_found(format!("owner {id}")),
                    });
                }
                id
            }
        };

        for pet in owner.pets_mut() {
            let pet_id = match pet.id().copied() {
                Some(pet_id) => {
                    sqlx::query(
                        "UPDATE pets SET name = ?, birth_date = ?, type_id = ?
                         WHERE id = ? AND owner_id = ?",
                    )
                    .bind(pet.name())
                    .bind(pet.birth_date())
                    .bind(pet.pet_type().id().into_inner())
                    .bind(pet_id.into_inner())
                    .bind(owner_id.into_inner())
                    .execute(&mut *tx)
                    .await?;
                    pet_id
                }
                None => {
                    let (id,): (i64,) = sqlx::query_as(
                        "INSERT INTO pets (name, birth_date, type_id, owner_id)
                         VALUES (?, ?, ?, ?) RETURNING id",
                    )
                    .bind(pet.name())
                    .bind(pet.birth_date())
                    .bind(pet.pet_type().id().into_inner())
                    .bind(owner_id.into_inner())
                    .fetch_one(&mut *tx)
                    .await?;
                    let pet_id = PetId::new(id);
                    pet.assign_id(pet_id);
                    pet_id
                }
            };

            for visit in pet.visits_mut() {
                match visit.id().copied() {
                    Some(visit_id) => {
                        sqlx::query("UPDATE visits SET visit_date = ?, description = ? WHERE id = ?")
                            .bind(visit.date())
                            .bind(visit.description())
                            .bind(visit_id.into_inner())
                            .execute(&mut *tx)
                            .await?;
                    }
                    None => {
                        let (id,): (i64,) = sqlx::query_as(
                            "INSERT INTO visits (pet_id, visit_date, description)
                             VALUES (?, ?, ?) RETURNING id",
                        )
                        .bind(pet_id.into_inner())
                        .bind(visit.date())
                        .bind(visit.description())
                        .fetch_one(&mut *tx)
                        .await?;
                        visit.assign_id(VisitId::new(id));
                    }
                }
            }
        }

        tx.commit().await?;

        owner.set_version(next);
        owner.link_children();
        debug!(owner_id = %owner_id, version = %next, "owner saved");
        Ok(owner)
    }
}

#[async_trait]
impl OwnerRepository for SqliteOwnerRepository {
    #[tracing::instrument(skip(self))]
    async fn find_by_last_name_starting_with(
        &self,
        prefix: &str,
        page: PageRequest,
    ) -> DomainResult<Page<Owner>> {
        if prefix.is_empty() {
            return Ok(Page::empty(page));
        }
        // substr + `=` 使用 BINARY 排序规则，前缀匹配区分大小写（LIKE 不区分）。
        // 只用匿名 `?`：与编号占位符混用时 sqlx 会错位绑定 LIMIT/OFFSET
        self.page(
            "WHERE substr(last_name, 1, length(?)) = ?",
            &[prefix, prefix],
            page,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn find_all(&self, page: PageRequest) -> DomainResult<Page<Owner>> {
        self.page("", &[], page).await
    }
}
