use crate::reference;
use petclinic_domain::error::DomainResult;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS owners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    version INTEGER NOT NULL DEFAULT 0,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    address TEXT NOT NULL,
    city TEXT NOT NULL,
    telephone TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_owners_last_name ON owners(last_name);

CREATE TABLE IF NOT EXISTS types (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS pets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    birth_date TEXT NOT NULL,
    type_id INTEGER NOT NULL REFERENCES types(id),
    owner_id INTEGER NOT NULL REFERENCES owners(id)
);
CREATE INDEX IF NOT EXISTS idx_pets_owner ON pets(owner_id);

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pet_id INTEGER NOT NULL REFERENCES pets(id),
    visit_date TEXT NOT NULL,
    description TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_visits_pet ON visits(pet_id);

CREATE TABLE IF NOT EXISTS vets (
    id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS specialties (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS vet_specialties (
    vet_id INTEGER NOT NULL REFERENCES vets(id),
    specialty_id INTEGER NOT NULL REFERENCES specialties(id),
    PRIMARY KEY (vet_id, specialty_id)
);
"#;

pub(super) async fn migrate(pool: &SqlitePool) -> DomainResult<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    debug!("SQLite schema initialized");
    Ok(())
}

/// 幂等写入参考数据（`INSERT OR IGNORE`）
pub(super) async fn seed_reference_data(pool: &SqlitePool) -> DomainResult<()> {
    let mut tx = pool.begin().await?;

    for pet_type in reference::pet_types() {
        sqlx::query("INSERT OR IGNORE INTO types (id, name) VALUES (?, ?)")
            .bind(pet_type.id().into_inner())
            .bind(pet_type.name())
            .execute(&mut *tx)
            .await?;
    }

    for specialty in reference::specialties() {
        sqlx::query("INSERT OR IGNORE INTO specialties (id, name) VALUES (?, ?)")
            .bind(specialty.id().into_inner())
            .bind(specialty.name())
            .execute(&mut *tx)
            .await?;
    }

    for vet in reference::vets() {
        let vet_id = vet.id().into_inner();
        sqlx::query("INSERT OR IGNORE INTO vets (id, first_name, last_name) VALUES (?, ?, ?)")
            .bind(vet_id)
            .bind(vet.first_name())
            .bind(vet.last_name())
            .execute(&mut *tx)
            .await?;
        for specialty in vet.specialties() {
            sqlx::query(
                "INSERT OR IGNORE INTO vet_specialties (vet_id, specialty_id) VALUES (?, ?)",
            )
            .bind(vet_id)
            .bind(specialty.id().into_inner())
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    debug!("reference data seeded");
    Ok(())
}
