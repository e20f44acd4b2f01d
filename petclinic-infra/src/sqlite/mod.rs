//! SQLite 持久化（sqlx）
//!
//! - [`Database`]：连接池、建表与参考数据写入；
//! - 各仓储实现共享同一个 `SqlitePool`，聚合保存在单个事务内完成。
//!
mod catalog;
mod owner_repository;
mod schema;

pub use catalog::{SqlitePetTypeRepository, SqliteVetRepository};
pub use owner_repository::SqliteOwnerRepository;

use petclinic_domain::error::DomainResult;
use petclinic_domain::persist::PageRequest;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

/// 分页请求转为 `LIMIT` / `OFFSET` 参数；不分页时 `LIMIT -1`，超出 i64 的偏移截断为 `i64::MAX`
pub(crate) fn limit_offset(page: PageRequest) -> (i64, i64) {
    let limit = page
        .limit()
        .map_or(-1, |l| i64::try_from(l).unwrap_or(i64::MAX));
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}

/// 数据库句柄
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// 建立连接池。内存数据库（`sqlite::memory:` 或 `mode=memory`）只使用单个常驻连接，
    /// 否则每个连接都会看到一个独立的空库。
    pub async fn connect(url: &str, max_connections: u32) -> DomainResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = url.contains(":memory:") || url.contains("mode=memory");
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        info!(url, in_memory, "SQLite pool ready");
        Ok(Self { pool })
    }

    /// 内存数据库：建表并写入参考数据
    pub async fn in_memory() -> DomainResult<Self> {
        let db = Self::connect("sqlite::memory:", 1).await?;
        db.migrate().await?;
        db.seed_reference_data().await?;
        Ok(db)
    }

    pub async fn migrate(&self) -> DomainResult<()> {
        schema::migrate(&self.pool).await
    }

    pub async fn seed_reference_data(&self) -> DomainResult<()> {
        schema::seed_reference_data(&self.pool).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn owner_repository(&self) -> SqliteOwnerRepository {
        SqliteOwnerRepository::new(self.pool.clone())
    }

    pub fn pet_type_repository(&self) -> SqlitePetTypeRepository {
        SqlitePetTypeRepository::new(self.pool.clone())
    }

    pub fn vet_repository(&self) -> SqliteVetRepository {
        SqliteVetRepository::new(self.pool.clone())
    }
}
