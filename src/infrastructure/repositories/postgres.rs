use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::domain::{
    models::{Memo, User},
    repositories::{MemoRepository, UserRepository},
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, email, display_name, created_at, updated_at FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn get(&self, id: &Uuid) -> anyhow::Result<Option<User>> {
        let record = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, email, display_name, created_at, updated_at FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(User::from))
    }

    async fn upsert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, display_name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET email = EXCLUDED.email,
                display_name = EXCLUDED.display_name,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.display_name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PostgresMemoRepository {
    pool: PgPool,
}

impl PostgresMemoRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl MemoRepository for PostgresMemoRepository {
    async fn insert(
        &self,
        title: String,
        content: String,
        owner_id: Uuid,
    ) -> anyhow::Result<Memo> {
        let record = sqlx::query_as::<_, MemoRecord>(
            r#"
            INSERT INTO memos (id, title, content, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, owner_id, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&title)
        .bind(&content)
        .bind(owner_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;
        Ok(record.into())
    }

    async fn get(&self, id: Uuid) -> anyhow::Result<Option<Memo>> {
        let record = sqlx::query_as::<_, MemoRecord>(
            r#"SELECT id, title, content, owner_id, created_at FROM memos WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Memo::from))
    }

    async fn list(&self) -> anyhow::Result<Vec<Memo>> {
        let records = sqlx::query_as::<_, MemoRecord>(
            r#"SELECT id, title, content, owner_id, created_at FROM memos ORDER BY seq ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(records.into_iter().map(Memo::from).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        title: String,
        content: String,
    ) -> anyhow::Result<Option<Memo>> {
        let record = sqlx::query_as::<_, MemoRecord>(
            r#"
            UPDATE memos
            SET title = $2, content = $3
            WHERE id = $1
            RETURNING id, title, content, owner_id, created_at
            "#,
        )
        .bind(id)
        .bind(&title)
        .bind(&content)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record.map(Memo::from))
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = sqlx::query(r#"DELETE FROM memos WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: Uuid,
    email: String,
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            email: record.email,
            display_name: record.display_name,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(FromRow)]
struct MemoRecord {
    id: Uuid,
    title: String,
    content: String,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl From<MemoRecord> for Memo {
    fn from(record: MemoRecord) -> Self {
        Memo {
            id: record.id,
            title: record.title,
            content: record.content,
            owner_id: record.owner_id,
            created_at: record.created_at,
        }
    }
}
