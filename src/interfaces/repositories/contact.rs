use async_trait::async_trait;

use crate::{
    entities::contact::{ContactMessage, NewContactMessage},
    errors::AppError,
    repositories::sqlx_repo::SqlxContactRepo,
};

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persists a submission and returns the stored row. Append-only;
    /// there is no update or delete lifecycle.
    async fn create_contact_message(
        &self,
        msg: &NewContactMessage,
    ) -> Result<ContactMessage, AppError>;

    /// All messages, newest first.
    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError>;
}

impl SqlxContactRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxContactRepo { pool }
    }
}

#[async_trait]
impl ContactRepository for SqlxContactRepo {
    async fn create_contact_message(
        &self,
        msg: &NewContactMessage,
    ) -> Result<ContactMessage, AppError> {
        let stored = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, subject, message, created_at
            "#,
        )
        .bind(&msg.name)
        .bind(&msg.email)
        .bind(&msg.subject)
        .bind(&msg.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>, AppError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, subject, message, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
