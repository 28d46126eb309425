use async_trait::async_trait;
use sqlx::QueryBuilder;
use uuid::Uuid;

use crate::{
    entities::project::{NewProject, Project, ProjectFilters, UpdateProject},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

const PROJECT_COLUMNS: &str = "id, title, description, short_description, image, technologies, \
                               features, category, demo_url, github_url, live_url, status, \
                               is_featured, sort_order, created_at, updated_at";

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Lists projects matching the filters, ordered by
    /// `(sort_order ASC, created_at DESC)`.
    async fn list_projects(&self, filters: &ProjectFilters) -> Result<Vec<Project>, AppError>;

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError>;

    async fn create_project(&self, new_project: &NewProject) -> Result<Project, AppError>;

    /// Partial update: absent fields keep their stored values.
    async fn update_project(
        &self,
        id: &Uuid,
        update: &UpdateProject,
    ) -> Result<Option<Project>, AppError>;

    /// Returns `Ok(false)` when no row matched the id.
    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }

    pub async fn check_connection(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self, filters: &ProjectFilters) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM projects", PROJECT_COLUMNS));

        let mut prefix = " WHERE ";
        if let Some(category) = filters.category {
            builder.push(prefix).push("category = ").push_bind(category);
            prefix = " AND ";
        }
        // featured=false imposes no constraint, matching the public API
        if filters.featured == Some(true) {
            builder.push(prefix).push("is_featured = TRUE");
            prefix = " AND ";
        }
        if let Some(status) = filters.status {
            builder.push(prefix).push("status = ").push_bind(status);
        }

        builder.push(" ORDER BY sort_order ASC, created_at DESC");

        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(&format!(
            "SELECT {} FROM projects WHERE id = $1",
            PROJECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn create_project(&self, new_project: &NewProject) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>(&format!(
            r#"
            INSERT INTO projects
                (title, description, short_description, image, technologies, features,
                 category, demo_url, github_url, live_url, status, is_featured, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(&new_project.title)
        .bind(&new_project.description)
        .bind(&new_project.short_description)
        .bind(&new_project.image)
        .bind(&new_project.technologies)
        .bind(&new_project.features)
        .bind(new_project.category)
        .bind(&new_project.demo_url)
        .bind(&new_project.github_url)
        .bind(&new_project.live_url)
        .bind(new_project.status)
        .bind(new_project.is_featured)
        .bind(new_project.order)
        .fetch_one(&self.pool)
        .await?;

        Ok(project)
    }

    async fn update_project(
        &self,
        id: &Uuid,
        update: &UpdateProject,
    ) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>(&format!(
            r#"
            UPDATE projects SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                short_description = COALESCE($3, short_description),
                image = COALESCE($4, image),
                technologies = COALESCE($5, technologies),
                features = COALESCE($6, features),
                category = COALESCE($7, category),
                demo_url = COALESCE($8, demo_url),
                github_url = COALESCE($9, github_url),
                live_url = COALESCE($10, live_url),
                status = COALESCE($11, status),
                is_featured = COALESCE($12, is_featured),
                sort_order = COALESCE($13, sort_order),
                updated_at = NOW()
            WHERE id = $14
            RETURNING {}
            "#,
            PROJECT_COLUMNS
        ))
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.short_description)
        .bind(&update.image)
        .bind(&update.technologies)
        .bind(&update.features)
        .bind(update.category)
        .bind(&update.demo_url)
        .bind(&update.github_url)
        .bind(&update.live_url)
        .bind(update.status)
        .bind(update.is_featured)
        .bind(update.order)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
