use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::project::{NewProject, Project, ProjectFilters, UpdateProject},
    errors::AppError,
    repositories::project::ProjectRepository,
};

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists projects matching the query filters. An empty result is a
    /// normal outcome, not an error.
    pub async fn list_projects(
        &self,
        filters: &ProjectFilters,
    ) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects(filters).await
    }

    /// Fetches a single project. A malformed identifier is indistinguishable
    /// from an unknown one: both are Not-Found.
    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let project_id = parse_project_id(id)?;

        self.project_repo
            .get_project_by_id(&project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    pub async fn create_project(&self, request: NewProject) -> Result<Project, AppError> {
        request.validate()?;

        self.project_repo.create_project(&request).await
    }

    /// Partial or full field replacement; supplied fields are re-validated.
    pub async fn update_project(
        &self,
        id: &str,
        request: UpdateProject,
    ) -> Result<Project, AppError> {
        request.validate()?;

        let project_id = parse_project_id(id)?;

        self.project_repo
            .update_project(&project_id, &request)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))
    }

    /// Idempotent in effect: deleting an already-deleted project reports
    /// Not-Found rather than a state error.
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let project_id = parse_project_id(id)?;

        if self.project_repo.delete_project(&project_id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("Project not found".to_string()))
        }
    }
}

fn parse_project_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::NotFound("Project not found".to_string()))
}
