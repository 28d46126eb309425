use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Closed set of project categories. Unknown values are rejected at the
/// serde boundary and by the `project_category` enum type in Postgres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "project_category", rename_all = "lowercase")]
pub enum Category {
    Web,
    Mobile,
    Desktop,
    Other,
}

impl Default for Category {
    fn default() -> Self {
        Category::Web
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "kebab-case")]
#[sqlx(type_name = "project_status", rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Completed
    }
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub image: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub category: Category,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub status: ProjectStatus,
    pub is_featured: bool,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── Input & Validation ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 2000, message = "Description must be between 1 and 2000 characters"))]
    pub description: String,

    #[validate(length(max = 200, message = "Short description cannot be more than 200 characters"))]
    pub short_description: Option<String>,

    #[serde(default = "default_image")]
    pub image: String,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub category: Category,

    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,

    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub order: i32,
}

fn default_image() -> String {
    "default-project.jpg".to_string()
}

/// Partial update payload: absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 100, message = "Title must be between 1 and 100 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "Description must be between 1 and 2000 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 200, message = "Short description cannot be more than 200 characters"))]
    pub short_description: Option<String>,

    pub image: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub category: Option<Category>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub status: Option<ProjectStatus>,
    pub is_featured: Option<bool>,
    pub order: Option<i32>,
}

/// Query-string filters for the listing endpoint. Absent filters impose no
/// constraint; present filters AND together. `featured` only constrains
/// when true, matching the public API's established behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFilters {
    pub category: Option<Category>,
    pub featured: Option<bool>,
    pub status: Option<ProjectStatus>,
}

impl ProjectFilters {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.featured.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_payload() -> NewProject {
        NewProject {
            title: "The Shoe Store".into(),
            description: "Full-stack e-commerce website for shoe shopping".into(),
            short_description: Some("Full-stack e-commerce for shoes".into()),
            image: default_image(),
            technologies: vec!["React".into(), "Node.js".into()],
            features: vec![],
            category: Category::Web,
            demo_url: None,
            github_url: Some("https://github.com/example/shoe-store".into()),
            live_url: None,
            status: ProjectStatus::Completed,
            is_featured: true,
            order: 0,
        }
    }

    #[test]
    fn valid_payload_passes_validation() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut payload = valid_payload();
        payload.title = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn oversized_title_is_rejected() {
        let mut payload = valid_payload();
        payload.title = "x".repeat(101);
        assert!(payload.validate().is_err());
    }

    #[test]
    fn oversized_short_description_is_rejected() {
        let mut payload = valid_payload();
        payload.short_description = Some("x".repeat(201));
        assert!(payload.validate().is_err());
    }

    #[test]
    fn category_enum_is_closed() {
        let result: Result<NewProject, _> = serde_json::from_value(serde_json::json!({
            "title": "A project",
            "description": "A description",
            "category": "embedded"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        assert_eq!(
            serde_json::to_value(ProjectStatus::InProgress).unwrap(),
            serde_json::json!("in-progress")
        );
        let status: ProjectStatus = serde_json::from_value(serde_json::json!("in-progress")).unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let payload: NewProject = serde_json::from_value(serde_json::json!({
            "title": "Minimal",
            "description": "Only the required fields"
        }))
        .unwrap();
        assert_eq!(payload.category, Category::Web);
        assert_eq!(payload.status, ProjectStatus::Completed);
        assert!(!payload.is_featured);
        assert_eq!(payload.order, 0);
        assert_eq!(payload.image, "default-project.jpg");
    }

    #[test]
    fn project_serializes_camel_case() {
        let payload = valid_payload();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("shortDescription").is_some());
        assert!(value.get("isFeatured").is_some());
        assert!(value.get("githubUrl").is_some());
    }
}
