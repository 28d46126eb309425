//! Repository tests against a real PostgreSQL instance.
//!
//! Run with:
//!   APP_DATABASE_URL=postgres://... cargo test -- --ignored --test-threads=1

use sqlx::PgPool;
use uuid::Uuid;

use portfolio_api::db::postgres::{create_pool, run_migrations};
use portfolio_api::entities::project::{
    Category, NewProject, ProjectFilters, ProjectStatus, UpdateProject,
};
use portfolio_api::entities::contact::NewContactMessage;
use portfolio_api::repositories::{
    contact::ContactRepository, project::ProjectRepository,
    sqlx_repo::{SqlxContactRepo, SqlxProjectRepo},
};

async fn test_pool() -> PgPool {
    let url = std::env::var("APP_DATABASE_URL")
        .expect("APP_DATABASE_URL must be set for repository tests");

    let pool = create_pool(&url).await.expect("Failed to create test DB pool");
    run_migrations(&pool).await.expect("Failed to apply migrations");

    sqlx::query("TRUNCATE TABLE projects, contact_messages")
        .execute(&pool)
        .await
        .expect("Failed to truncate tables");

    pool
}

fn payload(title: &str, category: Category, order: i32) -> NewProject {
    serde_json::from_value(serde_json::json!({
        "title": title,
        "description": format!("Description for {title}"),
        "category": category,
        "order": order
    }))
    .expect("valid payload")
}

#[tokio::test]
#[ignore = "requires APP_DATABASE_URL"]
async fn create_then_get_round_trips_all_fields() {
    let repo = SqlxProjectRepo::new(test_pool().await);

    let mut new_project = payload("Round Trip", Category::Web, 3);
    new_project.technologies = vec!["Rust".into(), "Postgres".into()];
    new_project.short_description = Some("short".into());
    new_project.is_featured = true;

    let created = repo.create_project(&new_project).await.expect("create");
    assert_eq!(created.title, "Round Trip");
    assert_eq!(created.technologies, vec!["Rust", "Postgres"]);
    assert_eq!(created.order, 3);
    assert!(created.is_featured);

    let fetched = repo
        .get_project_by_id(&created.id)
        .await
        .expect("get")
        .expect("created project should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.short_description.as_deref(), Some("short"));
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires APP_DATABASE_URL"]
async fn listing_orders_by_sort_order_then_newest_first() {
    let repo = SqlxProjectRepo::new(test_pool().await);

    repo.create_project(&payload("B first by order", Category::Web, 0)).await.unwrap();
    repo.create_project(&payload("C second", Category::Web, 1)).await.unwrap();
    // Same sort_order as the first insert, created later: ties break newest first
    repo.create_project(&payload("A tie newest", Category::Web, 0)).await.unwrap();

    let listed = repo.list_projects(&ProjectFilters::default()).await.unwrap();
    let titles: Vec<&str> = listed.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A tie newest", "B first by order", "C second"]);

    for pair in listed.windows(2) {
        assert!(
            pair[0].order < pair[1].order
                || (pair[0].order == pair[1].order && pair[0].created_at >= pair[1].created_at)
        );
    }
}

#[tokio::test]
#[ignore = "requires APP_DATABASE_URL"]
async fn category_filters_partition_the_full_set() {
    let repo = SqlxProjectRepo::new(test_pool().await);

    for (title, category) in [
        ("Site", Category::Web),
        ("App", Category::Mobile),
        ("Tool", Category::Desktop),
        ("Misc", Category::Other),
        ("Another site", Category::Web),
    ] {
        repo.create_project(&payload(title, category, 0)).await.unwrap();
    }

    let all = repo.list_projects(&ProjectFilters::default()).await.unwrap();
    assert_eq!(all.len(), 5);

    let mut filtered_total = 0;
    for category in [Category::Web, Category::Mobile, Category::Desktop, Category::Other] {
        let filters = ProjectFilters { category: Some(category), ..ProjectFilters::default() };
        let subset = repo.list_projects(&filters).await.unwrap();
        assert!(subset.iter().all(|p| p.category == category));
        filtered_total += subset.len();
    }
    assert_eq!(filtered_total, all.len());
}

#[tokio::test]
#[ignore = "requires APP_DATABASE_URL"]
async fn featured_filter_constrains_only_when_true() {
    let repo = SqlxProjectRepo::new(test_pool().await);

    let mut featured = payload("Featured", Category::Web, 0);
    featured.is_featured = true;
    repo.create_project(&featured).await.unwrap();
    repo.create_project(&payload("Plain", Category::Web, 0)).await.unwrap();

    let filters = ProjectFilters { featured: Some(true), ..ProjectFilters::default() };
    let subset = repo.list_projects(&filters).await.unwrap();
    assert_eq!(subset.len(), 1);
    assert!(subset[0].is_featured);

    let filters = ProjectFilters { featured: Some(false), ..ProjectFilters::default() };
    let unconstrained = repo.list_projects(&filters).await.unwrap();
    assert_eq!(unconstrained.len(), 2);
}

#[tokio::test]
#[ignore = "requires APP_DATABASE_URL"]
async fn partial_update_keeps_unsupplied_fields() {
    let repo = SqlxProjectRepo::new(test_pool().await);

    let created = repo
        .create_project(&payload("Before", Category::Web, 2))
        .await
        .unwrap();

    let update = UpdateProject {
        title: Some("After".into()),
        status: Some(ProjectStatus::InProgress),
        ..UpdateProject::default()
    };
    let updated = repo
        .update_project(&created.id, &update)
        .await
        .unwrap()
        .expect("project should exist");

    assert_eq!(updated.title, "After");
    assert_eq!(updated.status, ProjectStatus::InProgress);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.order, 2);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
#[ignore = "requires APP_DATABASE_URL"]
async fn delete_then_get_yields_nothing() {
    let repo = SqlxProjectRepo::new(test_pool().await);

    let created = repo
        .create_project(&payload("Short-lived", Category::Web, 0))
        .await
        .unwrap();

    assert!(repo.delete_project(&created.id).await.unwrap());
    assert!(repo.get_project_by_id(&created.id).await.unwrap().is_none());

    // Second delete matches nothing
    assert!(!repo.delete_project(&created.id).await.unwrap());
    assert!(!repo.delete_project(&Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
#[ignore = "requires APP_DATABASE_URL"]
async fn contact_messages_list_newest_first() {
    let repo = SqlxContactRepo::new(test_pool().await);

    for subject in ["first", "second", "third"] {
        repo.create_contact_message(&NewContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: subject.into(),
            message: "hello".into(),
        })
        .await
        .unwrap();
    }

    let messages = repo.list_contact_messages().await.unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].subject, "third");
    for pair in messages.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}
