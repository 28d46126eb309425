mod domain;
mod interfaces;
mod infrastructure;
pub mod client;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, email};

use infrastructure::email::mailer::EmailNotifier;
use repositories::sqlx_repo::{SqlxContactRepo, SqlxProjectRepo};
use use_cases::{contact::ContactHandler, project::ProjectHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let project_handler = ProjectHandler::new(SqlxProjectRepo::new(pool.clone()));

        let notifier = EmailNotifier::from_config(config)
            .map_err(|e| tracing::error!("SMTP relay setup failed: {}", e))
            .ok()
            .flatten();

        let contact_handler = ContactHandler::new(SqlxContactRepo::new(pool), notifier);

        AppState {
            project_handler,
            contact_handler,
        }
    }
}
