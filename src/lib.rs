use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod telemetry;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{auth, cache, db, notifier};

use auth::basic::CredentialGate;
use cache::listing_cache::ResponseCache;
use notifier::webhook::WebhookNotifier;
use repositories::sqlx_repo::{SqlxPostRepo, SqlxProjectRepo, SqlxResourceRepo};
use use_cases::{posts::PostHandler, projects::ProjectHandler, resources::ResourceHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub resource_handler: AppResourceHandler,
    pub post_handler: AppPostHandler,
    pub credential_gate: CredentialGate,
    pub cache: Arc<ResponseCache>,
}

pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppResourceHandler = ResourceHandler<SqlxResourceRepo>;
pub type AppPostHandler = PostHandler<SqlxPostRepo, WebhookNotifier>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let cache = Arc::new(ResponseCache::new());
        let notifier = Arc::new(WebhookNotifier::new(config.webhook_url.clone()));

        if config.webhook_url.is_none() {
            tracing::warn!("WEBHOOK_URL not set, post announcements are disabled");
        }

        AppState {
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone()), cache.clone()),
            resource_handler: ResourceHandler::new(SqlxResourceRepo::new(pool.clone()), cache.clone()),
            post_handler: PostHandler::new(
                SqlxPostRepo::new(pool),
                notifier,
                cache.clone(),
                &config.post_base_url,
            ),
            credential_gate: CredentialGate::new(&config.basic_auth_user, &config.basic_auth_password),
            cache,
        }
    }
}
