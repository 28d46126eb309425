use uuid::Uuid;

use crate::entities::{
    project::{Project, ProjectFilters},
    site_config::{FallbackProject, GraphicDesign, SiteConfig},
};

use super::gateway::ApiGateway;

/// A project resolved for display: either a live store record or an entry
/// from the config document's fallback list.
#[derive(Debug, Clone)]
pub enum ResolvedProject {
    Live(Project),
    Fallback(FallbackProject),
}

impl ResolvedProject {
    pub fn title(&self) -> &str {
        match self {
            ResolvedProject::Live(p) => &p.title,
            ResolvedProject::Fallback(p) => &p.title,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, ResolvedProject::Live(_))
    }
}

/// Listing precedence: the live store is authoritative whenever it holds at
/// least one record; only a completely empty store surfaces the fallback
/// list. The two sources are never merged.
pub fn resolve_listing(
    live: Vec<Project>,
    config: Option<&SiteConfig>,
) -> Vec<ResolvedProject> {
    if !live.is_empty() {
        return live.into_iter().map(ResolvedProject::Live).collect();
    }

    config
        .map(|c| {
            c.projects
                .iter()
                .cloned()
                .map(ResolvedProject::Fallback)
                .collect()
        })
        .unwrap_or_default()
}

/// Loose identifier equality at the route boundary: the requested id
/// arrives as a string while fallback ids are integers, so both the numeric
/// and the string form are compared explicitly.
pub fn fallback_id_matches(fallback_id: i64, requested: &str) -> bool {
    requested
        .trim()
        .parse::<i64>()
        .map(|n| n == fallback_id)
        .unwrap_or(false)
        || requested == fallback_id.to_string()
}

pub fn find_fallback<'a>(config: &'a SiteConfig, id: &str) -> Option<&'a FallbackProject> {
    config
        .projects
        .iter()
        .find(|p| fallback_id_matches(p.id, id))
}

/// Projects view: fetch the live list and the config document concurrently,
/// then apply the listing precedence.
pub async fn load_project_listing(
    gateway: &ApiGateway,
    filters: &ProjectFilters,
) -> Vec<ResolvedProject> {
    let (config, live) = tokio::join!(gateway.fetch_config(), gateway.fetch_projects(filters));
    resolve_listing(live, config.as_ref())
}

/// Project-detail view. A live lookup is attempted only when the identifier
/// has the store's key shape; any miss falls back to scanning the config
/// document's fallback list. `None` means the view presents Not-Found.
pub async fn load_project_detail(gateway: &ApiGateway, id: &str) -> Option<ResolvedProject> {
    if Uuid::parse_str(id).is_ok() {
        if let Some(project) = gateway.fetch_project(id).await {
            return Some(ResolvedProject::Live(project));
        }
    }

    let config = gateway.fetch_config().await?;
    find_fallback(&config, id)
        .cloned()
        .map(ResolvedProject::Fallback)
}

/// Graphic-design view: the config document's section, or its built-in
/// default when the config fetch fails.
pub async fn load_graphic_design(gateway: &ApiGateway) -> GraphicDesign {
    gateway
        .fetch_config()
        .await
        .map(|c| c.graphic_design)
        .unwrap_or_default()
}
