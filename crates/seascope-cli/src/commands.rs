//! Subcommand implementations. Each returns whether it succeeded.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use seascope_catalog::{CatalogLoad, DataHub, FilterState};
use seascope_client::{CatalogBackend, HttpBackend, PageQuery};
use seascope_common::{ImageFile, SeascopeError};
use seascope_search::{Dispatcher, SearchMode, SearchSession, SUGGESTED_TOPICS};

use crate::render;

fn session(backend: Arc<HttpBackend>) -> SearchSession {
    SearchSession::new(Dispatcher::new(backend))
}

async fn run(mut session: SearchSession) -> bool {
    session.submit().await;
    render::session_outcome(&session)
}

pub async fn search(backend: Arc<HttpBackend>, query: &str) -> bool {
    let mut session = session(backend);
    session.set_text(query);
    run(session).await
}

pub async fn topic(backend: Arc<HttpBackend>, name: Option<&str>) -> bool {
    let Some(name) = name else {
        render::topics();
        return true;
    };
    let Some(topic) = SUGGESTED_TOPICS.iter().find(|t| t.eq_ignore_ascii_case(name.trim())) else {
        eprintln!("Unknown topic '{name}'.");
        render::topics();
        return false;
    };

    let mut session = session(backend);
    session.search_topic(topic).await;
    render::session_outcome(&session)
}

pub async fn analyze(
    backend: Arc<HttpBackend>,
    image: Option<&Path>,
    describe: Option<String>,
    use_description: bool,
) -> anyhow::Result<bool> {
    let mut session = session(backend);
    session.set_mode(SearchMode::Image);

    if let Some(path) = image {
        let file = read_image(path).await?;
        if !session.select_image(file) {
            return Ok(render::session_outcome(&session));
        }
        if let Some(preview) = session.composer().visible_preview() {
            debug!(preview, "image selected");
        }
    }
    if let Some(description) = describe {
        session.composer_mut().set_description(description);
    }
    session.composer_mut().set_use_description(use_description);

    Ok(run(session).await)
}

async fn read_image(path: &Path) -> anyhow::Result<ImageFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();
    Ok(ImageFile::guess(name, bytes))
}

pub async fn datasets(backend: &dyn CatalogBackend, domain: String, filter: Option<String>) -> bool {
    let mut hub = DataHub::with_filter(FilterState::new(domain));
    if let Some(text) = filter {
        hub.set_search_text(text);
    }

    if let CatalogLoad::Failed { message } = hub.load(backend).await {
        eprintln!("Error: {message}");
        return false;
    }
    render::tabs(&hub);
    render::records(&hub.visible_records());
    true
}

pub async fn preview(backend: &dyn CatalogBackend, domain: &str, rows: u32) -> bool {
    match backend.preview(domain, rows).await {
        Ok(rows) => {
            render::rows(rows);
            true
        }
        Err(e) => render::error(&e),
    }
}

pub async fn columns(backend: &dyn CatalogBackend, domain: &str) -> bool {
    match backend.columns(domain).await {
        Ok(columns) => {
            for column in columns {
                println!("{column}");
            }
            true
        }
        Err(e) => render::error(&e),
    }
}

pub async fn data(backend: &dyn CatalogBackend, domain: &str, limit: u32, offset: u64) -> bool {
    let page = match PageQuery::new(limit, offset) {
        Ok(page) => page,
        Err(e) => return render::error(&SeascopeError::from(e)),
    };
    match backend.data_page(domain, page).await {
        Ok(page) => {
            render::page(page);
            true
        }
        Err(e) => render::error(&e),
    }
}

pub async fn status(backend: &HttpBackend) -> bool {
    let health = match backend.health().await {
        Ok(health) => health,
        Err(e) => return render::error(&e),
    };
    println!("Backend: {} ({})", health.message, health.status);

    match backend.model_status().await {
        Ok(models) => {
            render::model_status(&models);
            true
        }
        Err(e) => render::error(&e),
    }
}
