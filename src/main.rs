use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thesis_docs::{
    ConfigError, ConfigOverrides, HttpDocumentSource, LoaderConfig, Page, Role, RowId, RowResourceLoader, SourceError,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to read page {path}: {source}")]
    ReadPage { path: PathBuf, source: std::io::Error },
    #[error("no rows to load; pass row ids or a --page containing docs-{{id}} containers")]
    NoRows,
}

/// Connection flags override the `THESIS_DOCS_*` environment, which in turn
/// overrides the built-in defaults.
#[derive(Parser, Debug)]
#[command(name = "thesis-docs", about = "Load and render per-student thesis documents")]
struct Cli {
    /// Backend origin [env: THESIS_DOCS_BASE_URL, default: http://127.0.0.1:8080]
    #[arg(long)]
    base_url: Option<String>,

    /// Collection path segment [env: THESIS_DOCS_COLLECTION, default: students]
    #[arg(long)]
    collection: Option<String>,

    /// Page language, `lt` or `en` [env: THESIS_DOCS_LANG, default: lt]
    #[arg(long)]
    lang: Option<String>,

    /// Raw `Cookie` header value [env: THESIS_DOCS_SESSION_COOKIE]
    #[arg(long)]
    session_cookie: Option<String>,

    /// [env: THESIS_DOCS_REQUEST_TIMEOUT_SECS, default: 30]
    #[arg(long)]
    request_timeout_secs: Option<u64>,

    /// [env: THESIS_DOCS_CONNECT_TIMEOUT_SECS, default: 10]
    #[arg(long)]
    connect_timeout_secs: Option<u64>,

    /// Server-rendered page to discover `docs-{id}` rows and `data-user-role` from.
    #[arg(long)]
    page: Option<PathBuf>,

    /// Viewer role; overrides the page's `data-user-role`.
    #[arg(long)]
    role: Option<String>,

    /// Extra row ids to load.
    rows: Vec<RowId>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            collection: self.collection.clone(),
            language: self.lang.clone(),
            session_cookie: self.session_cookie.clone(),
            request_secs: self.request_timeout_secs,
            connect_secs: self.connect_timeout_secs,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "thesis-docs failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = LoaderConfig::from_env()?.with_overrides(cli.overrides())?;

    let mut page = match &cli.page {
        Some(path) => {
            let html = tokio::fs::read_to_string(path)
                .await
                .map_err(|source| CliError::ReadPage { path: path.clone(), source })?;
            Page::discover(&html)
        }
        None => Page::default(),
    };
    page.extend_ids(cli.rows);
    if page.rows().is_empty() {
        return Err(CliError::NoRows);
    }
    if let Some(role) = cli.role.as_deref() {
        page.set_role(Role::parse(role));
    }
    let role = page.role().cloned().unwrap_or(Role::Guest);

    tracing::info!(
        base_url = %config.base_url,
        collection = %config.collection,
        lang = config.language.code(),
        %role,
        rows = page.rows().len(),
        "loading documents"
    );

    let loader = RowResourceLoader::new(HttpDocumentSource::new(&config)?, config.language);
    loader.load_all(page.rows(), &role).await;

    for row in page.rows() {
        println!("<!-- {} -->", row.container_id());
        println!("{}", row.container.markup());
    }
    Ok(())
}
