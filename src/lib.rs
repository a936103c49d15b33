//! Per-row document loading for the thesis administration student list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders a page listing rows (students). Each row has a
//! `docs-{id}` container whose document list is fetched separately from
//! `GET /api/{collection}/{id}/documents`. `loader` drives those fetches
//! concurrently with per-row cancellation, `render` turns results into markup,
//! and `page` discovers rows and holds the containers the loader writes into.

pub mod config;
pub mod documents;
pub mod i18n;
pub mod loader;
pub mod page;
pub mod render;
pub mod role;
pub mod source;

pub use config::{ConfigError, ConfigOverrides, LoaderConfig};
pub use documents::{DocumentStatus, ResourceItem, RowId};
pub use i18n::Language;
pub use loader::{BatchSummary, RowOutcome, RowResourceLoader};
pub use page::{ContainerState, Page, Row, RowContainer};
pub use role::Role;
pub use source::{DocumentSource, HttpDocumentSource, SourceError};
