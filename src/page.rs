//! Page rows and their document containers.
//!
//! DESIGN
//! ======
//! The server-rendered page marks each loadable row with a container whose
//! id is `docs-{rowId}`, and carries the viewer's role on a single
//! `data-user-role` attribute. `Page::discover` reads both once; the role is
//! then passed to the loader explicitly instead of being looked up per row.
//!
//! A `RowContainer` is a shared handle to the markup of one container. The
//! page owns the rows; the loader only replaces container markup.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

use regex::Regex;

use crate::documents::RowId;
use crate::role::Role;

// =============================================================================
// CONTAINER
// =============================================================================

/// Which placeholder or content a container currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerState {
    Loading,
    Items,
    Empty,
    Error,
}

impl ContainerState {
    /// Value of the `data-state` attribute on the rendered root element.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Items => "items",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "loading" => Some(Self::Loading),
            "items" => Some(Self::Items),
            "empty" => Some(Self::Empty),
            "error" => Some(Self::Error),
            _ => None,
        }
    }
}

/// Shared, cloneable handle to one row's document container.
#[derive(Debug, Clone, Default)]
pub struct RowContainer {
    markup: Arc<Mutex<String>>,
}

impl RowContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the container's inner markup.
    pub fn replace(&self, markup: String) {
        *self.markup.lock().unwrap_or_else(PoisonError::into_inner) = markup;
    }

    /// Current inner markup.
    #[must_use]
    pub fn markup(&self) -> String {
        self.markup
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// State marker of the current markup, `None` while untouched.
    #[must_use]
    pub fn state(&self) -> Option<ContainerState> {
        let markup = self.markup.lock().unwrap_or_else(PoisonError::into_inner);
        let rest = markup.split_once("data-state=\"")?.1;
        let value = rest.split_once('"')?.0;
        ContainerState::parse(value)
    }
}

// =============================================================================
// ROWS
// =============================================================================

/// One entity on the page that needs its documents loaded.
#[derive(Debug, Clone)]
pub struct Row {
    pub id: RowId,
    pub container: RowContainer,
}

impl Row {
    #[must_use]
    pub fn new(id: RowId) -> Self {
        Self { id, container: RowContainer::new() }
    }

    /// DOM id of this row's container.
    #[must_use]
    pub fn container_id(&self) -> String {
        container_id(self.id)
    }
}

#[must_use]
pub fn container_id(row_id: RowId) -> String {
    format!("docs-{row_id}")
}

/// Rows found on one rendered page, plus the viewer's role if the page set it.
#[derive(Debug, Clone, Default)]
pub struct Page {
    rows: Vec<Row>,
    role: Option<Role>,
}

impl Page {
    /// Scan server-rendered markup for `docs-{id}` containers and the
    /// `data-user-role` marker. Duplicate ids keep their first occurrence.
    #[must_use]
    pub fn discover(html: &str) -> Self {
        let ids = CONTAINER_RE
            .captures_iter(html)
            .filter_map(|caps| caps.get(1)?.as_str().parse::<RowId>().ok());
        let mut page = Self::from_ids(ids);
        page.role = ROLE_RE
            .captures(html)
            .and_then(|caps| caps.get(1))
            .map(|m| Role::parse(m.as_str()));
        page
    }

    /// Build a page from explicit row ids, dropping duplicates.
    pub fn from_ids(ids: impl IntoIterator<Item = RowId>) -> Self {
        let mut seen = HashSet::new();
        let rows = ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .map(Row::new)
            .collect();
        Self { rows, role: None }
    }

    /// Append rows not already on the page.
    pub fn extend_ids(&mut self, ids: impl IntoIterator<Item = RowId>) {
        for id in ids {
            if self.row(id).is_none() {
                self.rows.push(Row::new(id));
            }
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id == id)
    }

    /// Role declared by the page, if any.
    #[must_use]
    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = Some(role);
    }
}

static CONTAINER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)id\s*=\s*["']docs-(\d+)["']"#).expect("container pattern is valid"));

static ROLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?:^|\s)data-user-role\s*=\s*["']([^"']*)["']"#).expect("role pattern is valid"));

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
