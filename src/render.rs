//! Document list rendering.
//!
//! DESIGN
//! ======
//! Everything here is a pure function of (items, role, language). Output is a
//! markup fragment whose root element carries `data-state` so the loading,
//! empty, error and populated states stay distinguishable after the fact.
//!
//! Known document types sort first in a fixed rank; unknown tags go last with
//! a generic icon and their raw tag as label. The sort is stable, so equal
//! ranks keep server order.

use std::borrow::Cow;

use crate::documents::{DocumentStatus, ResourceItem};
use crate::i18n::{Language, Message, text};
use crate::page::{ContainerState, RowContainer};
use crate::role::{Role, can_view};

pub const FALLBACK_ICON: &str = "📎";

struct KnownType {
    tag: &'static str,
    icon: &'static str,
    label: Message,
}

/// Display table for known type tags, in priority order.
const KNOWN_TYPES: [KnownType; 4] = [
    KnownType { tag: "FINAL_THESIS.PDF", icon: "📄", label: Message::TypeThesis },
    KnownType { tag: "RECOMMENDATION.PDF", icon: "📋", label: Message::TypeRecommendation },
    KnownType { tag: "VIDEO", icon: "🎥", label: Message::TypeVideo },
    KnownType { tag: "SOURCE_CODE", icon: "💻", label: Message::TypeSourceCode },
];

const VIEW_ICON: &str = concat!(
    r#"<svg class="h-3 w-3" fill="none" stroke="currentColor" viewBox="0 0 24 24">"#,
    r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z"/>"#,
    r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z"/>"#,
    "</svg>"
);

// =============================================================================
// TYPES & STATUS
// =============================================================================

/// Priority rank of a type tag; `None` for unknown tags.
#[must_use]
pub fn type_rank(kind: &str) -> Option<usize> {
    KNOWN_TYPES.iter().position(|t| t.tag == kind)
}

/// Icon and label shown for a document type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDisplay<'a> {
    pub icon: &'static str,
    pub label: Cow<'a, str>,
}

#[must_use]
pub fn type_display(kind: &str, lang: Language) -> TypeDisplay<'_> {
    match type_rank(kind) {
        Some(rank) => {
            let known = &KNOWN_TYPES[rank];
            TypeDisplay { icon: known.icon, label: Cow::Borrowed(text(lang, known.label)) }
        }
        None => TypeDisplay { icon: FALLBACK_ICON, label: Cow::Borrowed(kind) },
    }
}

fn sort_key(item: &ResourceItem) -> usize {
    type_rank(&item.kind).unwrap_or(KNOWN_TYPES.len())
}

/// Items in type-priority order; the sort is stable and unknown types go last.
#[must_use]
pub fn sorted_by_priority(items: &[ResourceItem]) -> Vec<&ResourceItem> {
    let mut ordered: Vec<&ResourceItem> = items.iter().collect();
    ordered.sort_by_key(|item| sort_key(item));
    ordered
}

/// Colour class and text of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub class: &'static str,
    pub text: &'static str,
}

#[must_use]
pub fn status_badge(status: DocumentStatus, lang: Language) -> StatusBadge {
    let (class, message) = match status {
        DocumentStatus::Approved => ("bg-green-100 text-green-800", Message::StatusApproved),
        DocumentStatus::Pending => ("bg-yellow-100 text-yellow-800", Message::StatusPending),
        DocumentStatus::Rejected => ("bg-red-100 text-red-800", Message::StatusRejected),
        DocumentStatus::Draft => ("bg-gray-100 text-gray-800", Message::StatusDraft),
    };
    StatusBadge { class, text: text(lang, message) }
}

// =============================================================================
// MARKUP
// =============================================================================

#[must_use]
pub fn loading_markup(lang: Language) -> String {
    format!(
        r#"<div class="text-xs text-muted-foreground italic" data-state="{}">{}</div>"#,
        ContainerState::Loading.as_str(),
        text(lang, Message::Loading)
    )
}

#[must_use]
pub fn error_markup(lang: Language) -> String {
    format!(
        r#"<div class="text-xs text-red-500" data-state="{}">{}</div>"#,
        ContainerState::Error.as_str(),
        text(lang, Message::LoadFailed)
    )
}

#[must_use]
pub fn empty_markup(lang: Language) -> String {
    format!(
        r#"<div class="text-xs text-muted-foreground" data-state="{}">{}</div>"#,
        ContainerState::Empty.as_str(),
        text(lang, Message::NoDocuments)
    )
}

/// Markup for a non-empty document list.
#[must_use]
pub fn items_markup(items: &[ResourceItem], role: &Role, lang: Language) -> String {
    let body: String = sorted_by_priority(items)
        .into_iter()
        .map(|item| item_markup(item, role, lang))
        .collect();
    format!(r#"<div class="space-y-1" data-state="{}">{body}</div>"#, ContainerState::Items.as_str())
}

fn item_markup(item: &ResourceItem, role: &Role, lang: Language) -> String {
    let display = type_display(&item.kind, lang);
    let badge = status_badge(item.status, lang);
    let view = if can_view(role, item) { view_action(item.id, lang) } else { String::new() };

    format!(
        concat!(
            r#"<div class="flex items-center justify-between text-xs border rounded p-1" data-document-id="{id}">"#,
            r#"<div class="flex items-center gap-1 flex-1 min-w-0">"#,
            r#"<span class="text-sm">{icon}</span>"#,
            r#"<span class="truncate text-xs" title="{name}">{label}</span>"#,
            "</div>",
            r#"<div class="flex items-center gap-1">"#,
            r#"<span class="inline-flex items-center rounded px-1 py-0.5 text-xs font-medium {class}" data-status="{status}">{badge}</span>"#,
            "{view}",
            "</div>",
            "</div>"
        ),
        id = item.id,
        icon = display.icon,
        name = escape_html(&item.name),
        label = escape_html(&display.label),
        class = badge.class,
        status = item.status.as_str(),
        badge = badge.text,
        view = view,
    )
}

fn view_action(document_id: i64, lang: Language) -> String {
    format!(
        r#"<a href="{href}" target="_blank" rel="noopener" class="text-xs text-blue-600 hover:text-blue-800 p-1" data-action="view" title="{title}">{VIEW_ICON}</a>"#,
        href = document_view_path(document_id),
        title = text(lang, Message::ViewDocument),
    )
}

/// Path that opens a document in a new tab.
#[must_use]
pub fn document_view_path(document_id: i64) -> String {
    format!("/api/documents/{document_id}/view")
}

fn escape_html(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len() + 8);
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

// =============================================================================
// RENDER
// =============================================================================

/// Replace `container` with the rendered list (or the empty placeholder).
/// Returns the state the container is left in.
pub fn render(container: &RowContainer, items: &[ResourceItem], role: &Role, lang: Language) -> ContainerState {
    if items.is_empty() {
        container.replace(empty_markup(lang));
        ContainerState::Empty
    } else {
        container.replace(items_markup(items, role, lang));
        ContainerState::Items
    }
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
