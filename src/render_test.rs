use super::*;

fn doc(id: i64, kind: &str, status: DocumentStatus) -> ResourceItem {
    ResourceItem::new(id, kind, status, format!("file-{id}"))
}

fn kinds(items: &[ResourceItem]) -> Vec<&str> {
    items.iter().map(|i| i.kind.as_str()).collect()
}

// =============================================================================
// TYPE TABLE
// =============================================================================

#[test]
fn known_types_have_fixed_rank() {
    assert_eq!(type_rank("FINAL_THESIS.PDF"), Some(0));
    assert_eq!(type_rank("RECOMMENDATION.PDF"), Some(1));
    assert_eq!(type_rank("VIDEO"), Some(2));
    assert_eq!(type_rank("SOURCE_CODE"), Some(3));
    assert_eq!(type_rank("video"), None);
}

#[test]
fn type_display_known_type_is_localized() {
    let lt = type_display("SOURCE_CODE", Language::Lt);
    assert_eq!(lt.icon, "💻");
    assert_eq!(lt.label, "Kodas");
    let en = type_display("SOURCE_CODE", Language::En);
    assert_eq!(en.label, "Source code");
}

#[test]
fn type_display_unknown_falls_back_to_raw_tag() {
    let display = type_display("thesis_pdf", Language::Lt);
    assert_eq!(display.icon, FALLBACK_ICON);
    assert_eq!(display.label, "thesis_pdf");
}

// =============================================================================
// SORTING
// =============================================================================

fn ids(items: &[&ResourceItem]) -> Vec<i64> {
    items.iter().map(|i| i.id).collect()
}

#[test]
fn sort_puts_known_types_in_rank_order() {
    let items = vec![
        doc(1, "SOURCE_CODE", DocumentStatus::Draft),
        doc(2, "VIDEO", DocumentStatus::Draft),
        doc(3, "FINAL_THESIS.PDF", DocumentStatus::Draft),
        doc(4, "RECOMMENDATION.PDF", DocumentStatus::Draft),
    ];
    let sorted: Vec<&str> = sorted_by_priority(&items).iter().map(|i| i.kind.as_str()).collect();
    assert_eq!(sorted, vec!["FINAL_THESIS.PDF", "RECOMMENDATION.PDF", "VIDEO", "SOURCE_CODE"]);
}

#[test]
fn sort_moves_unknown_last_keeping_input_order() {
    let items = vec![
        doc(1, "zeta", DocumentStatus::Draft),
        doc(2, "VIDEO", DocumentStatus::Draft),
        doc(3, "alpha", DocumentStatus::Draft),
        doc(4, "FINAL_THESIS.PDF", DocumentStatus::Draft),
        doc(5, "zeta", DocumentStatus::Pending),
    ];
    assert_eq!(ids(&sorted_by_priority(&items)), vec![4, 2, 1, 3, 5]);
}

#[test]
fn sort_is_stable_for_equal_types() {
    let items = vec![
        doc(9, "VIDEO", DocumentStatus::Draft),
        doc(3, "VIDEO", DocumentStatus::Approved),
        doc(5, "VIDEO", DocumentStatus::Pending),
    ];
    assert_eq!(ids(&sorted_by_priority(&items)), vec![9, 3, 5]);
}

#[test]
fn sort_is_idempotent() {
    let items = vec![
        doc(1, "misc", DocumentStatus::Draft),
        doc(2, "SOURCE_CODE", DocumentStatus::Draft),
        doc(3, "FINAL_THESIS.PDF", DocumentStatus::Draft),
        doc(4, "other", DocumentStatus::Draft),
        doc(5, "VIDEO", DocumentStatus::Draft),
    ];
    let once: Vec<ResourceItem> = sorted_by_priority(&items).into_iter().cloned().collect();
    let twice: Vec<ResourceItem> = sorted_by_priority(&once).into_iter().cloned().collect();
    assert_eq!(twice, once);
}

#[test]
fn sort_leaves_input_untouched() {
    let items = vec![
        doc(1, "x", DocumentStatus::Draft),
        doc(2, "VIDEO", DocumentStatus::Draft),
        doc(3, "RECOMMENDATION.PDF", DocumentStatus::Draft),
    ];
    assert_eq!(ids(&sorted_by_priority(&items)), vec![3, 2, 1]);
    assert_eq!(kinds(&items), vec!["x", "VIDEO", "RECOMMENDATION.PDF"]);
}

// =============================================================================
// BADGES
// =============================================================================

#[test]
fn status_badges_follow_table() {
    let approved = status_badge(DocumentStatus::Approved, Language::Lt);
    assert_eq!(approved, StatusBadge { class: "bg-green-100 text-green-800", text: "Patvirtinta" });
    let pending = status_badge(DocumentStatus::Pending, Language::Lt);
    assert_eq!(pending, StatusBadge { class: "bg-yellow-100 text-yellow-800", text: "Laukia" });
    let rejected = status_badge(DocumentStatus::Rejected, Language::En);
    assert_eq!(rejected, StatusBadge { class: "bg-red-100 text-red-800", text: "Rejected" });
    let draft = status_badge(DocumentStatus::Draft, Language::En);
    assert_eq!(draft, StatusBadge { class: "bg-gray-100 text-gray-800", text: "Draft" });
}

// =============================================================================
// RENDER
// =============================================================================

#[test]
fn render_empty_yields_empty_marker() {
    for role in [Role::Admin, Role::Student, Role::Guest] {
        let container = RowContainer::new();
        let state = render(&container, &[], &role, Language::Lt);
        assert_eq!(state, ContainerState::Empty);
        assert_eq!(container.state(), Some(ContainerState::Empty));
        assert!(container.markup().contains("Nėra dokumentų"));
        assert!(!container.markup().contains("Klaida"));
    }
}

#[test]
fn render_items_shows_label_and_badge() {
    let container = RowContainer::new();
    let items = vec![doc(1, "VIDEO", DocumentStatus::Pending)];
    let state = render(&container, &items, &Role::Student, Language::En);
    assert_eq!(state, ContainerState::Items);
    let markup = container.markup();
    assert!(markup.contains(">Video<"));
    assert!(markup.contains(r#"data-status="pending""#));
    assert!(markup.contains(">Pending<"));
    assert!(!markup.contains(r#"data-action="view""#));
}

#[test]
fn render_view_action_for_staff() {
    let container = RowContainer::new();
    let items = vec![doc(77, "VIDEO", DocumentStatus::Draft)];
    render(&container, &items, &Role::Supervisor, Language::Lt);
    let markup = container.markup();
    assert!(markup.contains(r#"data-action="view""#));
    assert!(markup.contains(r#"href="/api/documents/77/view""#));
}

#[test]
fn render_view_action_for_approved_document() {
    let container = RowContainer::new();
    let items = vec![doc(1, "VIDEO", DocumentStatus::Approved), doc(2, "SOURCE_CODE", DocumentStatus::Rejected)];
    render(&container, &items, &Role::Student, Language::Lt);
    let markup = container.markup();
    assert_eq!(markup.matches(r#"data-action="view""#).count(), 1);
    assert!(markup.contains("/api/documents/1/view"));
    assert!(!markup.contains("/api/documents/2/view"));
}

#[test]
fn render_orders_documents_by_priority() {
    let container = RowContainer::new();
    let items = vec![
        doc(1, "custom", DocumentStatus::Draft),
        doc(2, "VIDEO", DocumentStatus::Draft),
        doc(3, "FINAL_THESIS.PDF", DocumentStatus::Draft),
    ];
    render(&container, &items, &Role::Admin, Language::Lt);
    let markup = container.markup();
    let pos = |id: i64| markup.find(&format!(r#"data-document-id="{id}""#)).unwrap();
    assert!(pos(3) < pos(2));
    assert!(pos(2) < pos(1));
}

#[test]
fn render_escapes_names_and_unknown_tags() {
    let container = RowContainer::new();
    let items = vec![ResourceItem::new(1, "<b>x</b>", DocumentStatus::Draft, r#"a"b&c.pdf"#)];
    render(&container, &items, &Role::Admin, Language::Lt);
    let markup = container.markup();
    assert!(markup.contains("&lt;b&gt;x&lt;/b&gt;"));
    assert!(markup.contains(r#"title="a&quot;b&amp;c.pdf""#));
    assert!(!markup.contains("<b>x</b>"));
}

#[test]
fn render_is_independent_per_container() {
    let first = RowContainer::new();
    let second = RowContainer::new();
    let items = vec![doc(1, "VIDEO", DocumentStatus::Approved)];

    render(&first, &items, &Role::Student, Language::Lt);
    let alone = first.markup();

    render(&second, &[doc(9, "SOURCE_CODE", DocumentStatus::Rejected)], &Role::Admin, Language::En);
    render(&first, &items, &Role::Student, Language::Lt);
    assert_eq!(first.markup(), alone);
}

#[test]
fn placeholders_are_distinct() {
    for lang in [Language::Lt, Language::En] {
        assert!(loading_markup(lang).contains(r#"data-state="loading""#));
        assert!(error_markup(lang).contains(r#"data-state="error""#));
        assert!(empty_markup(lang).contains(r#"data-state="empty""#));
        assert_ne!(error_markup(lang), empty_markup(lang));
    }
}
