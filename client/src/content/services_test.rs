use super::*;

#[test]
fn each_known_slug_resolves() {
    for slug in ["couture", "formation", "marketplace", "evenementiel"] {
        let found = find_by_fragment(slug).map(|s| s.slug);
        assert_eq!(found, Some(slug));
    }
}

#[test]
fn leading_hash_is_accepted() {
    assert_eq!(find_by_fragment("#couture").map(|s| s.title), Some("Couture sur mesure"));
}

#[test]
fn unknown_or_empty_fragment_is_none() {
    assert!(find_by_fragment("").is_none());
    assert!(find_by_fragment("#").is_none());
    assert!(find_by_fragment("#tarifs").is_none());
    assert!(find_by_fragment("Couture").is_none());
}

#[test]
fn anchor_href_targets_services_page() {
    assert_eq!(anchor_href("formation"), "/services#formation");
}

#[test]
fn anchor_links_target_the_card_they_name() {
    for service in SERVICES {
        let target = anchor_target(&anchor_href(service.slug)).map(|s| s.slug);
        assert_eq!(target, Some(service.slug));
    }
}

#[test]
fn anchor_target_ignores_other_pages_and_unknown_fragments() {
    assert!(anchor_target("/services").is_none());
    assert!(anchor_target("/services#tarifs").is_none());
    assert!(anchor_target("/contact#couture").is_none());
}
