use super::*;

#[test]
fn categories_start_with_all_then_first_appearance_order() {
    assert_eq!(categories(EVENTS), vec!["Tous", "Défilé", "Atelier", "Salon", "Exposition"]);
}

#[test]
fn categories_of_empty_list_is_only_all() {
    assert_eq!(categories(&[]), vec![ALL_CATEGORIES]);
}

#[test]
fn filter_all_returns_every_event() {
    let all = filter_by_category(EVENTS, ALL_CATEGORIES);
    assert_eq!(all.len(), EVENTS.len());
}

#[test]
fn filter_by_category_keeps_only_matches_in_order() {
    let workshops = filter_by_category(EVENTS, "Atelier");
    let ids: Vec<u32> = workshops.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 4]);
}

#[test]
fn filter_unknown_category_is_empty() {
    assert!(filter_by_category(EVENTS, "Concert").is_empty());
}
