use super::*;

#[test]
fn gallery_ids_are_unique() {
    for (i, a) in GALLERY_ITEMS.iter().enumerate() {
        for b in &GALLERY_ITEMS[i + 1..] {
            assert_ne!(a.id, b.id, "duplicate gallery id {}", a.id);
        }
    }
}

#[test]
fn gallery_size_is_not_a_multiple_of_page_size() {
    assert_ne!(GALLERY_ITEMS.len() % crate::state::pagination::GALLERY_PAGE_SIZE, 0);
}

#[test]
fn find_returns_matching_item() {
    let item = find(4).unwrap();
    assert_eq!(item.title, "Kaftan brodé main");
    assert_eq!(item.author, "Ibrahima Sarr");
}

#[test]
fn find_unknown_id_is_none() {
    assert!(find(0).is_none());
    assert!(find(999).is_none());
}
