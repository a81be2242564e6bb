use super::*;

#[test]
fn artisan_href_formats_numeric_and_text_ids() {
    assert_eq!(artisan_href(7), "/artisan/7");
    assert_eq!(artisan_href("abc"), "/artisan/abc");
}

#[test]
fn public_paths_are_distinct() {
    let paths = [HOME, LOGIN, REGISTER, EVENTS, GALLERY, ABOUT, SERVICES, CONTACT, TRAININGS];
    let mut sorted = paths.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), paths.len());
}

