use super::*;

#[test]
fn timeline_years_are_ascending() {
    assert!(TIMELINE.windows(2).all(|pair| pair[0].year < pair[1].year));
}

#[test]
fn initials_use_first_two_words() {
    assert_eq!(TEAM[0].initials(), "MS");
    assert_eq!(TEAM[3].initials(), "PN");
}

#[test]
fn initials_of_single_word_name() {
    let member = TeamMember { name: "khady", role: "", avatar: None, accent: Accent::Emerald };
    assert_eq!(member.initials(), "K");
}

#[test]
fn accent_classes_are_distinct() {
    let classes = [Accent::Ochre, Accent::Indigo, Accent::Terracotta, Accent::Emerald].map(Accent::class);
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
