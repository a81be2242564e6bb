use super::*;

#[test]
fn default_variant_is_primary() {
    assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
}

#[test]
fn every_variant_carries_the_base_class() {
    for variant in [ButtonVariant::Primary, ButtonVariant::Secondary, ButtonVariant::Ghost] {
        assert!(variant.class().starts_with("btn btn--"), "{variant:?}");
    }
}

#[test]
fn variant_modifiers_are_distinct() {
    assert_ne!(ButtonVariant::Primary.class(), ButtonVariant::Secondary.class());
    assert_ne!(ButtonVariant::Secondary.class(), ButtonVariant::Ghost.class());
}
