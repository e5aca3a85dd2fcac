use super::*;

#[test]
fn reveal_class_hidden_by_default() {
    assert_eq!(reveal_class("", false), "reveal");
}

#[test]
fn reveal_class_adds_visible_modifier() {
    assert_eq!(reveal_class("", true), "reveal reveal--visible");
}

#[test]
fn reveal_class_appends_trimmed_extra_classes() {
    assert_eq!(reveal_class("  card  ", false), "reveal card");
    assert_eq!(reveal_class("card", true), "reveal reveal--visible card");
}

#[test]
fn reveal_style_sets_duration_and_delay() {
    assert_eq!(
        reveal_style(DEFAULT_DURATION_MS, 150),
        "transition-duration: 600ms; transition-delay: 150ms;"
    );
}

#[test]
fn stylesheet_hides_regions_only_when_scripted() {
    let css = include_str!("../../style/main.css");
    assert!(css.contains("html.js .reveal {\n    opacity: 0;"));
    let base = css.split(".reveal {").nth(1).and_then(|rule| rule.split('}').next()).unwrap_or_default();
    assert!(!base.contains("opacity"), "unscripted .reveal rule must not hide content: {base}");
}
