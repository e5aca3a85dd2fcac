use super::*;

// =============================================================
// RevealOptions
// =============================================================

#[test]
fn options_defaults() {
    let opts = RevealOptions::default();
    assert!((opts.threshold() - DEFAULT_THRESHOLD).abs() < f64::EPSILON);
    assert_eq!(opts.root_margin, "0px");
    assert!(opts.trigger_once);
}

#[test]
fn options_threshold_is_clamped() {
    assert!((RevealOptions::default().with_threshold(1.5).threshold() - 1.0).abs() < f64::EPSILON);
    assert!(RevealOptions::default().with_threshold(-0.2).threshold().abs() < f64::EPSILON);
    assert!(RevealOptions::default().with_threshold(f64::NAN).threshold().abs() < f64::EPSILON);
    assert!((RevealOptions::default().with_threshold(0.25).threshold() - 0.25).abs() < f64::EPSILON);
}

#[test]
fn options_builder_sets_margin_and_latch() {
    let opts = RevealOptions::default()
        .with_root_margin("0px 0px -80px 0px")
        .with_trigger_once(false);
    assert_eq!(opts.root_margin, "0px 0px -80px 0px");
    assert!(!opts.trigger_once);
}

// =============================================================
// RevealState: trigger once
// =============================================================

#[test]
fn state_starts_hidden_and_unobserved() {
    let state = RevealState::new(true);
    assert!(!state.is_visible());
    assert_eq!(state.phase(), RevealPhase::Unobserved);
}

#[test]
fn begin_moves_to_observing() {
    let mut state = RevealState::new(true);
    state.begin();
    assert_eq!(state.phase(), RevealPhase::Observing);
    assert!(!state.is_visible());
}

#[test]
fn below_threshold_stays_hidden() {
    let mut state = RevealState::new(true);
    state.begin();
    assert_eq!(state.observe(true, 0.05, 0.1), RevealStep::Continue);
    assert!(!state.is_visible());
    assert_eq!(state.observe(false, 0.0, 0.1), RevealStep::Continue);
    assert!(!state.is_visible());
}

#[test]
fn crossing_threshold_latches_and_releases() {
    let mut state = RevealState::new(true);
    state.begin();
    assert_eq!(state.observe(true, 0.1, 0.1), RevealStep::Release);
    assert!(state.is_visible());
    assert_eq!(state.phase(), RevealPhase::Triggered);
}

#[test]
fn latched_state_ignores_leaving_viewport() {
    let mut state = RevealState::new(true);
    state.begin();
    state.observe(true, 0.6, 0.1);

    assert_eq!(state.observe(false, 0.0, 0.1), RevealStep::Release);
    assert!(state.is_visible());
    assert_eq!(state.phase(), RevealPhase::Triggered);

    state.begin();
    assert_eq!(state.phase(), RevealPhase::Triggered);
}

#[test]
fn intersecting_flag_is_required() {
    // Zero-threshold observers report ratio 0 for both edges; only the
    // intersecting flag distinguishes them.
    let mut state = RevealState::new(true);
    state.begin();
    assert_eq!(state.observe(false, 0.0, 0.0), RevealStep::Continue);
    assert!(!state.is_visible());
    assert_eq!(state.observe(true, 0.0, 0.0), RevealStep::Release);
    assert!(state.is_visible());
}

#[test]
fn observe_without_begin_still_tracks() {
    let mut state = RevealState::new(true);
    assert_eq!(state.observe(false, 0.0, 0.1), RevealStep::Continue);
    assert_eq!(state.phase(), RevealPhase::Observing);
}

// =============================================================
// RevealState: repeating
// =============================================================

#[test]
fn repeating_state_toggles_with_viewport() {
    let mut state = RevealState::new(false);
    state.begin();

    assert_eq!(state.observe(true, 0.5, 0.1), RevealStep::Continue);
    assert!(state.is_visible());

    assert_eq!(state.observe(false, 0.0, 0.1), RevealStep::Continue);
    assert!(!state.is_visible());

    assert_eq!(state.observe(true, 0.2, 0.1), RevealStep::Continue);
    assert!(state.is_visible());
    assert_eq!(state.phase(), RevealPhase::Observing);
}

#[test]
fn repeating_state_never_releases() {
    let mut state = RevealState::new(false);
    for i in 0..10 {
        let in_view = i % 2 == 0;
        assert_eq!(state.observe(in_view, if in_view { 1.0 } else { 0.0 }, 0.1), RevealStep::Continue);
        assert_eq!(state.is_visible(), in_view);
    }
}
