use super::*;
use crate::effects::Effect;
use crate::incident::{IncidentId, LatLng, Severity};
use crate::map::Viewport;
use crate::testing::{attack, now, scenario};

fn id(s: &str) -> IncidentId {
    IncidentId::from(s)
}

fn dashboard() -> Dashboard {
    Dashboard::new(scenario(), MapSettings::default())
}

fn numbers(list: &[NumberedIncident]) -> Vec<(String, usize)> {
    list.iter().map(|n| (n.id().to_string(), n.number)).collect()
}

fn flights(effects: &[Effect]) -> usize {
    effects.iter().filter(|e| matches!(e, Effect::FlyTo { .. })).count()
}

#[test]
fn test_scenario_marker_click_under_high_filter() {
    let mut d = dashboard();
    d.set_severity_filter(SeverityFilter::High);

    let expected = vec![("A".to_string(), 1), ("C".to_string(), 2)];
    assert_eq!(numbers(d.numbered_incidents()), expected);
    assert_eq!(numbers(d.mappable_incidents()), expected);

    let t = d.dispatch(UiEvent::MarkerClicked(id("C")));
    assert!(t.is_applied());
    assert_eq!(d.selection(), &Selection::Selected(id("C")));
    assert_eq!(flights(&t.effects), 1);
    assert!(t.effects.iter().any(|e| matches!(
        e,
        Effect::ScrollListToCard { number: 2, .. }
    )));

    // Same marker again: final state identical, no second flight
    let viewport = d.map().viewport();
    let again = d.dispatch(UiEvent::MarkerClicked(id("C")));
    assert_eq!(d.selection(), &Selection::Selected(id("C")));
    assert_eq!(flights(&again.effects), 0);
    assert_eq!(d.map().viewport(), viewport);
}

#[test]
fn test_filter_change_resets_selection() {
    let mut d = dashboard();
    d.dispatch(UiEvent::CardClicked(id("A")));
    assert_eq!(d.selection(), &Selection::Selected(id("A")));

    let t = d.set_severity_filter(SeverityFilter::Low);
    assert_eq!(t.selection, Selection::Unselected);
    assert_eq!(d.selection(), &Selection::Unselected);
    assert_eq!(numbers(d.numbered_incidents()), vec![("B".to_string(), 1)]);
}

#[test]
fn test_setting_same_filter_still_resets() {
    let mut d = dashboard();
    d.dispatch(UiEvent::MarkerClicked(id("A")));
    d.set_severity_filter(SeverityFilter::All);
    assert!(d.selection().is_unselected());
}

#[test]
fn test_filter_change_closes_popup() {
    let mut d = dashboard();
    d.dispatch(UiEvent::MarkerClicked(id("A")));
    assert_eq!(d.map().popup(), Some(&id("A")));

    let t = d.set_severity_filter(SeverityFilter::High);
    assert_eq!(t.effects, vec![Effect::ClosePopup]);
    assert!(d.map().popup().is_none());
}

#[test]
fn test_card_toggle_twice_unselects_without_effects() {
    let mut d = dashboard();
    let first = d.dispatch(UiEvent::CardClicked(id("C")));
    let second = d.dispatch(UiEvent::CardClicked(id("C")));

    assert!(first.effects.is_empty());
    assert!(second.effects.is_empty());
    assert_eq!(d.selection(), &Selection::Unselected);
    assert_eq!(d.map().viewport(), Viewport::default());
}

#[test]
fn test_badge_click_scrolls_to_map_and_flies() {
    let mut d = dashboard();
    let t = d.dispatch(UiEvent::BadgeClicked(id("C")));

    assert!(t.effects.contains(&Effect::ScrollPageToMap));
    assert_eq!(flights(&t.effects), 1);
    assert!(!t.effects.iter().any(|e| matches!(e, Effect::ScrollListToCard { .. })));
    assert_eq!(d.map().viewport().center, LatLng::new(26.5, 56.2));
}

#[test]
fn test_badge_without_coordinates_is_inert() {
    let mut d = dashboard();
    d.dispatch(UiEvent::CardClicked(id("A")));

    let t = d.dispatch(UiEvent::BadgeClicked(id("B")));
    assert!(matches!(t.outcome, Outcome::Ignored(_)));
    assert!(t.effects.is_empty());
    assert_eq!(d.selection(), &Selection::Selected(id("A")));
}

#[test]
fn test_card_click_on_unmappable_selects_and_stays_put() {
    let mut d = dashboard();
    let t = d.dispatch(UiEvent::CardClicked(id("B")));
    assert!(t.is_applied());
    assert!(t.effects.is_empty());
    assert_eq!(d.render(now()).selected_number, Some(2));
}

#[test]
fn test_jump_to_list_scrolls_without_second_flight() {
    let mut d = dashboard();
    d.dispatch(UiEvent::MarkerClicked(id("A")));
    let t = d.dispatch(UiEvent::JumpToList(id("A")));

    assert_eq!(flights(&t.effects), 0);
    assert!(matches!(
        t.effects.as_slice(),
        [Effect::ScrollListToCard { number: 1, .. }]
    ));
}

#[test]
fn test_click_on_id_outside_filter_is_ignored() {
    let mut d = dashboard();
    d.set_severity_filter(SeverityFilter::High);
    let t = d.dispatch(UiEvent::CardClicked(id("B")));
    assert!(matches!(t.outcome, Outcome::Ignored(_)));
    assert!(d.selection().is_unselected());
}

#[test]
fn test_stale_selection_reads_as_unselected() {
    let state = DashboardState {
        severity_filter: SeverityFilter::High,
        selection: Selection::Selected(id("B")),
        ..Default::default()
    };
    let d = Dashboard::restore(scenario(), MapSettings::default(), state);

    assert!(d.selected().is_none());
    let frame = d.render(now());
    assert_eq!(frame.selection, None);
    assert!(frame.list.cards.iter().all(|c| !c.selected));
    assert!(frame.map.markers.iter().all(|m| !m.selected));
}

#[test]
fn test_snapshot_round_trip_preserves_session() {
    let mut d = dashboard();
    d.dispatch(UiEvent::MarkerClicked(id("C")));
    let state = d.snapshot();

    let json = serde_json::to_string(&state).unwrap();
    let back: DashboardState = serde_json::from_str(&json).unwrap();
    let mut restored = Dashboard::restore(scenario(), MapSettings::default(), back);

    assert_eq!(restored.selection(), &Selection::Selected(id("C")));
    assert_eq!(restored.map().viewport(), d.map().viewport());

    // Re-click after restore must not fly again either
    let t = restored.dispatch(UiEvent::MarkerClicked(id("C")));
    assert_eq!(flights(&t.effects), 0);
}

#[test]
fn test_viewport_moved_and_popup_closed() {
    let mut d = dashboard();
    let moved = Viewport::new(LatLng::new(10.0, 10.0), 3.0).unwrap();
    let t = d.dispatch(UiEvent::ViewportMoved(moved));
    assert!(t.effects.is_empty());
    assert_eq!(d.map().viewport(), moved);

    d.dispatch(UiEvent::MarkerClicked(id("A")));
    let t = d.dispatch(UiEvent::PopupClosed);
    assert_eq!(t.effects, vec![Effect::ClosePopup]);
    assert_eq!(d.map().viewport().center, LatLng::new(33.3, 44.4));
}

#[test]
fn test_replace_records_keeps_filter() {
    let mut d = dashboard();
    d.set_severity_filter(SeverityFilter::High);
    d.dispatch(UiEvent::CardClicked(id("A")));

    let mut records = scenario();
    records.remove(0);
    records.push(attack("D", Severity::High, Some((1.0, 1.0))));
    d.replace_records(records);

    assert_eq!(d.severity_filter(), SeverityFilter::High);
    assert_eq!(numbers(d.numbered_incidents()), vec![("C".to_string(), 1), ("D".to_string(), 2)]);
    assert!(d.selected().is_none());
}

#[test]
fn test_render_counts_and_frames() {
    let d = dashboard();
    let frame = d.render(now());
    assert_eq!(frame.counts.all, 3);
    assert_eq!(frame.counts.high, 2);
    assert_eq!(frame.list.cards.len(), 3);
    assert_eq!(frame.map.markers.len(), 2);
}

#[test]
fn test_card_then_badge_on_same_incident_flies() {
    let mut d = dashboard();
    let card = d.dispatch(UiEvent::CardClicked(id("C")));
    assert!(card.effects.is_empty());

    let badge = d.dispatch(UiEvent::BadgeClicked(id("C")));
    assert_eq!(flights(&badge.effects), 1);
    assert!(badge.effects.contains(&Effect::ScrollPageToMap));
    assert_eq!(d.map().viewport().center, LatLng::new(26.5, 56.2));
    assert_eq!(d.selection(), &Selection::Selected(id("C")));
}

#[test]
fn test_pan_then_refocus_selected_flies_again() {
    let mut d = dashboard();
    d.dispatch(UiEvent::MarkerClicked(id("A")));
    d.dispatch(UiEvent::ViewportMoved(Viewport::new(LatLng::new(10.0, 10.0), 9.0).unwrap()));

    let t = d.dispatch(UiEvent::MarkerClicked(id("A")));
    assert_eq!(flights(&t.effects), 1);
    assert_eq!(d.map().viewport().center, LatLng::new(33.3, 44.4));
}

#[test]
fn test_restore_discards_out_of_range_viewport() {
    let state: DashboardState = serde_json::from_str(
        r#"{"viewport":{"center":{"lat":999.0,"lng":-5000.0},"zoom":500.0}}"#,
    )
    .unwrap();
    let mut d = Dashboard::restore(scenario(), MapSettings::default(), state);
    assert_eq!(d.map().viewport(), Viewport::default());

    let t = d.dispatch(UiEvent::MarkerClicked(id("A")));
    let zooms: Vec<f64> = t
        .effects
        .iter()
        .filter_map(|e| match e {
            Effect::FlyTo { zoom, .. } => Some(*zoom),
            _ => None,
        })
        .collect();
    assert_eq!(zooms, vec![8.0]);
}
