use super::*;
use crate::filter::SeverityFilter;
use crate::incident::{IncidentId, LatLng};
use crate::testing::{now, scenario};

fn id(s: &str) -> IncidentId {
    IncidentId::from(s)
}

fn high_view() -> NumberedView {
    NumberedView::derive(&scenario(), SeverityFilter::High)
}

fn fly_targets(effects: &[Effect]) -> Vec<&IncidentId> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::FlyTo { id, .. } => Some(id),
            _ => None,
        })
        .collect()
}

#[test]
fn test_marker_focus_flies_and_opens_popup() {
    let view = high_view();
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();

    map.on_selection_change(
        &view,
        &Selection::Selected(id("C")),
        Origin::MapMarker,
        &mut q,
    );

    let effects = q.drain();
    assert_eq!(effects[0], Effect::OpenPopup { id: id("C") });
    assert_eq!(fly_targets(&effects), vec![&id("C")]);
    assert_eq!(map.viewport().center, LatLng::new(26.5, 56.2));
    assert_eq!(map.viewport().zoom, 8.0);
    assert_eq!(map.popup(), Some(&id("C")));
}

#[test]
fn test_refocus_same_id_does_not_fly() {
    let view = high_view();
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();
    let c = Selection::Selected(id("C"));

    map.on_selection_change(&view, &c, Origin::MapMarker, &mut q);
    q.drain();
    let before = map.viewport();

    map.on_selection_change(&view, &c, Origin::MapMarker, &mut q);
    assert!(q.drain().is_empty());
    assert_eq!(map.viewport(), before);
}

#[test]
fn test_manual_pan_allows_refocus() {
    let view = high_view();
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();
    let c = Selection::Selected(id("C"));

    map.on_selection_change(&view, &c, Origin::MapMarker, &mut q);
    q.drain();

    let elsewhere = Viewport::new(LatLng::new(10.0, 10.0), 9.0).unwrap();
    map.on_viewport_moved(elsewhere);
    assert!(map.flight_target().is_none());

    map.on_selection_change(&view, &c, Origin::MapMarker, &mut q);
    assert_eq!(fly_targets(&q.drain()), vec![&id("C")]);
    assert_eq!(map.viewport().center, LatLng::new(26.5, 56.2));
}

#[test]
fn test_filter_change_forgets_flight_target() {
    let view = high_view();
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();
    let a = Selection::Selected(id("A"));

    map.on_selection_change(&view, &a, Origin::MapMarker, &mut q);
    map.on_filter_change(&mut q);
    q.drain();
    assert!(map.flight_target().is_none());

    map.on_selection_change(&view, &a, Origin::ListBadge, &mut q);
    assert_eq!(fly_targets(&q.drain()), vec![&id("A")]);
}

#[test]
fn test_badge_focus_flies_without_popup() {
    let view = high_view();
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();

    map.on_selection_change(&view, &Selection::Selected(id("A")), Origin::ListBadge, &mut q);

    let effects = q.drain();
    assert_eq!(fly_targets(&effects), vec![&id("A")]);
    assert!(!effects.iter().any(|e| matches!(e, Effect::OpenPopup { .. })));
    assert!(map.popup().is_none());
}

#[test]
fn test_card_body_selection_never_moves_viewport() {
    let view = high_view();
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();

    map.on_selection_change(
        &view,
        &Selection::Selected(id("A")),
        Origin::ListCard,
        &mut q,
    );
    assert!(q.is_empty());
    assert_eq!(map.viewport(), Viewport::default());
}

#[test]
fn test_unmappable_selection_does_not_move() {
    let view = NumberedView::derive(&scenario(), SeverityFilter::All);
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();

    map.on_selection_change(
        &view,
        &Selection::Selected(id("B")),
        Origin::ListBadge,
        &mut q,
    );
    assert!(q.is_empty());
    assert_eq!(map.viewport(), Viewport::default());
}

#[test]
fn test_never_zooms_out() {
    let view = high_view();
    let zoomed = Viewport::new(LatLng::new(30.0, 50.0), 11.0).unwrap();
    let mut map = MapBinding::restore(MapSettings::default(), zoomed, None, None);
    let mut q = EffectQueue::new();

    map.on_selection_change(
        &view,
        &Selection::Selected(id("A")),
        Origin::ListBadge,
        &mut q,
    );
    assert_eq!(map.viewport().zoom, 11.0);
}

#[test]
fn test_second_target_replaces_first() {
    let view = high_view();
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();
    let a = Selection::Selected(id("A"));
    let c = Selection::Selected(id("C"));

    map.on_selection_change(&view, &a, Origin::MapMarker, &mut q);
    map.on_selection_change(&view, &c, Origin::MapMarker, &mut q);

    let effects = q.drain();
    assert_eq!(fly_targets(&effects), vec![&id("A"), &id("C")]);
    assert_eq!(map.viewport().center, LatLng::new(26.5, 56.2));
}

#[test]
fn test_popup_close_keeps_viewport() {
    let view = high_view();
    let mut map = MapBinding::new(MapSettings::default());
    let mut q = EffectQueue::new();
    map.open_popup(&id("A"), &mut q);
    let before = map.viewport();

    map.close_popup(&mut q);
    map.close_popup(&mut q);

    assert_eq!(q.drain(), vec![Effect::OpenPopup { id: id("A") }, Effect::ClosePopup]);
    assert_eq!(map.viewport(), before);
    assert!(map.render(&view, &Selection::Unselected, now()).popup.is_none());
}

#[test]
fn test_render_markers_keep_list_numbers() {
    let view = NumberedView::derive(&scenario(), SeverityFilter::All);
    let map = MapBinding::new(MapSettings::default());
    let frame = map.render(&view, &Selection::Selected(id("C")), now());

    let numbers: Vec<(String, usize)> = frame
        .markers
        .iter()
        .map(|m| (m.id.to_string(), m.number))
        .collect();
    assert_eq!(numbers, vec![("A".to_string(), 1), ("C".to_string(), 3)]);

    let c = &frame.markers[1];
    assert!(c.selected);
    assert_eq!(c.size, 32);
    assert_eq!(c.outline_width, 3);
    assert_eq!(c.color, "#f97316");
    assert!(!frame.markers[0].selected);
    assert_eq!(frame.markers[0].size, 24);
    assert!(frame.empty_message.is_none());
}

#[test]
fn test_render_popup_contents() {
    let view = high_view();
    let map = MapBinding::restore(MapSettings::default(), Viewport::default(), Some(id("C")), None);
    let popup = map.render(&view, &Selection::Unselected, now()).popup.unwrap();

    assert_eq!(popup.title, "#2 Strike C");
    assert_eq!(popup.location.as_deref(), Some("Persian Gulf"));
    assert_eq!(popup.recency, "30m ago");
    assert_eq!(popup.category.as_deref(), Some("drone strike"));
    assert!(popup.can_jump_to_list);
}

#[test]
fn test_empty_map_message() {
    let view = NumberedView::derive(&scenario(), SeverityFilter::Low);
    let frame = MapBinding::new(MapSettings::default()).render(&view, &Selection::Unselected, now());
    assert!(frame.markers.is_empty());
    assert_eq!(frame.empty_message, Some(EMPTY_MAP_MESSAGE));
}
