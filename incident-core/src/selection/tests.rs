use super::machine::next;
use super::types::{Origin, Selection, Trigger};
use crate::incident::IncidentId;

fn id(s: &str) -> IncidentId {
    IncidentId::from(s)
}

#[test]
fn test_card_click_toggles() {
    let s = next(&Selection::Unselected, &Trigger::ListCardClick(id("a")));
    assert_eq!(s, Selection::Selected(id("a")));

    let s = next(&s, &Trigger::ListCardClick(id("a")));
    assert_eq!(s, Selection::Unselected);
}

#[test]
fn test_card_click_switches_to_other_id() {
    let s = Selection::Selected(id("a"));
    assert_eq!(next(&s, &Trigger::ListCardClick(id("b"))), Selection::Selected(id("b")));
}

#[test]
fn test_focus_triggers_never_toggle_off() {
    let selected = Selection::Selected(id("a"));
    for trigger in [
        Trigger::MapMarkerClick(id("a")),
        Trigger::ListBadgeClick(id("a")),
        Trigger::PopupJumpToList(id("a")),
    ] {
        assert_eq!(next(&selected, &trigger), selected);
        assert!(trigger.origin().is_focus());
    }
}

#[test]
fn test_filter_change_always_clears() {
    assert_eq!(next(&Selection::Unselected, &Trigger::FilterChange), Selection::Unselected);
    assert_eq!(
        next(&Selection::Selected(id("z")), &Trigger::FilterChange),
        Selection::Unselected
    );
}

#[test]
fn test_origins() {
    assert!(Trigger::MapMarkerClick(id("a")).origin().is_map_originated());
    assert!(Trigger::PopupJumpToList(id("a")).origin().is_map_originated());
    assert!(!Trigger::ListBadgeClick(id("a")).origin().is_map_originated());
    assert!(!Origin::ListCard.is_focus());
    assert_eq!(Trigger::FilterChange.target(), None);
}

#[test]
fn test_selection_serializes_as_optional_id() {
    let json = serde_json::to_string(&Selection::Selected(id("a"))).unwrap();
    assert_eq!(json, "\"a\"");
    let back: Selection = serde_json::from_str("null").unwrap();
    assert_eq!(back, Selection::Unselected);
}
