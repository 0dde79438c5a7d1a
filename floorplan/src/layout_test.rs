use std::collections::HashSet;

use super::*;

#[test]
fn hall_has_sixty_one_booths() {
    assert_eq!(booths().count(), 61);
}

#[test]
fn booth_ids_are_unique() {
    let ids: HashSet<_> = booths().map(|b| b.id).collect();
    assert_eq!(ids.len(), booths().count());
}

#[test]
fn cell_keys_are_unique() {
    let keys: HashSet<_> = HALL.iter().map(Cell::key).collect();
    assert_eq!(keys.len(), HALL.len());
}

#[test]
fn booth_prefix_matches_tier() {
    for booth in booths() {
        let expected = match booth.tier {
            Tier::Basic => 'B',
            Tier::Silver => 'S',
            Tier::Gold => 'G',
            Tier::Platinum => 'P',
        };
        assert!(booth.id.starts_with(expected), "{} is {:?}", booth.id, booth.tier);
    }
}

#[test]
fn tier_totals() {
    let count = |tier| booths().filter(|b| b.tier == tier).count();
    assert_eq!(count(Tier::Basic), 25);
    assert_eq!(count(Tier::Silver), 23);
    assert_eq!(count(Tier::Gold), 10);
    assert_eq!(count(Tier::Platinum), 3);
}

#[test]
fn section_breaks_span_full_width() {
    let mids: Vec<_> = HALL
        .iter()
        .filter_map(|cell| match cell {
            Cell::Spacer(s) if s.kind == SpacerKind::Mid => Some(s.span),
            _ => None,
        })
        .collect();
    assert_eq!(mids, vec![12, 12, 12]);
}

#[test]
fn leading_big_spacers_are_narrower() {
    let span_of = |id: &str| {
        HALL.iter()
            .find(|cell| cell.key() == id)
            .map(Cell::column_span)
    };
    assert_eq!(span_of("bigspacer1"), Some(2));
    assert_eq!(span_of("bigspacer4"), Some(2));
    assert_eq!(span_of("bigspacer2"), Some(3));
    assert_eq!(span_of("bigspacer5"), Some(3));
}

#[test]
fn find_booth_by_id() {
    let booth = find_booth("G09");
    assert_eq!(booth.map(|b| b.size), Some("6X3"));
    assert_eq!(booth.map(|b| b.status), Some(BoothStatus::Reserved));
    assert!(find_booth("spacer1").is_none());
    assert!(find_booth("Z99").is_none());
}

#[test]
fn spacer_css_classes() {
    assert_eq!(SpacerKind::Aisle.css_class(), "spacer");
    assert_eq!(SpacerKind::Mid.css_class(), "mid-spacer");
    assert_eq!(SpacerKind::Big.css_class(), "big-spacer");
}
