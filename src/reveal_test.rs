use super::*;

#[test]
fn new_tracker_has_nothing_revealed() {
    let tracker = RevealTracker::with_len(3);
    assert_eq!(tracker.len(), 3);
    assert_eq!(tracker.pending(), 3);
    assert!(!tracker.is_revealed(0));
}

#[test]
fn empty_tracker() {
    let tracker = RevealTracker::with_len(0);
    assert!(tracker.is_empty());
    assert_eq!(tracker.pending(), 0);
}

#[test]
fn first_intersection_reveals() {
    let mut tracker = RevealTracker::with_len(2);
    assert_eq!(tracker.observe(1, true), RevealOutcome::Revealed);
    assert!(tracker.is_revealed(1));
    assert!(!tracker.is_revealed(0));
    assert_eq!(tracker.pending(), 1);
}

#[test]
fn non_intersecting_report_is_ignored() {
    let mut tracker = RevealTracker::with_len(1);
    assert_eq!(tracker.observe(0, false), RevealOutcome::Ignored);
    assert!(!tracker.is_revealed(0));
}

#[test]
fn scrolling_out_and_back_does_not_retrigger() {
    let mut tracker = RevealTracker::with_len(1);
    assert_eq!(tracker.observe(0, true), RevealOutcome::Revealed);
    assert_eq!(tracker.observe(0, false), RevealOutcome::Ignored);
    assert!(tracker.is_revealed(0));
    assert_eq!(tracker.observe(0, true), RevealOutcome::Ignored);
    assert!(tracker.is_revealed(0));
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = RevealTracker::with_len(1);
    assert_eq!(tracker.observe(7, true), RevealOutcome::Ignored);
    assert!(!tracker.is_revealed(7));
}

#[test]
fn all_revealed_leaves_nothing_pending() {
    let mut tracker = RevealTracker::with_len(3);
    for i in 0..3 {
        tracker.observe(i, true);
    }
    assert_eq!(tracker.pending(), 0);
}
