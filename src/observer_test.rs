use super::*;

#[test]
fn default_options_fire_on_any_intersection() {
    let options = ObserverOptions::default();
    assert!(options.qualifies(IntersectionEntry::visible(0.01)));
    assert!(!options.qualifies(IntersectionEntry::hidden()));
    assert_eq!(options.root_margin, "0px");
}

#[test]
fn threshold_is_inclusive() {
    let options = ObserverOptions::new(0.5);
    assert!(!options.qualifies(IntersectionEntry::visible(0.49)));
    assert!(options.qualifies(IntersectionEntry::visible(0.5)));
    assert!(options.qualifies(IntersectionEntry::visible(1.0)));
}

#[test]
fn non_intersecting_entry_never_qualifies() {
    let options = ObserverOptions::new(0.0);
    let entry = IntersectionEntry { intersecting: false, ratio: 0.0 };
    assert!(!options.qualifies(entry));
}

#[test]
fn observer_fires_once_per_target() {
    let mut observer = OneShotObserver::new(ObserverOptions::new(0.1));
    assert!(observer.observe("card-a"));
    assert!(observer.observe("card-b"));

    assert!(observer.notify(&"card-a", IntersectionEntry::visible(0.3)));
    assert!(!observer.notify(&"card-a", IntersectionEntry::visible(0.9)));
    assert!(!observer.is_observing(&"card-a"));
    assert!(observer.is_observing(&"card-b"));
    assert_eq!(observer.pending(), 1);
}

#[test]
fn below_threshold_entries_keep_target_observed() {
    let mut observer = OneShotObserver::new(ObserverOptions::new(0.5));
    observer.observe(7_usize);
    assert!(!observer.notify(&7, IntersectionEntry::visible(0.2)));
    assert!(observer.is_observing(&7));
    assert!(observer.notify(&7, IntersectionEntry::visible(0.6)));
}

#[test]
fn unknown_target_is_ignored() {
    let mut observer: OneShotObserver<usize> = OneShotObserver::new(ObserverOptions::default());
    assert!(!observer.notify(&3, IntersectionEntry::visible(1.0)));
}

#[test]
fn duplicate_observe_is_rejected() {
    let mut observer = OneShotObserver::new(ObserverOptions::default());
    assert!(observer.observe(1_u8));
    assert!(!observer.observe(1_u8));
    assert_eq!(observer.pending(), 1);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: ObserverOptions = serde_json::from_str(r#"{ "threshold": 0.25 }"#).expect("options");
    assert!((options.threshold - 0.25).abs() < f64::EPSILON);
    assert_eq!(options.root_margin, "0px");
}
