use super::*;

#[test]
fn load_copies_deferred_source_and_marks_loaded() {
    let mut images = LazyImages::new(vec!["img/a.webp".to_owned()], true);
    let mut out = Vec::new();
    images.load(0, &mut out);
    assert_eq!(
        out,
        vec![
            Effect::SetAttribute { target: Target::LazyImage(0), name: "src", value: "img/a.webp".to_owned() },
            Effect::class(Target::LazyImage(0), LOADED_CLASS, true),
        ]
    );
    assert!(images.is_loaded(0));
}

#[test]
fn load_is_one_shot() {
    let mut images = LazyImages::new(vec!["a.png".to_owned()], true);
    let mut out = Vec::new();
    images.load(0, &mut out);
    out.clear();
    images.load(0, &mut out);
    assert!(out.is_empty());
}

#[test]
fn disabled_loader_does_nothing() {
    let mut images = LazyImages::new(vec!["a.png".to_owned()], false);
    let mut out = Vec::new();
    images.load(0, &mut out);
    assert!(out.is_empty());
    assert!(!images.enabled());
    assert!(!images.is_loaded(0));
}
