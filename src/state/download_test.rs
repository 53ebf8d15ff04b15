use super::*;

fn guard() -> DownloadGuard {
    DownloadGuard::new(&DownloadConfig::default())
}

#[test]
fn first_click_is_held_for_probe() {
    let mut download = guard();
    let mut out = Vec::new();
    download.on_click(&mut out);
    assert_eq!(out, vec![Effect::PreventDefault, Effect::ProbeAsset("assets/portfolio.pdf".to_owned())]);
    assert_eq!(download.phase(), DownloadPhase::Probing);
}

#[test]
fn clicks_during_probe_do_not_probe_again() {
    let mut download = guard();
    let mut out = Vec::new();
    download.on_click(&mut out);
    out.clear();
    download.on_click(&mut out);
    assert_eq!(out, vec![Effect::PreventDefault]);
}

#[test]
fn found_asset_reclicks_and_lets_click_through() {
    let mut download = guard();
    let mut out = Vec::new();
    download.on_click(&mut out);
    out.clear();
    download.on_probe(true, &mut out);
    assert_eq!(out, vec![Effect::Click(Target::DownloadLink)]);

    out.clear();
    download.on_click(&mut out);
    assert!(out.is_empty());
    assert_eq!(download.phase(), DownloadPhase::Idle);
}

#[test]
fn missing_asset_alerts_and_resets() {
    let mut download = guard();
    let mut out = Vec::new();
    download.on_click(&mut out);
    out.clear();
    download.on_probe(false, &mut out);
    assert_eq!(
        out,
        vec![Effect::Alert(
            "CV file not found. Please add your portfolio.pdf to the assets folder.".to_owned()
        )]
    );
    assert_eq!(download.phase(), DownloadPhase::Idle);
}

#[test]
fn stale_probe_result_is_ignored() {
    let mut download = guard();
    let mut out = Vec::new();
    download.on_probe(false, &mut out);
    assert!(out.is_empty());
}
