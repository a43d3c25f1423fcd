use super::*;
use crate::scene::params::FloatRange;

fn settings() -> RenderSettings {
    RenderSettings {
        preview_dpi: 8,
        export_dpi: 12,
        ..RenderSettings::default()
    }
}

fn session(trigger: RenderTrigger) -> PosterSession {
    PosterSession::with_seed_source(
        settings(),
        RenderParameters::default(),
        trigger,
        RandomStream::new(5),
    )
}

#[test]
fn on_change_renders_once_per_real_change() {
    let mut s = session(RenderTrigger::OnChange);
    assert!(s.is_stale());

    let first = s.set_params(RenderParameters::default()).unwrap();
    assert!(first.is_some());
    assert_eq!(s.render_count(), 1);

    // Same values again: no re-render.
    assert!(s.set_params(RenderParameters::default()).unwrap().is_none());
    assert_eq!(s.render_count(), 1);

    let changed = RenderParameters {
        n_layers: 12,
        ..RenderParameters::default()
    };
    let img = s.set_params(changed).unwrap().unwrap();
    assert_eq!(img.stats.blobs, 12);
    assert_eq!(s.render_count(), 2);
    assert!(!s.is_stale());
}

#[test]
fn on_generate_stages_changes_until_asked() {
    let mut s = session(RenderTrigger::OnGenerate);
    let changed = RenderParameters {
        seed: 7,
        ..RenderParameters::default()
    };
    assert!(s.set_params(changed).unwrap().is_none());
    assert_eq!(s.render_count(), 0);
    assert!(s.current().is_none());

    s.generate().unwrap();
    assert_eq!(s.render_count(), 1);
    // A second generate with nothing changed reuses the preview.
    s.generate().unwrap();
    assert_eq!(s.render_count(), 1);
    assert_eq!(s.params().seed, 7);
}

#[test]
fn invalid_change_keeps_previous_state() {
    let mut s = session(RenderTrigger::OnChange);
    s.generate().unwrap();
    let before = s.current().unwrap().frame.fingerprint();

    let bad = RenderParameters {
        wobble: FloatRange::new(0.4, 0.1),
        ..RenderParameters::default()
    };
    assert!(s.set_params(bad).is_err());
    assert_eq!(s.params(), &RenderParameters::default());
    assert_eq!(s.current().unwrap().frame.fingerprint(), before);
    assert_eq!(s.render_count(), 1);
}

#[test]
fn shuffle_picks_seed_in_ui_range_and_rerenders() {
    let mut s = session(RenderTrigger::OnChange);
    let seed = s.shuffle_seed().unwrap();
    assert!(seed <= 999_999);
    assert_eq!(s.params().seed, seed);
    assert_eq!(s.render_count(), 1);

    let mut again = session(RenderTrigger::OnChange);
    assert_eq!(again.shuffle_seed().unwrap(), seed);
}

#[test]
fn export_uses_export_resolution() {
    let mut s = session(RenderTrigger::OnGenerate);
    let png = s.export_png().unwrap();
    // 12 dpi page is 84x120; the export keeps only the 84x84 view.
    assert_eq!((png.width, png.height), (84, 84));
    assert_eq!(png.file_name(), "poster.png");
}
