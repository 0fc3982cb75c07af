//! Whole viewer sessions driven through `Viewer::frame` and
//! `Viewer::handle_input`, the way a host render loop would.

use async_trait::async_trait;
use cardvault_core::{
    create_provider, BoosterPhase, BundledProvider, ProviderKind, Vec2, ViewMode,
    BOOSTER_HAND_SIZE,
};
use cardvault_image::{AssetSource, ImageData, ImageSource, TextureLoader, TextureStatus};
use cardvault_platform::{
    Cursor, HitTarget, InputEvent, PointerEvent, PointerKind, ScrollDisposition,
};
use cardvault_viewer::{Frame, Viewer, ViewerConfig, ViewerError};
use std::sync::Arc;
use std::time::Duration;

const DT: f32 = 1.0 / 60.0;

fn bundled_viewer() -> Viewer {
    let catalog = BundledProvider::new().unwrap();
    let mut viewer = Viewer::new(ViewerConfig::default()).with_seed(42);
    viewer.store_mut().set_cards(catalog.cards().to_vec());
    viewer
}

fn run(viewer: &mut Viewer, frames: usize) -> Frame {
    let mut frame = viewer.frame(DT);
    for _ in 1..frames {
        frame = viewer.frame(DT);
    }
    frame
}

fn pointer(kind: PointerKind, x: f32, y: f32, target: HitTarget) -> InputEvent {
    InputEvent::Pointer(PointerEvent::new(kind, Vec2::new(x, y), target))
}

fn wheel(delta_y: f32) -> InputEvent {
    InputEvent::Wheel {
        delta_x: 0.0,
        delta_y,
    }
}

fn card(slot: usize) -> HitTarget {
    HitTarget::Card {
        slot,
        uv: Vec2::new(0.5, 0.5),
    }
}

/// Drag the pack's top strip upward by `distance` in 10 px steps
fn drag_pack(viewer: &mut Viewer, distance: f32) {
    let start = 400.0;
    viewer.handle_input(pointer(PointerKind::Down, 0.0, start, HitTarget::PackTop));
    let steps = (distance / 10.0) as usize;
    for i in 1..=steps {
        let y = start - i as f32 * 10.0;
        viewer.handle_input(pointer(PointerKind::Move, 0.0, y, HitTarget::PackTop));
    }
    viewer.handle_input(pointer(PointerKind::Up, 0.0, start - distance, HitTarget::Background));
}

#[test]
fn booster_session_runs_start_to_finish() {
    let mut viewer = bundled_viewer();
    run(&mut viewer, 2);

    assert!(viewer.can_pull());
    assert!(viewer.pull_booster());
    let frame = run(&mut viewer, 30);
    assert_eq!(frame.mode, ViewMode::Booster);
    assert!(frame.pack.is_some());

    drag_pack(&mut viewer, 200.0);
    assert_eq!(viewer.store().state().booster_phase(), BoosterPhase::Opening);

    // Opening is purely timer driven
    run(&mut viewer, 90);
    assert_eq!(viewer.store().state().booster_phase(), BoosterPhase::Revealing);
    let frame = run(&mut viewer, 1);
    assert!(frame.pack.is_none());
    assert_eq!(frame.cards.len(), BOOSTER_HAND_SIZE);

    for slot in 0..BOOSTER_HAND_SIZE - 1 {
        viewer.handle_input(pointer(PointerKind::Click, 0.0, 0.0, card(slot)));
        assert_eq!(viewer.store().state().booster_phase(), BoosterPhase::Revealing);
    }
    viewer.handle_input(pointer(PointerKind::Click, 0.0, 0.0, card(BOOSTER_HAND_SIZE - 1)));
    assert_eq!(viewer.store().state().booster_phase(), BoosterPhase::Summary);
    assert_eq!(viewer.store().state().revealed().len(), BOOSTER_HAND_SIZE);

    viewer.close_booster();
    let frame = run(&mut viewer, 1);
    assert_eq!(frame.mode, ViewMode::Gallery);
    assert_eq!(viewer.store().state().booster_phase(), BoosterPhase::Pack);
    assert!(viewer.store().state().revealed().is_empty());
}

#[test]
fn tear_fires_once_however_far_the_drag_goes() {
    let mut viewer = bundled_viewer();
    viewer.pull_booster();
    run(&mut viewer, 1);

    let transitions = Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let seen = transitions.clone();
    viewer.store_mut().subscribe(move |state| {
        if state.booster_phase() == BoosterPhase::Opening {
            seen.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        }
    });

    drag_pack(&mut viewer, 600.0);
    assert_eq!(transitions.load(std::sync::atomic::Ordering::SeqCst), 1);
}

#[test]
fn short_drag_leaves_pack_closed() {
    let mut viewer = bundled_viewer();
    viewer.pull_booster();
    run(&mut viewer, 1);

    drag_pack(&mut viewer, 70.0);
    run(&mut viewer, 120);
    assert_eq!(viewer.store().state().booster_phase(), BoosterPhase::Pack);
}

#[test]
fn reveal_all_finishes_the_hand() {
    let mut viewer = bundled_viewer();
    viewer.pull_booster();
    run(&mut viewer, 1);
    assert!(!viewer.reveal_all());

    drag_pack(&mut viewer, 100.0);
    run(&mut viewer, 90);
    viewer.handle_input(pointer(PointerKind::Click, 0.0, 0.0, card(1)));
    assert!(viewer.reveal_all());
    assert_eq!(viewer.store().state().booster_phase(), BoosterPhase::Summary);
    assert!(!viewer.reveal_all());
}

#[test]
fn wheel_spam_never_escapes_zoom_windows() {
    let mut viewer = bundled_viewer();

    viewer.store_mut().select_card("card-007");
    run(&mut viewer, 1);
    for direction in [1.0, -1.0] {
        for _ in 0..1000 {
            let response = viewer.handle_input(wheel(direction * 240.0));
            assert_eq!(response.scroll, ScrollDisposition::Consumed);
            let depth = viewer.camera().depth_target();
            assert!((3.0..=8.0).contains(&depth), "inspect depth {depth}");
        }
        run(&mut viewer, 5);
    }

    viewer.store_mut().deselect_card();
    viewer.pull_booster();
    run(&mut viewer, 1);
    for direction in [-1.0, 1.0] {
        for _ in 0..1000 {
            viewer.handle_input(wheel(direction * 240.0));
            let depth = viewer.camera().depth_target();
            assert!((8.0..=18.0).contains(&depth), "booster depth {depth}");
        }
    }

    viewer.close_booster();
    run(&mut viewer, 1);
    for _ in 0..1000 {
        viewer.handle_input(wheel(240.0));
        assert_eq!(viewer.camera().depth_target(), 10.0);
        let (min, max) = viewer.camera().pan_range();
        let pan = viewer.camera().pan_target();
        assert!(pan >= min && pan <= max);
    }
}

#[test]
fn selecting_and_deselecting_a_card() {
    let mut viewer = bundled_viewer();
    run(&mut viewer, 1);

    viewer.store_mut().select_card("card-007");
    let frame = run(&mut viewer, 1);
    assert_eq!(frame.mode, ViewMode::Inspect);
    assert_eq!(viewer.store().state().selected_card_id(), Some("card-007"));
    assert!(frame.inspect.is_some());

    let response = viewer.handle_input(pointer(PointerKind::Enter, 0.0, 0.0, card(0)));
    assert_eq!(response.cursor, Some(Cursor::Grab));

    viewer.store_mut().deselect_card();
    let frame = run(&mut viewer, 1);
    assert_eq!(frame.mode, ViewMode::Gallery);
    assert_eq!(viewer.store().state().selected_card_id(), None);
    assert!(frame.inspect.is_none());
}

#[test]
fn inspect_card_settles_into_idle_sway() {
    let mut viewer = bundled_viewer();
    viewer.store_mut().select_card("card-011");
    run(&mut viewer, 1);

    viewer.handle_input(pointer(PointerKind::Down, 0.0, 0.0, card(0)));
    viewer.handle_input(pointer(PointerKind::Move, 80.0, 0.0, card(0)));
    viewer.handle_input(pointer(PointerKind::Up, 80.0, 0.0, card(0)));

    // Five seconds: inertia dies out and the idle timeout passes
    let a = run(&mut viewer, 300).inspect.unwrap();
    let b = run(&mut viewer, 30).inspect.unwrap();
    assert_ne!(a.rotation, b.rotation);
    assert!(b.rotation.x.abs() <= ViewerConfig::default().inspect.sway_pitch_amplitude + 1e-3);
}

#[tokio::test]
async fn viewer_loads_from_bundled_provider() {
    let provider = create_provider(ProviderKind::Bundled).unwrap();
    let mut viewer = Viewer::from_provider(provider.as_ref(), ViewerConfig::default())
        .await
        .unwrap();
    assert!(viewer.can_pull());
    let frame = viewer.frame(DT);
    assert_eq!(frame.cards.len(), viewer.store().state().cards().len());
}

#[tokio::test]
async fn remote_provider_is_not_implemented() {
    let provider = create_provider(ProviderKind::Remote).unwrap();
    let err = Viewer::from_provider(provider.as_ref(), ViewerConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ViewerError::Catalog(_)));
}

struct FlatColorSource;

#[async_trait]
impl AssetSource for FlatColorSource {
    async fn fetch(&self, _source: &ImageSource) -> cardvault_image::Result<ImageData> {
        ImageData::from_rgba(vec![200, 40, 40, 255], 1, 1)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn booster_textures_swap_in_after_loading() {
    let loader = TextureLoader::current(Arc::new(FlatColorSource));
    let mut viewer = bundled_viewer().with_textures(loader);
    viewer.pull_booster();
    run(&mut viewer, 1);

    let mut loaded = false;
    for _ in 0..100 {
        run(&mut viewer, 1);
        if viewer_pack_status(&viewer) == Some(TextureStatus::Loaded) {
            loaded = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(loaded);
}

fn viewer_pack_status(viewer: &Viewer) -> Option<TextureStatus> {
    viewer.booster().map(|b| b.pack_texture().status())
}
