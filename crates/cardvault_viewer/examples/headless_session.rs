//! Headless Session Demo
//!
//! Drives a full viewer session without a window: browse the gallery,
//! inspect a card, then pull and open a booster pack. Frame snapshots are
//! logged instead of rendered.
//!
//! Run with: cargo run -p cardvault_viewer --example headless_session
//!
//! Pass a TOML file path to override the viewer configuration.

use anyhow::{Context, Result};
use cardvault_core::{create_provider, BoosterPhase, ProviderKind, Vec2};
use cardvault_image::{FileAssetSource, TextureLoader};
use cardvault_platform::prelude::*;
use cardvault_viewer::{Viewer, ViewerConfig};
use std::path::Path;
use std::sync::Arc;

const DT: f32 = 1.0 / 60.0;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(Path::new(&path))
            .with_context(|| format!("loading viewer config from {path}"))?,
        None => ViewerConfig::default(),
    };

    let provider = create_provider(ProviderKind::Bundled)?;
    let loader = TextureLoader::current(Arc::new(FileAssetSource::new("assets")));
    let mut viewer = Viewer::from_provider(provider.as_ref(), config)
        .await?
        .with_textures(loader)
        .with_seed(2024);

    // Gallery: hover the first card, scroll down a little
    run(&mut viewer, 30);
    send(&mut viewer, PointerKind::Enter, 0.0, 0.0, card(0));
    send(&mut viewer, PointerKind::Move, 0.0, 0.0, card_at(0, 0.9, 0.1));
    for _ in 0..10 {
        viewer.handle_input(InputEvent::Wheel {
            delta_x: 0.0,
            delta_y: 60.0,
        });
    }
    let frame = run(&mut viewer, 60);
    tracing::info!(
        cards = frame.cards.len(),
        pan = frame.camera.position.y,
        "gallery"
    );

    // Inspect: open the card, spin it, flip it
    send(&mut viewer, PointerKind::Click, 0.0, 0.0, card(0));
    run(&mut viewer, 10);
    send(&mut viewer, PointerKind::Down, 300.0, 300.0, card(0));
    for i in 1..=12 {
        let x = 300.0 + i as f32 * 15.0;
        send(&mut viewer, PointerKind::Move, x, 300.0, HitTarget::Background);
    }
    send(&mut viewer, PointerKind::Up, 480.0, 300.0, HitTarget::Background);
    send(&mut viewer, PointerKind::DoubleClick, 0.0, 0.0, card(0));
    let frame = run(&mut viewer, 120);
    if let Some(pose) = frame.inspect {
        tracing::info!(
            card = ?viewer.store().state().selected_card_id(),
            yaw = pose.rotation.y,
            pitch = pose.rotation.x,
            "inspect"
        );
    }
    viewer.store_mut().deselect_card();

    // Booster: tear, wait for the opening, reveal one by one
    if !viewer.pull_booster() {
        anyhow::bail!("catalog is empty, nothing to pull");
    }
    run(&mut viewer, 30);
    send(&mut viewer, PointerKind::Down, 0.0, 500.0, HitTarget::PackTop);
    for i in 1..=12 {
        let y = 500.0 - i as f32 * 10.0;
        send(&mut viewer, PointerKind::Move, 0.0, y, HitTarget::PackTop);
    }
    send(&mut viewer, PointerKind::Up, 0.0, 380.0, HitTarget::PackTop);

    while viewer.store().state().booster_phase() == BoosterPhase::Opening {
        run(&mut viewer, 1);
    }
    run(&mut viewer, 60);

    let hand = viewer.store().state().booster_cards().len();
    for slot in 0..hand {
        send(&mut viewer, PointerKind::Click, 0.0, 0.0, card(slot));
        run(&mut viewer, 20);
    }

    let state = viewer.store().state();
    for card in state.booster_cards() {
        tracing::info!(id = %card.id, name = %card.name, rarity = %card.rarity, "pulled");
    }
    tracing::info!(phase = ?state.booster_phase(), "booster session done");

    viewer.close_booster();
    run(&mut viewer, 1);
    Ok(())
}

fn run(viewer: &mut Viewer, frames: usize) -> cardvault_viewer::Frame {
    let mut frame = viewer.frame(DT);
    for _ in 1..frames {
        frame = viewer.frame(DT);
    }
    frame
}

fn send(viewer: &mut Viewer, kind: PointerKind, x: f32, y: f32, target: HitTarget) {
    let response = viewer.handle_input(InputEvent::Pointer(PointerEvent::new(
        kind,
        Vec2::new(x, y),
        target,
    )));
    if let Some(cursor) = response.cursor {
        tracing::debug!(?kind, ?cursor, "cursor");
    }
}

fn card(slot: usize) -> HitTarget {
    card_at(slot, 0.5, 0.5)
}

fn card_at(slot: usize, u: f32, v: f32) -> HitTarget {
    HitTarget::Card {
        slot,
        uv: Vec2::new(u, v),
    }
}
