//! Monoskate entry point
//!
//! Native builds have no window; this runs a headless attract-mode session
//! where a simple autopilot skates until it crashes or time runs out.
//!
//! Usage: monoskate [seed] [frames] [tuning.json]

use monoskate::renderer::{FrameInstances, HudSink, Renderer, visible_label};
use monoskate::sim::{GameEvent, GameState, GameStatus};
use monoskate::{FrameDriver, Game, HudSnapshot, Key, RenderSnapshot, Tuning};

/// Counts what would be drawn each frame
#[derive(Default)]
struct HeadlessRenderer {
    quads_drawn: usize,
    labels_shown: usize,
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, frame: &RenderSnapshot<'_>) {
        let instances = FrameInstances::build(frame);
        self.quads_drawn += instances.len();
        if visible_label(frame.player, frame.frame).is_some() {
            self.labels_shown += 1;
        }
    }
}

struct LogHud;

impl HudSink for LogHud {
    fn publish(&mut self, hud: &HudSnapshot) {
        log::trace!("HUD {:05} {:05}m {:?}", hud.score, hud.distance, hud.status);
    }

    fn event(&mut self, event: &GameEvent) {
        if let GameEvent::TrickLanded { trick, .. } = event {
            log::debug!("HUD flash {:?}", trick);
        }
    }
}

/// Keys the autopilot wants held this frame
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct Autopilot {
    jump: bool,
    trick_key: Option<Key>,
}

impl Autopilot {
    /// Jump when the nearest obstacle ahead is close; flip once airborne
    fn plan(state: &GameState) -> Self {
        let player = &state.player;
        let lookahead = state.speed * 9.0;
        let threat = state.obstacles.iter().any(|obs| {
            let gap = obs.pos.x - (player.pos.x + player.size.x);
            gap > 0.0 && gap < lookahead
        });

        let trick_key = (player.is_jumping && player.dy > -4.0 && player.dy < 0.0)
            .then(|| if state.frame % 2 == 0 { Key::ArrowLeft } else { Key::ArrowRight });

        Self {
            jump: threat && !player.is_jumping,
            trick_key,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(2024);
    let max_frames: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 120);
    let tuning = match args.next() {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json_or_default(&json),
            Err(e) => {
                log::warn!("Could not read {path}: {e}");
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    log::info!("Monoskate (headless) starting, seed {seed}, up to {max_frames} frames");

    let mut renderer = HeadlessRenderer::default();
    let mut hud = LogHud;
    let mut driver = FrameDriver::new(Game::with_tuning(seed, tuning));

    driver.game_mut().key_down(Key::Space);
    driver.game_mut().key_up(Key::Space);

    let mut prev = Autopilot::default();
    while driver.frames() < max_frames {
        let plan = Autopilot::plan(driver.game().state());
        let game = driver.game_mut();
        if plan.jump != prev.jump {
            if plan.jump {
                game.key_down(Key::ArrowUp);
            } else {
                game.key_up(Key::ArrowUp);
            }
        }
        if plan.trick_key != prev.trick_key {
            if let Some(key) = prev.trick_key {
                game.key_up(key);
            }
            if let Some(key) = plan.trick_key {
                game.key_down(key);
            }
        }
        prev = plan;

        driver.tick(&mut renderer, &mut hud);

        // Let the crash burst fade, then stop
        let state = driver.game().state();
        if state.status == GameStatus::GameOver && state.particles.is_empty() {
            break;
        }
    }
    driver.stop();

    let hud = driver.game().hud();
    println!(
        "Score {:05} | Distance {:05}m | {:?} after {} frames ({} quads, {} label frames)",
        hud.score,
        hud.distance,
        hud.status,
        driver.frames(),
        renderer.quads_drawn,
        renderer.labels_shown
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `FrameDriver` from their own animation loop
}
