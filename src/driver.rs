//! Per-frame driver
//!
//! The host's animation scheduler calls `tick` once per display refresh.
//! Each tick runs one full simulation step, then renders, then publishes
//! HUD values if they changed. Game events are logged and handed to the
//! HUD sink as they are drained; the driver keeps none of them. A stopped
//! driver does nothing.

use crate::controller::Game;
use crate::renderer::{HudSink, Renderer};
use crate::sim::GameEvent;
use crate::snapshot::HudSnapshot;

pub struct FrameDriver {
    game: Game,
    running: bool,
    /// Last values pushed to the HUD
    last_hud: Option<HudSnapshot>,
    frames: u64,
}

impl FrameDriver {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            running: true,
            last_hud: None,
            frames: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Input events are delivered through the game between ticks
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Display frames driven so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Halt scheduling; later `tick` calls are no-ops
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Frame driver stopped after {} frames", self.frames);
        }
        self.running = false;
    }

    /// Run one frame. Returns false once stopped.
    pub fn tick<R: Renderer, H: HudSink>(&mut self, renderer: &mut R, hud: &mut H) -> bool {
        if !self.running {
            return false;
        }

        // The step completes (including removals) before anything reads it
        self.game.tick();

        for event in self.game.drain_events() {
            log_event(&event);
            hud.event(&event);
        }

        renderer.render(&self.game.snapshot());

        let current = self.game.hud();
        if self.last_hud != Some(current) {
            hud.publish(&current);
            self.last_hud = Some(current);
        }

        self.frames += 1;
        true
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::TrickLanded { trick, points } => log::debug!("{:?} +{}", trick, points),
        GameEvent::ObstacleCleared { id, kind } => log::trace!("Cleared {:?} #{}", kind, id),
        GameEvent::Crashed { .. } | GameEvent::RunStarted | GameEvent::ReturnedToIdle => {
            log::debug!("{:?}", event)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::sim::{GameStatus, ObstacleKind, place_obstacle};
    use crate::snapshot::RenderSnapshot;

    #[derive(Default)]
    struct CountingRenderer {
        frames: Vec<u64>,
        obstacle_counts: Vec<usize>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, frame: &RenderSnapshot<'_>) {
            self.frames.push(frame.frame);
            self.obstacle_counts.push(frame.obstacles.len());
        }
    }

    #[derive(Default)]
    struct RecordingHud {
        published: Vec<HudSnapshot>,
        events: Vec<GameEvent>,
    }

    impl HudSink for RecordingHud {
        fn publish(&mut self, hud: &HudSnapshot) {
            self.published.push(*hud);
        }

        fn event(&mut self, event: &GameEvent) {
            self.events.push(event.clone());
        }
    }

    #[test]
    fn test_hud_pushed_only_on_change() {
        let mut driver = FrameDriver::new(Game::new(1));
        let (mut renderer, mut hud) = (CountingRenderer::default(), RecordingHud::default());
        for _ in 0..5 {
            driver.tick(&mut renderer, &mut hud);
        }
        // Idle: nothing changes after the first publish
        assert_eq!(hud.published.len(), 1);
        assert_eq!(renderer.frames.len(), 5);

        driver.game_mut().key_down(Key::Space);
        driver.tick(&mut renderer, &mut hud);
        assert_eq!(hud.published.last().map(|h| h.status), Some(GameStatus::Playing));
    }

    #[test]
    fn test_render_sees_completed_step() {
        let mut driver = FrameDriver::new(Game::new(1));
        let (mut renderer, mut hud) = (CountingRenderer::default(), RecordingHud::default());
        driver.game_mut().key_down(Key::Space);
        driver.tick(&mut renderer, &mut hud);
        driver.tick(&mut renderer, &mut hud);
        assert_eq!(renderer.frames, vec![1, 2]);
        // First step spawned an obstacle
        assert_eq!(renderer.obstacle_counts[0], 1);
    }

    #[test]
    fn test_stop_halts_ticks() {
        let mut driver = FrameDriver::new(Game::new(1));
        let (mut renderer, mut hud) = (CountingRenderer::default(), RecordingHud::default());
        driver.game_mut().key_down(Key::Space);
        assert!(driver.tick(&mut renderer, &mut hud));
        driver.stop();
        assert!(!driver.is_running());
        assert!(!driver.tick(&mut renderer, &mut hud));
        assert_eq!(driver.frames(), 1);
        assert_eq!(driver.game().state().frame, 1);
        assert_eq!(renderer.frames.len(), 1);
    }

    #[test]
    fn test_events_forwarded_to_sink() {
        let mut driver = FrameDriver::new(Game::new(1));
        let (mut renderer, mut hud) = (CountingRenderer::default(), RecordingHud::default());
        driver.game_mut().key_down(Key::Space);
        driver.tick(&mut renderer, &mut hud);
        assert_eq!(hud.events, vec![GameEvent::RunStarted]);
        assert!(driver.game().state().events.is_empty());
    }

    #[test]
    fn test_nothing_retained_across_many_runs() {
        let mut driver = FrameDriver::new(Game::new(1));
        let (mut renderer, mut hud) = (CountingRenderer::default(), RecordingHud::default());
        for _ in 0..50 {
            driver.game_mut().pointer();
            let state = driver.game_mut().state_mut();
            let x = state.player.pos.x;
            place_obstacle(state, ObstacleKind::TallBox, x);
            driver.tick(&mut renderer, &mut hud);
            assert_eq!(driver.game().status(), GameStatus::GameOver);
            driver.tick(&mut renderer, &mut hud);
            driver.game_mut().pointer();
            driver.tick(&mut renderer, &mut hud);
            assert!(driver.game().state().events.is_empty());
        }
        let crashes = hud.events.iter().filter(|e| matches!(e, GameEvent::Crashed { .. })).count();
        assert_eq!(crashes, 50);
    }
}
