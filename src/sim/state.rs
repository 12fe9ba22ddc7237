//! Game state and core simulation types
//!
//! Everything the frame loop, input handlers and renderer touch lives in
//! [`GameState`]. There are no free-floating globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::Rect;
use crate::consts::*;

/// Current phase of gameplay
///
/// Transitions: NotStarted -> Running -> GameOver -> (reset) -> NotStarted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Start screen, waiting for the Start button
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended, popup and Restart button shown
    GameOver,
}

/// Sound cues the simulation can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Played when the Start button is pressed
    Start,
    /// Played when the player crashes
    Hit,
}

/// Side effects produced by the simulation, drained by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Rewind and play a cue
    PlaySound(SoundEffect),
    /// Stop a cue and rewind it to the beginning
    StopSound(SoundEffect),
}

/// The player sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    /// Vertical velocity (positive = down), units per step
    pub velocity: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            velocity: 0.0,
        }
    }
}

impl Player {
    /// Square bounding box used for collision
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    /// Centre of the drawn circle
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(PLAYER_SIZE / 2.0)
    }

    pub fn jump(&mut self) {
        self.velocity = JUMP_IMPULSE;
    }

    /// One step of gravity: velocity first, then position
    pub fn integrate(&mut self) {
        self.velocity += GRAVITY;
        self.pos.y += self.velocity;
    }
}

/// A pair of solid segments with a passable gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Height of the top segment; the gap starts here
    pub top_height: f32,
}

impl Obstacle {
    /// Top of the bottom segment
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.top_height + OBSTACLE_GAP
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, OBSTACLE_WIDTH, self.top_height)
    }

    pub fn bottom_rect(&self) -> Rect {
        let y = self.gap_bottom();
        Rect::new(self.x, y, OBSTACLE_WIDTH, SCREEN_HEIGHT - y)
    }

    /// Right edge has passed the left screen edge
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.x + OBSTACLE_WIDTH < 0.0
    }
}

/// One-shot guards so each cue plays at most once per episode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFlags {
    pub start_played: bool,
    pub hit_played: bool,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the spawner RNG was created from
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    pub player: Player,
    /// Obstacles in spawn order (leftmost first)
    pub obstacles: Vec<Obstacle>,
    pub audio_flags: AudioFlags,
    /// Physics steps run in the current episode
    pub step_count: u64,
    /// Pending side effects for the platform layer
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Spawner RNG (not persisted; a deserialized state draws from a fresh stream)
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed, on the start screen
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            phase: GamePhase::NotStarted,
            player: Player::default(),
            obstacles: Vec::new(),
            audio_flags: AudioFlags::default(),
            step_count: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        };

        state.spawn_obstacle();

        state
    }

    /// Append one fresh obstacle at the right screen edge
    pub fn spawn_obstacle(&mut self) {
        let obstacle = spawn::spawn_obstacle(&mut self.rng);
        log::debug!("Spawned obstacle: top_height={:.1}", obstacle.top_height);
        self.obstacles.push(obstacle);
    }

    /// NotStarted -> Running. Returns false if not on the start screen.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::NotStarted {
            return false;
        }
        self.phase = GamePhase::Running;
        log::info!("Game started");

        if !self.audio_flags.start_played {
            self.audio_flags.start_played = true;
            self.events.push(GameEvent::PlaySound(SoundEffect::Start));
        }
        true
    }

    /// Running -> GameOver, with the hit cue and start-cue cutoff
    pub fn end_run(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over after {} steps", self.step_count);

        if !self.audio_flags.hit_played {
            self.audio_flags.hit_played = true;
            self.events.push(GameEvent::PlaySound(SoundEffect::Hit));
        }
        self.events.push(GameEvent::StopSound(SoundEffect::Start));
    }

    /// Back to the start screen with a fresh player and one obstacle
    ///
    /// Audio already playing is left alone. The RNG stream continues so each
    /// episode gets new gaps.
    pub fn reset(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.spawn_obstacle();
        self.phase = GamePhase::NotStarted;
        self.audio_flags = AudioFlags::default();
        self.step_count = 0;
        log::info!("Game reset");
    }

    /// Take all pending events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Peek at pending events without consuming them
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
