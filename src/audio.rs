//! Audio playback using HTML media elements
//!
//! The simulation decides *when* a cue plays (one-shot flags live in the game
//! state); this module only turns [`GameEvent`]s into element calls.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::platform::AssetState;
use crate::platform::assets::SoundAsset;
use crate::platform::sound_path;
use crate::sim::{GameEvent, SoundEffect};

/// Audio manager for the game
pub struct AudioManager {
    start: SoundAsset,
    hit: SoundAsset,
}

/// Both cues play at full volume
const SFX_VOLUME: f64 = 1.0;

impl AudioManager {
    /// Begin loading both cues
    pub fn load() -> Result<Self, JsValue> {
        let manager = Self {
            start: SoundAsset::load(sound_path(SoundEffect::Start))?,
            hit: SoundAsset::load(sound_path(SoundEffect::Hit))?,
        };
        manager.start.element().set_volume(SFX_VOLUME);
        manager.hit.element().set_volume(SFX_VOLUME);
        Ok(manager)
    }

    fn asset(&self, effect: SoundEffect) -> &SoundAsset {
        match effect {
            SoundEffect::Start => &self.start,
            SoundEffect::Hit => &self.hit,
        }
    }

    /// Carry out one simulation event
    pub fn handle(&self, event: GameEvent) {
        match event {
            GameEvent::PlaySound(effect) => self.play(effect),
            GameEvent::StopSound(effect) => self.stop(effect),
        }
    }

    /// Rewind and play. Fire-and-forget; overlapping a previous play is fine.
    pub fn play(&self, effect: SoundEffect) {
        let asset = self.asset(effect);
        if asset.state() == AssetState::Failed {
            log::debug!("Skipping {:?}: clip failed to load", effect);
            return;
        }

        let element = asset.element();
        element.set_current_time(0.0);
        match element.play() {
            // The promise rejects when autoplay is blocked; nothing to recover
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::debug!("play() for {:?} rejected: {:?}", effect, e);
                }
            }),
            Err(e) => log::debug!("play() for {:?} refused: {:?}", effect, e),
        }
    }

    /// Pause and rewind
    pub fn stop(&self, effect: SoundEffect) {
        let element = self.asset(effect).element();
        element.pause().ok();
        element.set_current_time(0.0);
    }
}
