//! Image and sound assets
//!
//! Assets load asynchronously and are never gated: the game runs while they
//! stream in. Each handle carries an explicit [`AssetState`] so the renderer
//! and audio can skip anything that is not usable yet.

use crate::sim::SoundEffect;

/// Load status of a single asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetState {
    #[default]
    Loading,
    Ready,
    Failed,
}

impl AssetState {
    pub fn is_ready(self) -> bool {
        self == AssetState::Ready
    }

    /// Apply a load/error callback. Settled states never change again.
    pub fn settle(self, loaded: bool) -> Self {
        match self {
            AssetState::Loading if loaded => AssetState::Ready,
            AssetState::Loading => AssetState::Failed,
            settled => settled,
        }
    }
}

/// Images the scene can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageId {
    Background,
    Player,
    Obstacle,
    Popup,
}

impl ImageId {
    pub const ALL: [ImageId; 4] = [
        ImageId::Background,
        ImageId::Player,
        ImageId::Obstacle,
        ImageId::Popup,
    ];

    /// Path relative to the page
    pub fn path(self) -> &'static str {
        match self {
            ImageId::Background => "images/bg.jpeg",
            ImageId::Player => "images/player.jpeg",
            ImageId::Obstacle => "images/obstacle.jpeg",
            ImageId::Popup => "images/popup.jpeg",
        }
    }

    /// Position in [`ImageId::ALL`]
    pub fn index(self) -> usize {
        match self {
            ImageId::Background => 0,
            ImageId::Player => 1,
            ImageId::Obstacle => 2,
            ImageId::Popup => 3,
        }
    }
}

/// Path of the clip behind a sound cue
pub fn sound_path(effect: SoundEffect) -> &'static str {
    match effect {
        SoundEffect::Start => "sounds/start.mp3",
        SoundEffect::Hit => "sounds/hit.mp3",
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{ImageAsset, ImageSet, SoundAsset};

#[cfg(target_arch = "wasm32")]
mod web {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlAudioElement, HtmlImageElement};

    use super::{AssetState, ImageId};

    /// Shared status cell, updated from the element's load callbacks
    fn watch(src: &'static str, state: &Rc<Cell<AssetState>>, loaded: bool) -> Closure<dyn FnMut()> {
        let state = state.clone();
        Closure::<dyn FnMut()>::new(move || {
            let next = state.get().settle(loaded);
            if next != state.get() {
                if loaded {
                    log::info!("Loaded {}", src);
                } else {
                    log::warn!("Failed to load {} - it will not be drawn or played", src);
                }
            }
            state.set(next);
        })
    }

    /// An `<img>` and its load status
    pub struct ImageAsset {
        element: HtmlImageElement,
        state: Rc<Cell<AssetState>>,
    }

    impl ImageAsset {
        /// Start loading; returns immediately
        pub fn load(src: &'static str) -> Result<Self, JsValue> {
            let element = HtmlImageElement::new()?;
            let state = Rc::new(Cell::new(AssetState::Loading));

            let on_load = watch(src, &state, true);
            let on_error = watch(src, &state, false);
            element.set_onload(Some(on_load.as_ref().unchecked_ref()));
            element.set_onerror(Some(on_error.as_ref().unchecked_ref()));
            on_load.forget();
            on_error.forget();

            element.set_src(src);
            Ok(Self { element, state })
        }

        pub fn element(&self) -> &HtmlImageElement {
            &self.element
        }

        pub fn state(&self) -> AssetState {
            self.state.get()
        }
    }

    /// Every image the scene uses
    pub struct ImageSet {
        images: Vec<ImageAsset>,
    }

    impl ImageSet {
        pub fn load_all() -> Result<Self, JsValue> {
            let images = ImageId::ALL
                .iter()
                .map(|id| ImageAsset::load(id.path()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Self { images })
        }

        pub fn get(&self, id: ImageId) -> &ImageAsset {
            &self.images[id.index()]
        }
    }

    /// An `<audio>` element and its load status
    pub struct SoundAsset {
        element: HtmlAudioElement,
        state: Rc<Cell<AssetState>>,
    }

    impl SoundAsset {
        /// Start loading; returns immediately
        pub fn load(src: &'static str) -> Result<Self, JsValue> {
            let element = HtmlAudioElement::new_with_src(src)?;
            let state = Rc::new(Cell::new(AssetState::Loading));

            let on_ready = watch(src, &state, true);
            let on_error = watch(src, &state, false);
            element.add_event_listener_with_callback(
                "canplaythrough",
                on_ready.as_ref().unchecked_ref(),
            )?;
            element.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
            on_ready.forget();
            on_error.forget();

            element.load();
            Ok(Self { element, state })
        }

        pub fn element(&self) -> &HtmlAudioElement {
            &self.element
        }

        pub fn state(&self) -> AssetState {
            self.state.get()
        }
    }
}
