//! Background music using the Web Audio API
//!
//! One looping track, started when a round begins and stopped when it
//! ends. Every failure path degrades to silence: a missing AudioContext,
//! a track that failed to fetch or decode, or an autoplay policy that
//! keeps the context suspended.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{AudioBuffer, AudioBufferSourceNode, AudioContext, GainNode, Response};

/// Looping background-music player
pub struct MusicPlayer {
    ctx: Option<AudioContext>,
    gain: Option<GainNode>,
    /// Filled by the async loader once the track decodes
    buffer: Rc<RefCell<Option<AudioBuffer>>>,
    source: Option<AudioBufferSourceNode>,
}

impl MusicPlayer {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - music disabled");
        }

        let gain = ctx.as_ref().and_then(|ctx| {
            let gain = ctx.create_gain().ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;
            Some(gain)
        });

        Self {
            ctx,
            gain,
            buffer: Rc::new(RefCell::new(None)),
            source: None,
        }
    }

    /// Fetch and decode the track in the background. The player keeps
    /// working (silently) until the buffer arrives.
    pub fn load_track(&self, url: &str) {
        let Some(ctx) = self.ctx.clone() else { return };
        let slot = Rc::clone(&self.buffer);
        let url = url.to_string();

        spawn_local(async move {
            match fetch_and_decode(&ctx, &url).await {
                Ok(buffer) => {
                    log::info!("Music track loaded: {}", url);
                    *slot.borrow_mut() = Some(buffer);
                }
                Err(e) => {
                    log::error!("Failed to load music track {}: {:?}", url, e);
                }
            }
        });
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_volume(&self, volume: f32) {
        if let Some(gain) = &self.gain {
            gain.gain().set_value(volume.clamp(0.0, 1.0));
        }
    }

    /// Start the loop from the beginning. No-op when the track is not
    /// available; replaces any source that is already playing.
    pub fn play(&mut self) {
        let Some(ctx) = &self.ctx else { return };
        let Some(gain) = &self.gain else { return };

        // Autoplay policy: the context stays suspended until a user gesture
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        if let Some(old) = self.source.take() {
            let _ = old.stop();
        }

        let Some(buffer) = self.buffer.borrow().clone() else {
            log::warn!("Music track not ready - continuing without music");
            return;
        };

        let Ok(source) = ctx.create_buffer_source() else {
            log::warn!("Failed to create music source");
            return;
        };
        source.set_buffer(Some(&buffer));
        source.set_loop(true);
        if source.connect_with_audio_node(gain).is_err() || source.start().is_err() {
            log::warn!("Music playback failed - continuing without music");
            return;
        }
        self.source = Some(source);
    }

    /// Stop playback if a source is active
    pub fn stop(&mut self) {
        if let Some(source) = self.source.take() {
            let _ = source.stop();
        }
    }
}

impl Default for MusicPlayer {
    fn default() -> Self {
        Self::new()
    }
}

async fn fetch_and_decode(ctx: &AudioContext, url: &str) -> Result<AudioBuffer, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_str(url)).await?.dyn_into()?;
    let array_buffer = JsFuture::from(response.array_buffer()?).await?;
    let decoded = JsFuture::from(ctx.decode_audio_data(&array_buffer.dyn_into()?)?).await?;
    decoded.dyn_into()
}
