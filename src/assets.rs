//! Sprite and background image loading
//!
//! Images load asynchronously in the browser; the render step checks
//! readiness each frame and simply skips anything that has not decoded
//! (or failed to). Nothing here can halt the game.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlImageElement;

/// Image assets for one session
pub struct Assets {
    pub background: Option<HtmlImageElement>,
    pub player_sprite: Option<HtmlImageElement>,
    pub boss_sprite: Option<HtmlImageElement>,
}

impl Assets {
    /// Kick off loading of all images. Returns immediately; readiness is
    /// polled per frame via [`image_ready`].
    pub fn load() -> Self {
        Self {
            background: load_image("bg_lvl1.png"),
            player_sprite: load_image("flappy.png"),
            boss_sprite: load_image("boss.png"),
        }
    }
}

/// An image is drawable once it has decoded successfully
pub fn image_ready(img: &HtmlImageElement) -> bool {
    img.complete() && img.natural_width() > 0
}

fn load_image(src: &str) -> Option<HtmlImageElement> {
    let img = match HtmlImageElement::new() {
        Ok(img) => img,
        Err(e) => {
            log::error!("Failed to create image element: {:?}", e);
            return None;
        }
    };

    let src_owned = src.to_string();
    let onerror = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        log::warn!("Failed to load image: {} - sprite will not be drawn", src_owned);
    });
    let _ = img.add_event_listener_with_callback("error", onerror.as_ref().unchecked_ref());
    onerror.forget();

    img.set_src(src);
    Some(img)
}
