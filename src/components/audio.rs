//! Exclusive handle around the native `<audio>` element. One handle exists
//! per selected episode; dropping it detaches every listener and removes the
//! element from the document, so switching episodes never accumulates stale
//! callbacks.

#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
pub struct AudioHandle {
    element: HtmlAudioElement,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

#[cfg(target_arch = "wasm32")]
impl AudioHandle {
    /// Create the playback element for one media source and attach it to the
    /// document. Returns `None` when no document is available.
    pub fn acquire(url: &str) -> Option<Self> {
        let document = window()?.document()?;
        let element: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
        element.set_id("rustcast-audio");
        element.set_attribute("preload", "metadata").ok()?;
        element.set_src(url);
        document.body()?.append_child(&element).ok()?;
        Some(Self {
            element,
            listeners: Vec::new(),
        })
    }

    fn on(&mut self, event: &'static str, callback: Closure<dyn FnMut()>) {
        let _ = self
            .element
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        self.listeners.push((event, callback));
    }

    /// Fires on every periodic position change with the elapsed seconds.
    pub fn on_time_update(&mut self, mut callback: impl FnMut(f64) + 'static) {
        let element = self.element.clone();
        self.on(
            "timeupdate",
            Closure::wrap(Box::new(move || callback(element.current_time())) as Box<dyn FnMut()>),
        );
    }

    /// Fires once the media metadata is ready. The element is rewound to the
    /// start before the callback runs.
    pub fn on_loaded_metadata(&mut self, mut callback: impl FnMut() + 'static) {
        let element = self.element.clone();
        self.on(
            "loadedmetadata",
            Closure::wrap(Box::new(move || {
                element.set_current_time(0.0);
                callback();
            }) as Box<dyn FnMut()>),
        );
    }

    /// Fires when playback reaches the natural end of the media. Does not
    /// fire while the element is looping.
    pub fn on_ended(&mut self, mut callback: impl FnMut() + 'static) {
        self.on(
            "ended",
            Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>),
        );
    }

    pub fn on_play(&mut self, mut callback: impl FnMut() + 'static) {
        self.on(
            "play",
            Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>),
        );
    }

    pub fn on_pause(&mut self, mut callback: impl FnMut() + 'static) {
        self.on(
            "pause",
            Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>),
        );
    }

    /// Fires when the element fails to load or decode its source; the
    /// callback receives a human-readable message when one can be derived.
    pub fn on_error(&mut self, mut callback: impl FnMut(Option<String>) + 'static) {
        let element = self.element.clone();
        self.on(
            "error",
            Closure::wrap(
                Box::new(move || callback(media_error_message(&element))) as Box<dyn FnMut()>
            ),
        );
    }

    pub fn play(&self) {
        if let Ok(promise) = self.element.play() {
            spawn(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }

    pub fn pause(&self) {
        let _ = self.element.pause();
    }

    pub fn seek(&self, position: f64) {
        self.element.set_current_time(position.max(0.0));
    }

    pub fn set_looping(&self, looping: bool) {
        self.element.set_loop(looping);
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for AudioHandle {
    fn drop(&mut self) {
        for (event, callback) in self.listeners.drain(..) {
            let _ = self
                .element
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
        let _ = self.element.pause();
        self.element.set_src("");
        let _ = self.element.remove_attribute("src");
        self.element.load();
        self.element.remove();
    }
}

/// Map the element's `error.code` to a message without pulling the MediaError
/// bindings in.
#[cfg(target_arch = "wasm32")]
fn media_error_message(element: &HtmlAudioElement) -> Option<String> {
    let element_js = wasm_bindgen::JsValue::from(element.clone());
    let error_js = js_sys::Reflect::get(&element_js, &"error".into()).ok()?;
    if error_js.is_null() || error_js.is_undefined() {
        return None;
    }
    let code = js_sys::Reflect::get(&error_js, &"code".into())
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0) as u16;

    Some(
        match code {
            1 => "Playback was aborted before the episode loaded.",
            2 => "Network error while loading this episode.",
            3 => "Episode playback failed due to a decode error.",
            4 => "No supported audio source was found for this episode.",
            _ => "Unable to load this episode.",
        }
        .to_string(),
    )
}

// Headless stub so the state layer and the component tree compile and test
// off-wasm; `acquire` reports that no playback element exists.
#[cfg(not(target_arch = "wasm32"))]
pub struct AudioHandle;

#[cfg(not(target_arch = "wasm32"))]
impl AudioHandle {
    pub fn acquire(_url: &str) -> Option<Self> {
        None
    }

    pub fn on_time_update(&mut self, _callback: impl FnMut(f64) + 'static) {}

    pub fn on_loaded_metadata(&mut self, _callback: impl FnMut() + 'static) {}

    pub fn on_ended(&mut self, _callback: impl FnMut() + 'static) {}

    pub fn on_play(&mut self, _callback: impl FnMut() + 'static) {}

    pub fn on_pause(&mut self, _callback: impl FnMut() + 'static) {}

    pub fn on_error(&mut self, _callback: impl FnMut(Option<String>) + 'static) {}

    pub fn play(&self) {}

    pub fn pause(&self) {}

    pub fn seek(&self, _position: f64) {}

    pub fn set_looping(&self, _looping: bool) {}
}
