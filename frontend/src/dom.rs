use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::NodeRef;

/// A `window` event listener that unregisters itself when dropped, so an
/// effect can hand it to its destructor.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("Failed to listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self { window, event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

/// (top relative to the viewport, height) of the referenced element.
pub fn element_rect(node: &NodeRef) -> Option<(f64, f64)> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some((rect.top(), rect.height()))
}
