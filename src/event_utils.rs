use leptos::ev::EventDescriptor;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event};

#[derive(Clone, Debug)]
pub struct EventOptions {
    pub passive: bool,
    pub capture: bool,
}

impl Default for EventOptions {
    fn default() -> Self {
        Self { passive: true, capture: false }
    }
}

/// A listener registered on `window`. It stays registered until this handle
/// is removed or dropped; the closure is never freed while the browser can
/// still call it.
pub struct WindowEventListenerHandle {
    event_name: String,
    callback: Option<Closure<dyn FnMut(Event)>>,
    capture: bool,
}

impl WindowEventListenerHandle {
    pub fn remove(mut self) {
        self.unregister();
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    fn unregister(&mut self) {
        let Some(callback) = self.callback.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback_and_bool(
                &self.event_name,
                callback.as_ref().unchecked_ref(),
                self.capture,
            );
        }
    }
}

impl Drop for WindowEventListenerHandle {
    fn drop(&mut self) {
        self.unregister();
    }
}

pub fn window_event_listener_with_options<E>(
    event: E,
    options: &EventOptions,
    mut cb: impl FnMut(E::EventType) + 'static,
) -> WindowEventListenerHandle
where
    E: EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_capture(options.capture);

    let event_name = (*event.name()).to_owned();
    let callback = Closure::wrap(Box::new(move |ev: Event| {
        cb(ev.unchecked_into::<E::EventType>());
    }) as Box<dyn FnMut(Event)>);

    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            &event_name,
            callback.as_ref().unchecked_ref(),
            &opts,
        );
    }

    WindowEventListenerHandle { event_name, callback: Some(callback), capture: options.capture }
}
