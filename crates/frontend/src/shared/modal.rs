use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

#[derive(Clone)]
struct ModalEntry {
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
}

/// A handle passed to the modal body so it can close itself.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    svc: ModalService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred();
    }
}

/// Single-slot modal service. The expense form is the only modal flow in the
/// app, so there is no stack; opening a modal replaces any open one.
#[derive(Clone, Copy)]
pub struct ModalService {
    current: RwSignal<Option<ModalEntry>>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.get().is_some()
    }

    /// Open a modal. `builder` receives a `ModalHandle` so the modal body can
    /// close itself from its own buttons.
    pub fn open<F>(&self, builder: F)
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.current.set(Some(ModalEntry {
            builder: Arc::new(builder),
        }));
    }

    pub fn close(&self) {
        self.current.set(None);
    }

    /// Close on the next tick. Removing the modal synchronously during its own
    /// DOM event dispatch makes Leptos event delegation call a dropped handler.
    pub fn close_deferred(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close();
        });
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the active modal. Must be mounted exactly once, at the app root.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalService>()
        .expect("ModalService not provided in context (provide it in app root)");

    // Global Escape handler.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.close_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // ModalHost lives for the whole app lifetime; keep the closure alive.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            {move || {
                svc.current
                    .get()
                    .map(|entry| {
                        let handle = ModalHandle { svc };
                        let body = (entry.builder)(handle);
                        view! { <ModalFrame on_close=Callback::new(move |_| svc.close_deferred())>{body}</ModalFrame> }
                    })
            }}
        </Show>
    }
}

/// Overlay plus positioned surface. The modal body renders its own header and
/// action buttons.
#[component]
pub fn ModalFrame(on_close: Callback<()>, children: Children) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release landed on the overlay itself, so
    // selecting text inside the modal and releasing outside does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal" on:click=stop_propagation>
                {children()}
            </div>
        </div>
    }
}
