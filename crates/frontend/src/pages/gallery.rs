use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

const GALLERY_IMAGES: [&str; 12] = [
    "static/gallery/hall-01.webp",
    "static/gallery/hall-02.webp",
    "static/gallery/hall-03.webp",
    "static/gallery/hall-04.webp",
    "static/gallery/hall-05.webp",
    "static/gallery/hall-06.webp",
    "static/gallery/hall-07.webp",
    "static/gallery/hall-08.webp",
    "static/gallery/hall-09.webp",
    "static/gallery/hall-10.webp",
    "static/gallery/hall-11.webp",
    "static/gallery/hall-12.webp",
];

/// Photo grid with a lightbox. Arrow keys move between images while the
/// lightbox is open; Escape closes it.
#[component]
pub fn GalleryPage() -> impl IntoView {
    // Index into GALLERY_IMAGES; None = lightbox closed.
    let selected = RwSignal::new(None::<usize>);

    let show_next = move || {
        selected.update(|s| {
            if let Some(i) = s {
                *i = (*i + 1) % GALLERY_IMAGES.len();
            }
        });
    };
    let show_prev = move || {
        selected.update(|s| {
            if let Some(i) = s {
                *i = (*i + GALLERY_IMAGES.len() - 1) % GALLERY_IMAGES.len();
            }
        });
    };

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if selected.get_untracked().is_none() {
                    return;
                }
                match keyboard_event.key().as_str() {
                    "ArrowRight" => show_next(),
                    "ArrowLeft" => show_prev(),
                    "Escape" => selected.set(None),
                    _ => {}
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ =
                window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    });

    view! {
        <div class="gallery-container">
            <h2 class="gallery-title">"Our Gallery"</h2>
            <p class="gallery-subtitle">"Explore our venue through images"</p>

            <div class="gallery-grid">
                {GALLERY_IMAGES
                    .iter()
                    .enumerate()
                    .map(|(index, src)| {
                        view! {
                            <div
                                class="gallery-grid-item"
                                on:click=move |_| selected.set(Some(index))
                            >
                                <img src=*src alt=format!("Venue photo {}", index + 1) />
                                <div class="gallery-overlay">
                                    <span class="gallery-overlay-text">"View Image"</span>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || selected.get().is_some()>
                <div class="gallery-modal" on:click=move |_| selected.set(None)>
                    <button
                        class="gallery-modal-prev"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            show_prev();
                        }
                    >
                        "❮"
                    </button>
                    <div class="gallery-modal-content" on:click=|ev| ev.stop_propagation()>
                        {move || {
                            selected
                                .get()
                                .map(|i| {
                                    view! {
                                        <img src=GALLERY_IMAGES[i] alt="Full size" />
                                        <div class="gallery-modal-caption">
                                            {format!("Image {} of {}", i + 1, GALLERY_IMAGES.len())}
                                        </div>
                                    }
                                })
                        }}
                    </div>
                    <button
                        class="gallery-modal-next"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            show_next();
                        }
                    >
                        "❯"
                    </button>
                </div>
            </Show>
        </div>
    }
}
