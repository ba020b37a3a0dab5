use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use crate::app::LightboxCtx;
use crate::config::GalleryImage;
use crate::dom::read_source;

#[component]
pub fn Gallery(images: Vec<GalleryImage>) -> impl IntoView {
    let ctx = expect_context::<LightboxCtx>();

    // Thumbnails open the lightbox with their own src/alt, read off the
    // clicked element.
    let on_thumb_click = move |ev: web_sys::MouseEvent| {
        let Some(thumb) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let (src, alt) = read_source(&thumb);
        ctx.open(src, alt);
    };

    if images.is_empty() {
        return view! {
            <div style="color: #66cc88; font-size: 12px;">"No images"</div>
        }
        .into_any();
    }

    view! {
        <div style="display: flex; flex-wrap: wrap; gap: 12px;">
            {images
                .into_iter()
                .map(|image| {
                    view! {
                        <img
                            src=image.src
                            alt=image.alt
                            style="width: 200px; height: 150px; object-fit: cover; \
                                   border: 1px solid #33aa55; cursor: pointer;"
                            on:click=on_thumb_click
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
