use leptos::prelude::*;
use crate::app::LightboxCtx;

#[component]
pub fn Lightbox() -> impl IntoView {
    let ctx = expect_context::<LightboxCtx>();
    let config = ctx.config.get_value();

    view! {
        <div
            id=config.overlay_id
            style=move || format!(
                "display: {}; position: fixed; inset: 0; background: rgba(0,0,0,0.9); \
                 z-index: 1000; padding-top: 60px; text-align: center;",
                ctx.state.with(|s| s.visibility.css_display())
            )
        >
            <span
                class=config.close_class
                style="position: absolute; top: 15px; right: 35px; color: #66cc88; \
                       font-size: 40px; font-weight: bold; cursor: pointer;"
                on:click=move |_| ctx.close()
            >
                "×"
            </span>
            <img
                id=config.image_slot_id
                src=move || ctx.state.with(|s| s.image_src.clone())
                style="max-width: 90vw; max-height: 80vh; object-fit: contain; \
                       border: 1px solid #44dd66; box-shadow: 0 0 30px rgba(68, 221, 102, 0.3);"
            />
            <div
                id=config.caption_slot_id
                style="margin: 12px auto; max-width: 700px; color: #ccffdd; font-size: 14px;"
            >
                {move || ctx.state.with(|s| s.caption_or_empty().to_string())}
            </div>
        </div>
    }
}
