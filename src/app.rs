use crate::components::{Gallery, Lightbox};
use crate::config::{load_manifest, GalleryManifest, LightboxConfig};
use crate::state::LightboxState;
use leptos::prelude::*;

pub const FONT: &str = "'JetBrains Mono', 'Fira Code', Consolas, monospace";

/// Lightbox handle shared through context. The overlay owns its visibility;
/// everything else goes through `open` and `close`.
#[derive(Clone, Copy)]
pub struct LightboxCtx {
    pub state: ReadSignal<LightboxState>,
    pub set_state: WriteSignal<LightboxState>,
    pub config: StoredValue<LightboxConfig>,
}

impl LightboxCtx {
    pub fn new(config: LightboxConfig) -> Self {
        let (state, set_state) = signal(LightboxState::new());
        Self {
            state,
            set_state,
            config: StoredValue::new(config),
        }
    }

    pub fn open(&self, src: String, caption: String) {
        log::debug!("open {}", src);
        self.set_state.update(|s| s.open(src, caption));
    }

    pub fn close(&self) {
        log::debug!("close");
        self.set_state.update(LightboxState::close);
    }
}

#[component]
pub fn App() -> impl IntoView {
    let GalleryManifest { lightbox, images } = load_manifest();
    let ctx = LightboxCtx::new(lightbox);
    provide_context(ctx);

    view! {
        <div style=format!(
            "min-height: 100vh; background: #020202; color: #ccffdd; \
             font-family: {}; padding: 24px; box-sizing: border-box;",
            FONT
        )>
            <Gallery images=images />
            <Lightbox />
        </div>
    }
}
