//! Lightbox binding for server-rendered pages.
//!
//! The overlay, image slot and caption slot already exist in the markup and
//! are looked up by id on every call. Thumbnails call the exported
//! `openModal(this)`; the close control is bound once by `installLightbox`.

use crate::config::LightboxConfig;
use crate::error::{LightboxError, Result};
use crate::logger;
use crate::state::LightboxState;
use log::LevelFilter;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

#[derive(Default)]
struct PageLightbox {
    config: LightboxConfig,
    state: LightboxState,
}

thread_local! {
    static PAGE_LIGHTBOX: RefCell<PageLightbox> = RefCell::new(PageLightbox::default());
}

fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(LightboxError::NoDocument)
}

fn element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| LightboxError::missing(id))
}

fn html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement> {
    element_by_id(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| LightboxError::Dom(format!("#{} is not an HTML element", id)))
}

/// Image locator and description of a clicked element. `<img>` elements give
/// their resolved `src`; anything else gives the raw attribute. Missing
/// attributes read as empty strings.
pub fn read_source(element: &Element) -> (String, String) {
    let src = match element.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.src(),
        None => element.get_attribute("src").unwrap_or_default(),
    };
    let alt = element.get_attribute("alt").unwrap_or_default();
    (src, alt)
}

/// The overlay and its two slots, all looked up before anything is written.
struct OverlaySlots {
    overlay: HtmlElement,
    image: Element,
    caption: Element,
}

impl OverlaySlots {
    fn lookup(document: &Document, config: &LightboxConfig) -> Result<Self> {
        Ok(Self {
            overlay: html_element_by_id(document, &config.overlay_id)?,
            image: element_by_id(document, &config.image_slot_id)?,
            caption: element_by_id(document, &config.caption_slot_id)?,
        })
    }

    fn render(&self, state: &LightboxState) -> Result<()> {
        render_visibility(&self.overlay, state)?;
        self.image.set_attribute("src", state.image_src_or_empty())?;
        self.caption.set_text_content(Some(state.caption_or_empty()));
        Ok(())
    }
}

fn render_visibility(overlay: &HtmlElement, state: &LightboxState) -> Result<()> {
    overlay
        .style()
        .set_property("display", state.visibility.css_display())?;
    Ok(())
}

/// Run `transition` on a copy of the page model and hand it to `write`. The
/// copy replaces the model only once `write` succeeds, so a failed write
/// leaves `current_state()` matching the page.
fn apply<F, W>(transition: F, write: W) -> Result<()>
where
    F: FnOnce(&mut LightboxState),
    W: FnOnce(&LightboxConfig, &LightboxState) -> Result<()>,
{
    let (config, mut next) = PAGE_LIGHTBOX.with(|page| {
        let page = page.borrow();
        (page.config.clone(), page.state.clone())
    });
    transition(&mut next);
    write(&config, &next)?;
    PAGE_LIGHTBOX.with(|page| page.borrow_mut().state = next);
    Ok(())
}

pub fn open_with(src: &str, caption: &str) -> Result<()> {
    let document = document()?;
    log::debug!("open {}", src);
    apply(
        |s| s.open(src, caption),
        |config, state| OverlaySlots::lookup(&document, config)?.render(state),
    )
}

pub fn open_modal(element: &Element) -> Result<()> {
    let (src, alt) = read_source(element);
    open_with(&src, &alt)
}

pub fn close_modal() -> Result<()> {
    let document = document()?;
    log::debug!("close");
    apply(LightboxState::close, |config, state| {
        render_visibility(&html_element_by_id(&document, &config.overlay_id)?, state)
    })
}

/// Current model of the page overlay.
pub fn current_state() -> LightboxState {
    PAGE_LIGHTBOX.with(|page| page.borrow().state.clone())
}

/// Store `config` and bind the first close control currently in the document.
/// Controls added later are not bound.
pub fn install(config: LightboxConfig) -> Result<()> {
    let document = document()?;
    let close_class = config.close_class.clone();
    PAGE_LIGHTBOX.with(|page| page.borrow_mut().config = config);

    let control = document
        .get_elements_by_class_name(&close_class)
        .item(0)
        .ok_or_else(|| LightboxError::MissingCloseControl { class: close_class.clone() })?;

    let on_close = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Err(e) = close_modal() {
            log::error!("closeModal: {}", e);
        }
    });
    control.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
    // The control lives as long as the page.
    on_close.forget();

    log::info!("lightbox installed on .{}", close_class);
    Ok(())
}

#[wasm_bindgen(js_name = openModal)]
pub fn open_modal_js(element: &Element) {
    if let Err(e) = open_modal(element) {
        log::error!("openModal: {}", e);
    }
}

#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal_js() {
    if let Err(e) = close_modal() {
        log::error!("closeModal: {}", e);
    }
}

#[wasm_bindgen(js_name = installLightbox)]
pub fn install_js(config: JsValue) {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let config = if config.is_undefined() || config.is_null() {
        LightboxConfig::default()
    } else {
        match serde_wasm_bindgen::from_value::<LightboxConfig>(config) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", LightboxError::from(e));
                LightboxConfig::default()
            }
        }
    };

    match install(config) {
        Ok(()) => {}
        Err(e @ LightboxError::MissingCloseControl { .. }) => log::warn!("{}", e),
        Err(e) => log::error!("installLightbox: {}", e),
    }
}
