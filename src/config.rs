use crate::error::Result;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OVERLAY_ID: &str = "galleryModal";
pub const DEFAULT_IMAGE_SLOT_ID: &str = "modalImage";
pub const DEFAULT_CAPTION_SLOT_ID: &str = "caption";
pub const DEFAULT_CLOSE_CLASS: &str = "close";

/// Id of the `<script type="application/json">` element holding the manifest.
pub const MANIFEST_ELEMENT_ID: &str = "gallery-manifest";

/// Element ids and the close marker class the lightbox binds to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LightboxConfig {
    pub overlay_id: String,
    pub image_slot_id: String,
    pub caption_slot_id: String,
    pub close_class: String,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            overlay_id: DEFAULT_OVERLAY_ID.to_string(),
            image_slot_id: DEFAULT_IMAGE_SLOT_ID.to_string(),
            caption_slot_id: DEFAULT_CAPTION_SLOT_ID.to_string(),
            close_class: DEFAULT_CLOSE_CLASS.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct GalleryManifest {
    pub lightbox: LightboxConfig,
    pub images: Vec<GalleryImage>,
}

pub fn parse_manifest(json: &str) -> Result<GalleryManifest> {
    Ok(serde_json::from_str(json)?)
}

/// Read the manifest embedded in the host page. A missing element or a
/// malformed body falls back to the default manifest.
pub fn load_manifest() -> GalleryManifest {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(MANIFEST_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text else {
        log::debug!("no #{} element, using default manifest", MANIFEST_ELEMENT_ID);
        return GalleryManifest::default();
    };

    match parse_manifest(&text) {
        Ok(manifest) => {
            log::info!("loaded manifest with {} images", manifest.images.len());
            manifest
        }
        Err(e) => {
            log::warn!("ignoring #{}: {}", MANIFEST_ELEMENT_ID, e);
            GalleryManifest::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LightboxError;

    mod config_tests {
        use super::*;

        #[test]
        fn default_uses_page_ids() {
            let config = LightboxConfig::default();
            assert_eq!(config.overlay_id, "galleryModal");
            assert_eq!(config.image_slot_id, "modalImage");
            assert_eq!(config.caption_slot_id, "caption");
            assert_eq!(config.close_class, "close");
        }

        #[test]
        fn empty_object_is_default() {
            let config: LightboxConfig = serde_json::from_str("{}").unwrap();
            assert_eq!(config, LightboxConfig::default());
        }

        #[test]
        fn partial_config_overrides_named_fields_only() {
            let config: LightboxConfig =
                serde_json::from_str(r#"{"overlayId": "lightbox", "closeClass": "dismiss"}"#).unwrap();
            assert_eq!(config.overlay_id, "lightbox");
            assert_eq!(config.close_class, "dismiss");
            assert_eq!(config.image_slot_id, "modalImage");
            assert_eq!(config.caption_slot_id, "caption");
        }
    }

    mod manifest_tests {
        use super::*;

        #[test]
        fn parses_images() {
            let json = r#"{
                "images": [
                    {"src": "/img/cat.jpg", "alt": "A cat"},
                    {"src": "/img/dog.jpg"}
                ]
            }"#;
            let manifest = parse_manifest(json).unwrap();

            assert_eq!(manifest.lightbox, LightboxConfig::default());
            assert_eq!(manifest.images.len(), 2);
            assert_eq!(manifest.images[0].src, "/img/cat.jpg");
            assert_eq!(manifest.images[0].alt, "A cat");
            assert_eq!(manifest.images[1].alt, "");
        }

        #[test]
        fn parses_nested_lightbox_config() {
            let json = r#"{"lightbox": {"captionSlotId": "lb-caption"}, "images": []}"#;
            let manifest = parse_manifest(json).unwrap();
            assert_eq!(manifest.lightbox.caption_slot_id, "lb-caption");
            assert!(manifest.images.is_empty());
        }

        #[test]
        fn empty_object_is_default() {
            assert_eq!(parse_manifest("{}").unwrap(), GalleryManifest::default());
        }

        #[test]
        fn invalid_json_is_config_error() {
            let result = parse_manifest("{ not json");
            assert!(matches!(result, Err(LightboxError::Config(_))));
        }

        #[test]
        fn image_without_src_is_rejected() {
            let result = parse_manifest(r#"{"images": [{"alt": "no src"}]}"#);
            assert!(matches!(result, Err(LightboxError::Config(_))));
        }
    }
}
