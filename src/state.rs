#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    /// Value written to the overlay's `style.display`.
    pub fn css_display(self) -> &'static str {
        match self {
            Visibility::Shown => "block",
            Visibility::Hidden => "none",
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Overlay model: one visibility flag plus the image and caption slots.
/// Opening overwrites both slots; closing only hides them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LightboxState {
    pub visibility: Visibility,
    pub image_src: Option<String>,
    pub caption: Option<String>,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, src: impl Into<String>, caption: impl Into<String>) {
        self.visibility = Visibility::Shown;
        self.image_src = Some(src.into());
        self.caption = Some(caption.into());
    }

    pub fn close(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_shown()
    }

    pub fn image_src_or_empty(&self) -> &str {
        self.image_src.as_deref().unwrap_or("")
    }

    pub fn caption_or_empty(&self) -> &str {
        self.caption.as_deref().unwrap_or("")
    }
}
