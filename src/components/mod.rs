mod gallery;
mod lightbox;

pub use gallery::Gallery;
pub use lightbox::Lightbox;
