//! Program images: reading raw firmware blobs into instruction words.

mod error;
mod image;
pub mod literal;

pub use error::{Error, Result};
pub use image::read_words;
