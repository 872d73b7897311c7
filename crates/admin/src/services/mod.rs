//! External service clients used by the admin panel.

pub mod images;

pub use images::{ImageUploader, UploadError};
