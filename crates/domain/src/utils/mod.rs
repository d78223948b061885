//! Pure text utilities shared by the page controllers

pub mod format;
pub mod interpretation;
pub mod media;
pub mod psychomatrix;
pub mod validation;
