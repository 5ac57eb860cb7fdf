// src/gfx/mod.rs

//! Codecs for the two classic paletted graphic formats: raw flats and
//! column-post pictures (patches). Both store palette indices only;
//! palette lookup and pixel-buffer conversion live outside this crate.

pub mod flat;
pub mod picture;

pub use flat::Flat;
pub use picture::{Picture, Post};
