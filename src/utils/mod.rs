// src/utils/mod.rs

pub mod bits;
pub mod name;
pub mod range;
