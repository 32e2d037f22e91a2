// src/formats/mod.rs

pub mod bin;
pub mod iso;
