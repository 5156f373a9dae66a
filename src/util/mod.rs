// src/util/mod.rs
pub mod sanitize;
pub mod testing;
pub mod validate;
