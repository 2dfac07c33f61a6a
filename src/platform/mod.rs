//! Platform abstraction layer
//!
//! Storage backends for each target:
//! - native: one JSON file per key in a data directory
//! - web: LocalStorage, plus the wasm-bindgen surface for the page

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStore;
