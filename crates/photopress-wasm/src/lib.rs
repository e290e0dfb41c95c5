//! Photopress WASM - WebAssembly bindings for Photopress
//!
//! Exposes photo compression to browser code so captured photos can be
//! shrunk before they are uploaded.
//!
//! # Module Structure
//!
//! - `compress` - `compress`, `compress_with` and `estimate_size` bindings
//! - `types` - JavaScript-shaped option and result objects
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress } from '@photopress/wasm';
//!
//! await init();
//!
//! try {
//!   const { dataUri } = compress(photoDataUri, { maxWidth: 800, quality: 0.6 });
//!   await upload(dataUri);
//! } catch (err) {
//!   await upload(photoDataUri);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod types;

pub use compress::{compress, compress_with, estimate_size};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
