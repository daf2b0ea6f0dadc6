//! Interaction logic behind the portfolio page, free of any browser API.
//!
//! The wasm frontend owns the DOM wiring; everything here runs on the host
//! too, which is where the tests exercise it.

pub mod config;
pub mod constants;
pub mod field;
pub mod konami;
pub mod nav;
pub mod paint;
pub mod reveal;
pub mod theme;
pub mod typewriter;

pub use config::*;
pub use field::*;
pub use konami::*;
pub use paint::*;
pub use theme::*;
pub use typewriter::*;
