// 10.0: recalculation engine. owns the immutable season, borrows the caller's overrides,
// and reruns the whole pipeline on every call. no incremental updates.

mod config;
mod core;
mod results;

pub use config::EngineConfig;
pub use core::Engine;
pub use results::{EngineError, Recalculation};
