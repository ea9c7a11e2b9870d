// Tue Jan 20 2026 - Alex

pub mod logging;

pub use logging::{init_from_env, level_from_str, scoped_timer, ScopedTimer};
