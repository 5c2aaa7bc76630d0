//! Global theme for the portfolio site.

mod styles;

pub use styles::GLOBAL_STYLES;
