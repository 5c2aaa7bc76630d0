//! Page components for the portfolio site.

mod home;

pub use home::Home;
