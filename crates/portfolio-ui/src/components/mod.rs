//! Reusable UI components
//!
//! Buttons, chips, headers, the typing effect and toasts.

mod button;
mod section_header;
mod tech_chip;
mod toast;
mod typing_text;

pub use button::*;
pub use section_header::*;
pub use tech_chip::*;
pub use toast::*;
pub use typing_text::*;
