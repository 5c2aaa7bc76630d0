//! Page sections, top to bottom.

mod about;
mod contact;
mod education;
mod experience;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;
