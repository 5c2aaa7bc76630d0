//! Home page - the whole site on one scrolling page.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::Navbar;
use crate::context::use_portfolio;
use crate::sections::{About, Contact, Education, Experience, Hero, Projects, Skills};

/// Home page component.
///
/// Section order matches the navigation anchors; skills and education sit
/// between them without nav entries.
#[component]
pub fn Home() -> Element {
    let portfolio = use_portfolio();
    let name = portfolio.personal.name.clone();
    let year = chrono::Local::now().year();

    rsx! {
        Navbar { name: name.clone() }

        main { class: "page",
            Hero {}
            About {}
            Projects {}
            Skills {}
            Experience {}
            Education {}
            Contact {}
        }

        footer { class: "site-footer",
            div { class: "container",
                p { "\u{00A9} {year} {name}" }
            }
        }
    }
}
