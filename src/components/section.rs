use dioxus::prelude::*;

/// Page section with a scroll anchor and the shared padding container
#[component]
pub fn SectionWrapper(
    id: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = match class.as_deref() {
        Some(extra) => format!("section {}", extra),
        None => "section".to_string(),
    };

    rsx! {
        section { id: "{id}", class: "{class}",
            div { class: "container", {children} }
        }
    }
}
