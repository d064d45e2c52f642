use leptos::prelude::*;

/// Shown for unknown routes and for nodes missing from the topology.
#[component]
pub fn NotFound() -> impl IntoView {
	view! { <h1>"No such node"</h1> }
}
