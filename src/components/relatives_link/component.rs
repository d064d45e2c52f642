use leptos::prelude::*;
use web_sys::{Element, Event, MouseEvent};

use super::activation::activate;
use super::types::{NavigationIntent, RelativeReference};

/// Clickable label linking a node's details to a relative in another topology.
///
/// Clicking it suppresses the browser default and hands `on_navigate` the
/// relative together with the link's bounding rectangle at click time.
#[component]
pub fn RelativeLink(
	/// Id of the relative node.
	#[prop(into)]
	id: String,
	/// Topology the relative belongs to.
	#[prop(into)]
	topology_id: String,
	/// Visible text.
	#[prop(into)]
	label: String,
	/// Receives one intent per click.
	#[prop(into)]
	on_navigate: Callback<NavigationIntent>,
) -> impl IntoView {
	let span_ref = NodeRef::<leptos::html::Span>::new();
	let reference = RelativeReference::new(id, topology_id, label);
	let (title, text) = (reference.title(), reference.label.clone());

	let on_click = move |ev: MouseEvent| {
		let span = span_ref
			.get_untracked()
			.expect("relatives link clicked while unmounted");
		let (ev, el): (&Event, &Element) = (&ev, &span);
		activate(&reference, ev, el, |intent| on_navigate.run(intent));
	};

	view! {
		<span
			node_ref=span_ref
			class="node-details-relatives-link"
			title=title
			on:click=on_click
		>
			{text}
		</span>
	}
}
