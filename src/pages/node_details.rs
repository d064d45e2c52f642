use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use log::info;

use super::not_found::NotFound;
use crate::components::relatives_link::{NavigationIntent, RelativeLink};
use crate::topology::{NodeSummary, RelativeGroup, find_node, node_path};

#[component]
fn NodeDetailsRelatives(
	group: RelativeGroup,
	#[prop(into)] on_navigate: Callback<NavigationIntent>,
) -> impl IntoView {
	view! {
		<div class="node-details-relatives">
			<span class="node-details-relatives-title">{group.title}</span>
			{group
				.relatives
				.into_iter()
				.map(|r| {
					view! {
						<RelativeLink
							id=r.id
							topology_id=r.topology_id
							label=r.label
							on_navigate=on_navigate
						/>
					}
				})
				.collect_view()}
		</div>
	}
}

/// Popover anchored just below the link that emitted `intent`.
#[component]
fn RelativePopover(intent: NavigationIntent, on_close: Callback<()>) -> impl IntoView {
	// getBoundingClientRect is viewport-relative
	let style = format!(
		"position: fixed; top: {}px; left: {}px;",
		intent.rect.bottom(),
		intent.rect.left
	);
	let href = node_path(&intent.topology_id, &intent.id);

	view! {
		<div class="relative-popover" style=style>
			<h2>{intent.label}</h2>
			<p>{format!("{} in {}", intent.id, intent.topology_id)}</p>
			<A href=href>"Open"</A>
			<button on:click=move |_| on_close.run(())>"Close"</button>
		</div>
	}
}

fn details(node: NodeSummary, on_navigate: Callback<NavigationIntent>) -> impl IntoView {
	view! {
		<Title text=format!("{} ({})", node.label, node.topology_id) />
		<div class="node-details">
			<h1>{node.label}</h1>
			<span class="node-details-topology">{node.topology_id}</span>
			{node
				.relatives
				.into_iter()
				.map(|group| view! { <NodeDetailsRelatives group=group on_navigate=on_navigate /> })
				.collect_view()}
		</div>
	}
}

/// Details page of the node at `/:topology_id/:node_id`.
#[component]
pub fn NodeDetails() -> impl IntoView {
	let params = use_params_map();
	let node = Memo::new(move |_| {
		let params = params.read();
		let (topology_id, id) = (params.get("topology_id"), params.get("node_id"));
		find_node(&topology_id.unwrap_or_default(), &id.unwrap_or_default())
	});

	// Last clicked relative; anchors the popover
	let (selected, set_selected) = signal(None::<NavigationIntent>);
	let on_navigate = Callback::new(move |intent: NavigationIntent| {
		info!("open {} in {}", intent.id, intent.topology_id);
		set_selected.set(Some(intent));
	});
	let on_close = Callback::new(move |()| set_selected.set(None));

	// A new node drops the popover of the previous one
	Effect::new(move |_| {
		node.track();
		set_selected.set(None);
	});

	view! {
		{move || match node.get() {
			Some(node) => details(node, on_navigate).into_any(),
			None => view! { <NotFound /> }.into_any(),
		}}
		{move || {
			selected
				.get()
				.map(|intent| view! { <RelativePopover intent=intent on_close=on_close /> })
		}}
	}
}
