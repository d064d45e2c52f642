//! Node details panel whose relatives link into adjacent topologies.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use log::{Level, info};

pub mod components;
mod pages;
pub mod topology;

use crate::pages::node_details::NodeDetails;
use crate::pages::not_found::NotFound;
use crate::topology::{DEFAULT_NODE, node_path};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Routes `/:topology_id/:node_id` to that node's details; `/` opens the default node.
#[component]
pub fn App() -> impl IntoView {
	// per-node <Title>
	provide_meta_context();
	let (topology_id, id) = DEFAULT_NODE;
	let home = node_path(topology_id, id);

	view! {
		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=move || view! { <Redirect path=home.clone() /> } />
				<Route path=path!("/:topology_id/:node_id") view=NodeDetails />
			</Routes>
		</Router>
	}
}
