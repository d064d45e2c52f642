use leptos::prelude::*;
use node_details_relatives::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App)
}
