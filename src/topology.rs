//! Sample topology the node details page browses.

use crate::components::relatives_link::RelativeReference;

/// Relatives of one node that live in the same topology.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelativeGroup {
	/// Heading shown above the group, e.g. "Containers".
	pub title: &'static str,
	/// Links rendered under the heading.
	pub relatives: Vec<RelativeReference>,
}

/// A node as shown in the details panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSummary {
	/// Topology the node belongs to.
	pub topology_id: &'static str,
	/// Node id within its topology.
	pub id: &'static str,
	/// Display label.
	pub label: &'static str,
	/// Related nodes in adjacent topologies.
	pub relatives: Vec<RelativeGroup>,
}

/// (topology id, node id, label)
type Entry = (&'static str, &'static str, &'static str);

fn group(title: &'static str, relatives: &[Entry]) -> RelativeGroup {
	RelativeGroup {
		title,
		relatives: relatives
			.iter()
			.map(|&(topology_id, id, label)| RelativeReference::new(id, topology_id, label))
			.collect(),
	}
}

fn nodes() -> Vec<NodeSummary> {
	let (nginx, web, db) = (
		("processes", "proc-7", "nginx: worker process"),
		("containers", "web-1", "my-container"),
		("containers", "db-1", "postgres"),
	);
	let (host_a, host_b) = (
		("hosts", "host-1", "ip-10-0-0-12"),
		("hosts", "host-2", "ip-10-0-0-13"),
	);
	let node = |(topology_id, id, label): Entry, relatives| NodeSummary {
		topology_id,
		id,
		label,
		relatives,
	};

	vec![
		node(
			nginx,
			vec![group("Containers", &[web]), group("Hosts", &[host_a])],
		),
		node(
			web,
			vec![group("Hosts", &[host_a]), group("Processes", &[nginx])],
		),
		node(db, vec![group("Hosts", &[host_b])]),
		node(host_a, vec![group("Containers", &[web])]),
		node(host_b, vec![group("Containers", &[db])]),
	]
}

/// Node shown at `/`.
pub const DEFAULT_NODE: (&str, &str) = ("processes", "proc-7");

/// Find a node by topology and id.
pub fn find_node(topology_id: &str, id: &str) -> Option<NodeSummary> {
	nodes()
		.into_iter()
		.find(|n| n.topology_id == topology_id && n.id == id)
}

/// Route path of a node's details page.
pub fn node_path(topology_id: &str, id: &str) -> String {
	format!("/{topology_id}/{id}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_node_exists() {
		let (topology_id, id) = DEFAULT_NODE;
		let node = find_node(topology_id, id).unwrap();
		assert_eq!(node.label, "nginx: worker process");
	}

	#[test]
	fn unknown_node_is_none() {
		assert!(find_node("hosts", "proc-7").is_none());
		assert!(find_node("", "").is_none());
	}

	#[test]
	fn every_relative_resolves() {
		for node in nodes() {
			for r in node.relatives.iter().flat_map(|g| &g.relatives) {
				let found = find_node(&r.topology_id, &r.id).unwrap();
				assert_eq!(found.label, r.label);
			}
		}
	}

	#[test]
	fn path_joins_topology_and_id() {
		assert_eq!(node_path("containers", "web-1"), "/containers/web-1");
	}
}
