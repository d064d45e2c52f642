use web_sys::DomRect;

/// A node in an adjacent topology, as shown in a node's details panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelativeReference {
	/// Id of the relative node.
	pub id: String,
	/// Topology the relative belongs to.
	pub topology_id: String,
	/// Text shown on the link.
	pub label: String,
}

impl RelativeReference {
	/// Reference to node `id` in `topology_id`, displayed as `label`.
	pub fn new(
		id: impl Into<String>,
		topology_id: impl Into<String>,
		label: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			topology_id: topology_id.into(),
			label: label.into(),
		}
	}

	/// Tooltip text for the link.
	pub fn title(&self) -> String {
		format!("View in {}: {}", self.topology_id, self.label)
	}

	/// Navigation intent for this relative anchored at `rect`.
	pub fn intent(&self, rect: BoundingRect) -> NavigationIntent {
		NavigationIntent {
			id: self.id.clone(),
			topology_id: self.topology_id.clone(),
			label: self.label.clone(),
			rect,
		}
	}
}

/// On-screen extent of a rendered element, in CSS pixels relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingRect {
	/// Distance from the viewport's top edge.
	pub top: f64,
	/// Distance from the viewport's left edge.
	pub left: f64,
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
}

impl BoundingRect {
	/// Rectangle from its top-left corner and size.
	pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
		Self {
			top,
			left,
			width,
			height,
		}
	}

	/// `left + width`
	pub fn right(&self) -> f64 {
		self.left + self.width
	}

	/// `top + height`
	pub fn bottom(&self) -> f64 {
		self.top + self.height
	}
}

impl From<DomRect> for BoundingRect {
	fn from(rect: DomRect) -> Self {
		Self::new(rect.top(), rect.left(), rect.width(), rect.height())
	}
}

/// Emitted when a relative link is clicked: which relative, in which
/// topology, and where on screen the link sat at that moment.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationIntent {
	/// Id of the selected relative.
	pub id: String,
	/// Topology of the selected relative.
	pub topology_id: String,
	/// Label of the clicked link.
	pub label: String,
	/// Link rectangle measured at click time.
	pub rect: BoundingRect,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn title_follows_template() {
		let r = RelativeReference::new("proc-42", "containers", "my-container");
		assert_eq!(r.title(), "View in containers: my-container");
	}

	#[test]
	fn title_with_empty_and_special_strings() {
		assert_eq!(RelativeReference::new("", "", "").title(), "View in : ");
		let r = RelativeReference::new("h1", "hosts", "<db & \"cache\">: 1");
		assert_eq!(r.title(), "View in hosts: <db & \"cache\">: 1");
	}

	#[test]
	fn intent_copies_reference_verbatim() {
		let r = RelativeReference::new("proc-42", "containers", "my-container");
		let rect = BoundingRect::new(10.0, 20.0, 100.0, 14.0);
		let intent = r.intent(rect);
		assert_eq!(intent.id, r.id);
		assert_eq!(intent.topology_id, r.topology_id);
		assert_eq!(intent.label, r.label);
		assert_eq!(intent.rect, rect);
	}

	#[test]
	fn rect_edges() {
		let rect = BoundingRect::new(10.0, 20.0, 100.0, 14.0);
		assert_eq!(rect.right(), 120.0);
		assert_eq!(rect.bottom(), 24.0);
	}
}
