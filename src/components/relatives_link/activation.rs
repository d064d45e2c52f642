use log::debug;
use web_sys::{Element, Event};

use super::types::{BoundingRect, NavigationIntent, RelativeReference};

/// Something rendered whose current on-screen rectangle can be queried.
pub trait Measure {
	/// Rectangle at this moment, relative to the viewport.
	fn bounding_rect(&self) -> BoundingRect;
}

impl Measure for Element {
	fn bounding_rect(&self) -> BoundingRect {
		self.get_bounding_client_rect().into()
	}
}

/// An input event whose default platform handling can be suppressed.
pub trait Activation {
	/// Tell the platform not to run its default handling.
	fn suppress_default(&self);
}

impl Activation for Event {
	fn suppress_default(&self) {
		self.prevent_default();
	}
}

/// Consume a click on a relative link and dispatch one [`NavigationIntent`].
///
/// The rectangle is read from `target` on every call; layout may have
/// scrolled or reflowed since the link was rendered.
pub fn activate<A, M>(
	reference: &RelativeReference,
	event: &A,
	target: &M,
	dispatch: impl FnOnce(NavigationIntent),
) where
	A: Activation + ?Sized,
	M: Measure + ?Sized,
{
	event.suppress_default();
	let rect = target.bounding_rect();
	debug!(
		"navigate to {} in {} from ({}, {})",
		reference.id, reference.topology_id, rect.left, rect.top
	);
	dispatch(reference.intent(rect));
}
