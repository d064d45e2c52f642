//! The relatives link component and the click-to-intent logic behind it.

mod activation;
mod component;
mod types;

pub use activation::{Activation, Measure, activate};
pub use component::RelativeLink;
pub use types::{BoundingRect, NavigationIntent, RelativeReference};
