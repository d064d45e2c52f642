//! Reusable view components.

/// Clickable reference from a node's details to a related node.
pub mod relatives_link;
