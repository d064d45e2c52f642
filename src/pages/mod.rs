pub mod node_details;
pub mod not_found;
