//! Route tables.

mod common;
mod gizmo;

pub use common::common_routes;
pub use gizmo::gizmo_routes;
