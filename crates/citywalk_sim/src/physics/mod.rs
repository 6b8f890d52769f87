//! Collider construction helpers
//!
//! Rendering-free: callers hand over raw vertex/index data (the client
//! extracts it from loaded meshes), so this module stays usable from the
//! headless simulation.

pub mod colliders;

pub use colliders::{cuboid_from_bounds, trimesh_from_mesh_data};
