//! # meshprim
//!
//! Compact triangle-mesh primitives kernel with nalgebra integration.
//!
//! ## Features
//!
//! - **Primitives generation**: icosphere, cube, cylinder, cone
//! - **Compact mesh data**: indexed triangles, optional per-vertex normals
//! - **nalgebra integration**: plain `f32` triples in storage,
//!   `Vector3<f32>` throughout the API
//!
//! ## Example
//!
//! ```rust
//! use meshprim::primitives;
//!
//! // Solid icosphere at subdivision level 2
//! let sphere = primitives::icosphere_solid(2)?;
//! assert_eq!(sphere.triangle_count(), 320);
//! # Ok::<(), meshprim::Error>(())
//! ```

pub mod error;
pub mod log;
pub mod mesh;
pub mod primitives;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use log::Log;
pub use mesh::Mesh;
pub use types::{BBox3, Triangle, Vector3f};
