//! glTF 2.0 types and builder.
//!
//! This module provides types and utilities for constructing embedded glTF 2.0
//! documents: typed schema records, a buffer-packing builder, data URI
//! encoding, structural validation, and pruned JSON output.

mod builder;
mod enums;
mod types;

pub mod buffer;
pub mod serialize;
pub mod validate;

// Re-export builder
pub use builder::GltfBuilder;
pub use builder::export::GLTF_VERSION;

// Re-export all types for external use
pub use enums::{AccessorType, BufferTarget, ComponentType, Mode};
pub use types::{
    AccessorBounds, GltfAccessor, GltfAsset, GltfAttributes, GltfBuffer, GltfBufferView, GltfDocument, GltfMesh,
    GltfNode, GltfPrimitive, GltfScene,
};
