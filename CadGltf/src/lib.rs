//! # CadGltf
//!
//! Embedded glTF 2.0 export in pure Rust.
//!
//! ## Overview
//!
//! - **Document model** - typed records mirroring the glTF 2.0 schema
//! - **Builder** - packs index and vertex arrays into one little-endian buffer
//! - **Data URIs** - buffers are embedded as base64, no `.bin` sidecar
//! - **Validation** - every cross-reference and byte range is checked
//! - **JSON output** - absent optional fields are omitted at every depth
//!
//! ## Quick Start
//!
//! ```
//! let json = cadgltf::export_to_gltf::<()>(&[]);
//! assert!(json.starts_with(r#"{"asset":{"version":"2.0"}"#));
//! ```
//!
//! ### Building a Document
//!
//! ```
//! use cadgltf::prelude::*;
//!
//! let mut builder = GltfBuilder::new();
//! let indices = builder.add_indices(&[0, 1, 2]);
//! let positions = builder.add_positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
//! let mesh = builder.add_mesh(GltfMesh {
//!     primitives: vec![GltfPrimitive::triangles(positions, Some(indices))],
//!     name: Some("Triangle".to_string()),
//! });
//! builder.add_node(GltfNode::new(mesh));
//!
//! let doc = builder.build_document();
//! doc.validate()?;
//! let json = doc.to_json_pretty()?;
//! # Ok::<(), cadgltf::Error>(())
//! ```

pub mod error;
pub mod export;
pub mod gltf;

// Re-exports for convenience
pub use error::{Error, Result};
pub use export::export_to_gltf;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::export::{export_to_gltf, triangle_document};
    pub use crate::gltf::buffer::{DATA_URI_HEADER, decode_data_uri, encode_data_uri};
    pub use crate::gltf::{
        AccessorBounds, AccessorType, BufferTarget, ComponentType, GltfAccessor, GltfAsset, GltfAttributes,
        GltfBuffer, GltfBufferView, GltfBuilder, GltfDocument, GltfMesh, GltfNode, GltfPrimitive,
        GltfScene, Mode,
    };
}
