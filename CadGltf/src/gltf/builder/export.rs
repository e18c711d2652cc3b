//! Export methods for `GltfBuilder`

use super::super::buffer::encode_data_uri;
use super::super::types::{GltfAsset, GltfBuffer, GltfDocument, GltfScene};
use super::GltfBuilder;

/// glTF version written to `asset.version`.
pub const GLTF_VERSION: &str = "2.0";

impl GltfBuilder {
    /// Consume the builder and assemble the document.
    ///
    /// The packed bytes become buffer 0 as an embedded data URI. If no scene
    /// was added, scene 0 lists every root node.
    #[must_use]
    pub fn build_document(self) -> GltfDocument {
        let scenes = if self.scenes.is_empty() {
            vec![GltfScene {
                nodes: self.root_nodes(),
            }]
        } else {
            self.scenes
        };

        tracing::debug!(
            "Building glTF document: {} nodes, {} meshes, {} accessors, {} buffer bytes",
            self.nodes.len(),
            self.meshes.len(),
            self.accessors.len(),
            self.buffer.len()
        );

        GltfDocument {
            asset: GltfAsset {
                version: GLTF_VERSION.to_string(),
            },
            scene: 0,
            scenes,
            nodes: self.nodes,
            meshes: self.meshes,
            buffers: vec![GltfBuffer {
                byte_length: self.buffer.len(),
                uri: encode_data_uri(&self.buffer),
            }],
            buffer_views: self.buffer_views,
            accessors: self.accessors,
        }
    }
}
