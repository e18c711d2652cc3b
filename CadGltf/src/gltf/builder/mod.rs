//! glTF 2.0 document builder.
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

pub(crate) mod export;
mod scene;
mod vertex_attributes;

use super::types::{GltfAccessor, GltfBufferView, GltfMesh, GltfNode, GltfScene};

/// Byte boundary vertex attribute data starts on.
pub(crate) const VERTEX_ALIGNMENT: usize = 8;

/// Builder for constructing glTF documents.
///
/// Every attribute and index array is appended to a single binary buffer
/// (buffer 0), which [`GltfBuilder::build_document`] embeds as a data URI.
#[derive(Debug)]
pub struct GltfBuilder {
    pub(crate) buffer: Vec<u8>,
    pub(crate) buffer_views: Vec<GltfBufferView>,
    pub(crate) accessors: Vec<GltfAccessor>,
    pub(crate) meshes: Vec<GltfMesh>,
    pub(crate) nodes: Vec<GltfNode>,
    pub(crate) scenes: Vec<GltfScene>,
}

impl GltfBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            buffer_views: Vec::new(),
            accessors: Vec::new(),
            meshes: Vec::new(),
            nodes: Vec::new(),
            scenes: Vec::new(),
        }
    }

    /// Bytes packed so far.
    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub(crate) fn align(&mut self, alignment: usize) {
        let padding = (alignment - (self.buffer.len() % alignment)) % alignment;
        self.buffer.extend(std::iter::repeat_n(0u8, padding));
    }
}

impl Default for GltfBuilder {
    fn default() -> Self {
        Self::new()
    }
}
