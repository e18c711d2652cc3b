//! Structural checks for assembled documents.
//!
//! A document that fails any of these checks cannot be consumed correctly:
//! a dangling index or a view reaching past its buffer.

use crate::error::{Error, Result};

use super::buffer::decode_data_uri;
use super::types::{GltfDocument, GltfPrimitive};

fn check_index(kind: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::IndexOutOfBounds { kind, index, len })
    }
}

/// An `end` of `None` overflowed `usize` and is reported as `usize::MAX`.
fn check_range(kind: &'static str, index: usize, end: Option<usize>, available: usize) -> Result<()> {
    match end {
        Some(end) if end <= available => Ok(()),
        end => Err(Error::ByteRangeOutOfBounds {
            kind,
            index,
            end: end.unwrap_or(usize::MAX),
            available,
        }),
    }
}

impl GltfDocument {
    /// Check every cross-reference and byte range in the document.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        self.validate_scene_graph()?;
        self.validate_meshes()?;
        self.validate_buffers()
    }

    fn validate_scene_graph(&self) -> Result<()> {
        check_index("scene", self.scene, self.scenes.len())?;

        for scene in &self.scenes {
            for &node in &scene.nodes {
                check_index("node", node, self.nodes.len())?;
            }
        }

        for node in &self.nodes {
            check_index("mesh", node.mesh, self.meshes.len())?;
            for &child in node.children.iter().flatten() {
                check_index("node", child, self.nodes.len())?;
            }
        }

        Ok(())
    }

    fn validate_meshes(&self) -> Result<()> {
        self.meshes
            .iter()
            .flat_map(|mesh| &mesh.primitives)
            .flat_map(GltfPrimitive::accessor_refs)
            .try_for_each(|acc| check_index("accessor", acc, self.accessors.len()))
    }

    fn validate_buffers(&self) -> Result<()> {
        for (i, buffer) in self.buffers.iter().enumerate() {
            let actual = decode_data_uri(&buffer.uri)?.len();
            if actual != buffer.byte_length {
                return Err(Error::BufferLengthMismatch {
                    index: i,
                    declared: buffer.byte_length,
                    actual,
                });
            }
        }

        for (i, view) in self.buffer_views.iter().enumerate() {
            check_index("buffer", view.buffer, self.buffers.len())?;
            check_range("bufferView", i, view.end(), self.buffers[view.buffer].byte_length)?;
        }

        for (i, accessor) in self.accessors.iter().enumerate() {
            check_index("bufferView", accessor.buffer_view, self.buffer_views.len())?;
            let view = &self.buffer_views[accessor.buffer_view];

            let stride = view.byte_stride.unwrap_or_else(|| accessor.element_size());
            let end = match accessor.count {
                0 => Some(accessor.byte_offset),
                n => stride
                    .checked_mul(n - 1)
                    .and_then(|span| span.checked_add(accessor.element_size()))
                    .and_then(|span| span.checked_add(accessor.byte_offset)),
            };
            check_range("accessor", i, end, view.byte_length)?;
        }

        Ok(())
    }
}
