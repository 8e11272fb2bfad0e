//! Layered Merkle tree with sorted-pair hashing and odd-node promotion.
#![allow(
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    reason = "Layer layout uses index math over widths computed up front; bounds hold by construction"
)]

use mdrop_core::base::Digest;

use crate::error::MerkleTreeError;
use crate::hasher::MerkleHasher;

/// Widths and arena offsets of every layer, plus the total node count.
///
/// Layer `k + 1` has `ceil(width(k) / 2)` nodes; the last layer has at most one.
fn layer_layout(leaf_count: usize) -> (Vec<usize>, Vec<usize>, usize) {
    let mut widths = vec![leaf_count];
    let mut offsets = vec![0_usize];
    let mut width = leaf_count;
    let mut offset = leaf_count;

    while width > 1 {
        width = width.div_ceil(2);
        widths.push(width);
        offsets.push(offset);
        offset += width;
    }

    (widths, offsets, offset)
}

/// A fully built tree.
///
/// All layers live in one arena, leaves first and the root last. Each layer is a contiguous
/// run located through `layer_offsets`/`layer_widths`, so building does not allocate after the
/// initial reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    leaf_count: usize,
    layer_widths: Vec<usize>,
    layer_offsets: Vec<usize>,
    nodes: Vec<Digest>,
}

impl MerkleTree {
    /// Build the tree over `leaves`, in order.
    #[must_use]
    pub fn build<H: MerkleHasher + ?Sized>(hasher: &H, leaves: Vec<Digest>) -> Self {
        Self::build_with_progress(hasher, leaves, |_, _| {})
    }

    /// Build the tree, calling `on_progress(done, total)` after every pair hash.
    ///
    /// With zero leaves the tree has a single empty layer and [`MerkleTree::root`] is
    /// [`Digest::ZERO`].
    #[must_use]
    pub fn build_with_progress<H, F>(hasher: &H, leaves: Vec<Digest>, mut on_progress: F) -> Self
    where
        H: MerkleHasher + ?Sized,
        F: FnMut(usize, usize),
    {
        let leaf_count = leaves.len();
        let (layer_widths, layer_offsets, total_nodes) = layer_layout(leaf_count);
        let total_pairs: usize = layer_widths.iter().map(|width| width / 2).sum();

        let mut nodes = leaves;
        nodes.reserve_exact(total_nodes - leaf_count);

        let mut pairs_done = 0_usize;
        for layer in 1..layer_widths.len() {
            let offset = layer_offsets[layer - 1];
            let width = layer_widths[layer - 1];
            for start in (0..width).step_by(2) {
                let left = nodes[offset + start];
                let parent = if start + 1 < width {
                    let right = nodes[offset + start + 1];
                    pairs_done += 1;
                    on_progress(pairs_done, total_pairs);
                    hasher.combine(&left, &right)
                } else {
                    // Odd tail: carried up as-is, never hashed with itself.
                    left
                };
                nodes.push(parent);
            }
        }
        debug_assert_eq!(nodes.len(), total_nodes);

        Self {
            leaf_count,
            layer_widths,
            layer_offsets,
            nodes,
        }
    }

    /// The root digest, or [`Digest::ZERO`] for an empty tree.
    #[must_use]
    pub fn root(&self) -> Digest {
        self.nodes.last().copied().unwrap_or(Digest::ZERO)
    }

    /// Number of leaves.
    #[must_use]
    pub const fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of layers, leaves and root included.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layer_widths.len()
    }

    /// The digests of layer `level`, with layer 0 being the leaves.
    #[must_use]
    pub fn layer(&self, level: usize) -> Option<&[Digest]> {
        let offset = *self.layer_offsets.get(level)?;
        let width = *self.layer_widths.get(level)?;
        self.nodes.get(offset..offset + width)
    }

    /// The inclusion proof for leaf `index`: sibling digests from the leaf layer upwards.
    ///
    /// Layers where the node was promoted without a sibling contribute nothing.
    ///
    /// # Errors
    /// Returns [`MerkleTreeError::InvalidIndex`] if `index` is not a leaf of this tree.
    pub fn proof(&self, index: usize) -> Result<Vec<Digest>, MerkleTreeError> {
        if index >= self.leaf_count {
            return Err(MerkleTreeError::InvalidIndex {
                index,
                leaf_count: self.leaf_count,
            });
        }

        let levels = self.layer_count() - 1;
        let mut proof = Vec::with_capacity(levels);
        let mut current = index;
        for level in 0..levels {
            let sibling = current ^ 1;
            if sibling < self.layer_widths[level] {
                proof.push(self.node_at(level, sibling));
            }
            current /= 2;
        }
        Ok(proof)
    }

    /// Proofs for every leaf, in leaf order.
    #[must_use]
    pub fn proofs(&self) -> Vec<Vec<Digest>> {
        (0..self.leaf_count)
            .filter_map(|index| self.proof(index).ok())
            .collect()
    }

    fn node_at(&self, level: usize, index: usize) -> Digest {
        self.nodes[self.layer_offsets[level] + index]
    }
}
