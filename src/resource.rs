//! Tracking of the external resources a command stream references.
//!
//! The builder records every handle a command mentions, deduplicated but in
//! first-use order, so that a finished buffer can hand the submission layer
//! the exact set of resources it has to keep alive.

use crate::id::{BufferId, ComputePipelineId, DescriptorSetId, FramebufferId, GraphicsPipelineId};
use fxhash::FxHashSet;

/// The set of external resources referenced by a command buffer, in
/// first-use order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub struct ResourceUses {
    pub buffers: Vec<BufferId>,
    pub framebuffers: Vec<FramebufferId>,
    pub graphics_pipelines: Vec<GraphicsPipelineId>,
    pub compute_pipelines: Vec<ComputePipelineId>,
    pub descriptor_sets: Vec<DescriptorSetId>,
}

impl ResourceUses {
    pub fn is_empty(&self) -> bool {
        self.handle_count() == 0
    }

    /// Total number of distinct handles across all resource types.
    pub fn handle_count(&self) -> usize {
        self.buffers.len()
            + self.framebuffers.len()
            + self.graphics_pipelines.len()
            + self.compute_pipelines.len()
            + self.descriptor_sets.len()
    }
}

/// Builder-side collector. The hash sets answer "seen before?", the
/// `ResourceUses` keeps the stable ordering.
#[derive(Debug, Default)]
pub(crate) struct UsageScope {
    uses: ResourceUses,
    buffers: FxHashSet<BufferId>,
    framebuffers: FxHashSet<FramebufferId>,
    graphics_pipelines: FxHashSet<GraphicsPipelineId>,
    compute_pipelines: FxHashSet<ComputePipelineId>,
    descriptor_sets: FxHashSet<DescriptorSetId>,
}

impl UsageScope {
    pub(crate) fn use_buffer(&mut self, id: BufferId) {
        if self.buffers.insert(id) {
            self.uses.buffers.push(id);
        }
    }

    pub(crate) fn use_framebuffer(&mut self, id: FramebufferId) {
        if self.framebuffers.insert(id) {
            self.uses.framebuffers.push(id);
        }
    }

    pub(crate) fn use_graphics_pipeline(&mut self, id: GraphicsPipelineId) {
        if self.graphics_pipelines.insert(id) {
            self.uses.graphics_pipelines.push(id);
        }
    }

    pub(crate) fn use_compute_pipeline(&mut self, id: ComputePipelineId) {
        if self.compute_pipelines.insert(id) {
            self.uses.compute_pipelines.push(id);
        }
    }

    pub(crate) fn use_descriptor_set(&mut self, id: DescriptorSetId) {
        if self.descriptor_sets.insert(id) {
            self.uses.descriptor_sets.push(id);
        }
    }

    /// Fold another buffer's resource set into this one. Used when a primary
    /// buffer executes secondary buffers: the primary's submission must keep
    /// the secondaries' resources alive too.
    pub(crate) fn merge(&mut self, other: &ResourceUses) {
        for &id in &other.buffers {
            self.use_buffer(id);
        }
        for &id in &other.framebuffers {
            self.use_framebuffer(id);
        }
        for &id in &other.graphics_pipelines {
            self.use_graphics_pipeline(id);
        }
        for &id in &other.compute_pipelines {
            self.use_compute_pipeline(id);
        }
        for &id in &other.descriptor_sets {
            self.use_descriptor_set(id);
        }
    }

    pub(crate) fn finish(self) -> ResourceUses {
        self.uses
    }
}
