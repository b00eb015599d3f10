use crate::{Epoch, Index};
use std::{fmt, marker::PhantomData};

const EPOCH_SHIFT: usize = 32;

/// A typed opaque handle to a resource owned by the external device layer.
///
/// The recording layer never dereferences these; it only records and
/// deduplicates them. The index identifies a slot in the device layer's
/// storage, the epoch guards against use of a recycled slot.
#[repr(transparent)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
#[cfg_attr(any(feature = "trace", feature = "replay"), serde(bound = ""))]
pub struct Id<T>(u64, PhantomData<T>);

impl<T> Id<T> {
    pub fn index(self) -> Index {
        self.0 as Index
    }

    pub fn epoch(self) -> Epoch {
        (self.0 >> EPOCH_SHIFT) as Epoch
    }
}

impl<T> Copy for Id<T> {}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        self.unzip().fmt(formatter)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

pub trait TypedId: Copy {
    fn zip(index: Index, epoch: Epoch) -> Self;
    fn unzip(self) -> (Index, Epoch);
}

impl<T> TypedId for Id<T> {
    fn zip(index: Index, epoch: Epoch) -> Self {
        let v = index as u64 | ((epoch as u64) << EPOCH_SHIFT);
        Id(v, PhantomData)
    }

    fn unzip(self) -> (Index, Epoch) {
        (self.index(), self.epoch())
    }
}

// Marker types giving each handle alias a distinct `T`. The real resource
// structs live in the device layer.
pub enum Buffer {}
pub enum Framebuffer {}
pub enum GraphicsPipeline {}
pub enum ComputePipeline {}
pub enum DescriptorSet {}

pub type BufferId = Id<Buffer>;
pub type FramebufferId = Id<Framebuffer>;
pub type GraphicsPipelineId = Id<GraphicsPipeline>;
pub type ComputePipelineId = Id<ComputePipeline>;
pub type DescriptorSetId = Id<DescriptorSet>;

#[test]
fn test_id_zip() {
    for &(index, epoch) in &[(0, 1), (17, 1), (u32::MAX, 3), (42, u32::MAX)] {
        let id: Id<()> = Id::zip(index, epoch);
        assert_eq!(id.unzip(), (index, epoch));
    }
}
