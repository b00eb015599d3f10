/*! This library implements the command-recording core of a Vulkan-style
 *  rendering stack: building validated, immutable command buffers out of
 *  individually recorded commands, without touching the GPU itself.
 *
 *  Recording happens through a [`CommandBufferBuilder`], which enforces the
 *  primary/secondary and inside/outside-render-pass legality rules at every
 *  step and finally bakes an immutable [`CommandBuffer`] that an external
 *  device layer can submit.
 */

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_qualifications
)]

pub mod command;
mod dynamic_state;
pub mod id;
pub mod resource;

pub use command::{
    ClearValue, ClearValues, Color, Command, CommandBuffer, CommandBufferBuilder,
    CommandBufferDescriptor, CommandBufferKind, PassContents, Rect, RecordError,
    RenderPassDescriptor,
};
pub use dynamic_state::{DynamicState, Viewport};
pub use resource::ResourceUses;

use std::borrow::Cow;

/// Maximum number of color attachments a framebuffer may carry.
pub const MAX_COLOR_ATTACHMENTS: usize = 8;

type Index = u32;
type Epoch = u32;

/// Integral type used for buffer offsets and sizes.
pub type BufferAddress = u64;

pub type Label<'a> = Option<Cow<'a, str>>;

/// Format of the entries of an index buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub enum IndexFormat {
    Uint16,
    Uint32,
}
