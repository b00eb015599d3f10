//! Render pass recording.
//!
//! A render pass is a scoped stretch of the command stream with a fixed
//! framebuffer. Its contents are supplied in exactly one of two ways, chosen
//! at [`begin_render_pass`](CommandBufferBuilder::begin_render_pass) time:
//! recorded inline, or delegated entirely to prerecorded secondary graphics
//! buffers via [`execute_commands`](CommandBufferBuilder::execute_commands).
//! Delegation lets the expensive draw recording happen once (or on other
//! threads) while the primary buffer stays cheap to rebuild per frame.

use crate::{
    command::{Command, CommandBuffer, CommandBufferBuilder, RecordError},
    id::FramebufferId,
    MAX_COLOR_ATTACHMENTS,
};
use arrayvec::ArrayVec;
use std::sync::Arc;

/// How the contents of a render pass (or subpass) are supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub enum PassContents {
    /// Draw commands are recorded directly on the primary builder.
    Inline,
    /// Contents come exclusively from executed secondary graphics buffers.
    SecondaryBuffers,
}

/// RGBA double precision color, used for clears.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
    pub const BLACK: Self = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
}

/// Clear value for one attachment, in framebuffer attachment order.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub enum ClearValue {
    /// The attachment is loaded, not cleared.
    None,
    Color(Color),
    Depth(f32),
    Stencil(u32),
    DepthStencil { depth: f32, stencil: u32 },
}

/// One clear value per attachment; bounded by the color attachment limit
/// plus a depth-stencil attachment.
pub type ClearValues = ArrayVec<ClearValue, { MAX_COLOR_ATTACHMENTS + 1 }>;

/// Describes the render pass to begin.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub struct RenderPassDescriptor {
    /// The framebuffer the pass renders into. Referenced, not owned.
    pub framebuffer: FramebufferId,
    pub contents: PassContents,
    pub clear_values: ClearValues,
}

impl CommandBufferBuilder {
    /// Begin a render pass on a primary builder.
    ///
    /// The pass is locked to `desc.contents` for its whole duration; every
    /// [`next_subpass`](Self::next_subpass) must restate the same mode.
    pub fn begin_render_pass(&mut self, desc: &RenderPassDescriptor) -> Result<(), RecordError> {
        profiling::scope!("CommandBufferBuilder::begin_render_pass");
        log::trace!(
            "begin_render_pass {:?} contents {:?}",
            desc.framebuffer,
            desc.contents
        );
        self.push_command(Command::BeginRenderPass {
            framebuffer: desc.framebuffer,
            contents: desc.contents,
            clear_values: desc.clear_values.clone(),
        })
    }

    /// Advance to the next subpass, keeping the mode the pass was begun with.
    pub fn next_subpass(&mut self, contents: PassContents) -> Result<(), RecordError> {
        self.push_command(Command::NextSubpass(contents))
    }

    pub fn end_render_pass(&mut self) -> Result<(), RecordError> {
        log::trace!("end_render_pass");
        self.push_command(Command::EndRenderPass)
    }

    /// Execute prerecorded secondary graphics buffers as the contents of the
    /// current secondary-mode subpass.
    ///
    /// The secondaries' referenced resources are folded into this builder's
    /// resource set, so submitting the finished primary keeps them alive.
    pub fn execute_commands(&mut self, buffers: &[Arc<CommandBuffer>]) -> Result<(), RecordError> {
        self.push_command(Command::ExecuteCommands(buffers.iter().cloned().collect()))
    }
}
