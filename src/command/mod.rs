/*! Command recording and validation.

A [`CommandBufferBuilder`] accumulates a sequence of [`Command`]s and checks,
at every push, that the command is legal for the builder's kind and its
current render pass state. [`CommandBufferBuilder::finish`] then bakes the
sequence into an immutable [`CommandBuffer`].

## Kinds

A builder records one of three kinds of buffer:

- `Primary`: submittable directly; the only kind that may begin, advance and
  end render passes, and the only kind that may execute secondary buffers.
- `SecondaryGraphics`: draw-family commands only. Executed from inside a
  primary buffer's render pass; it never contains pass boundaries itself.
- `SecondaryCompute`: dispatch and transfer commands only; never anything
  render-pass related.

## Inline vs. secondary passes

When a primary builder begins a render pass it commits to one of two
recording strategies for that pass instance: [`PassContents::Inline`], where
draw commands are recorded directly, or [`PassContents::SecondaryBuffers`],
where the pass contents are supplied exclusively through
[`CommandBufferBuilder::execute_commands`]. The two never mix within one
pass, and every subpass advance must restate the same strategy.

## Failure behavior

Every recording error is synchronous and leaves the builder exactly as it
was: the offending command is not recorded and no state transition happens,
so the caller can keep recording after fixing the call sequence.
!*/

mod compute;
mod draw;
mod render;
mod transfer;

pub use self::draw::Rect;
pub use self::render::{ClearValue, ClearValues, Color, PassContents, RenderPassDescriptor};

use crate::{
    dynamic_state::DynamicState,
    id::{BufferId, ComputePipelineId, DescriptorSetId, FramebufferId, GraphicsPipelineId},
    resource::{ResourceUses, UsageScope},
    BufferAddress, IndexFormat, Label,
};
use smallvec::SmallVec;
use std::sync::Arc;
use thiserror::Error;

/// How a command buffer may be used once finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub enum CommandBufferKind {
    Primary,
    SecondaryGraphics,
    SecondaryCompute,
}

/// Where a primary builder currently is relative to a render pass.
/// Secondary builders stay in `None` for their whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RenderPassState {
    None,
    InsideInline { subpass: u32 },
    InsideSecondary { subpass: u32 },
}

bitflags::bitflags! {
    /// Classes of commands. Each `(kind, render pass state)` pair admits a
    /// fixed set of classes; anything outside the set is rejected.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct CommandClasses: u32 {
        /// Buffer copies and fills.
        const TRANSFER = 1 << 0;
        /// Compute pipeline binds and dispatches.
        const COMPUTE = 1 << 1;
        /// Graphics pipeline binds, vertex/index/dynamic state, draws.
        const DRAW = 1 << 2;
        /// Descriptor set binds, shared by both pipeline families.
        const BIND = 1 << 3;
        /// Execution of secondary buffers.
        const EXECUTE = 1 << 4;
        /// Render pass boundaries (begin/next/end).
        const PASS = 1 << 5;
    }
}

/// A single recorded command.
///
/// One tagged enum covers all buffer kinds; legality per kind and state is
/// checked when the command is pushed, not encoded in the type.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub enum Command {
    BindGraphicsPipeline(GraphicsPipelineId),
    BindComputePipeline(ComputePipelineId),
    BindDescriptorSet {
        index: u32,
        set: DescriptorSetId,
    },
    SetVertexBuffer {
        slot: u32,
        buffer: BufferId,
        offset: BufferAddress,
    },
    SetIndexBuffer {
        buffer: BufferId,
        format: IndexFormat,
        offset: BufferAddress,
    },
    SetDynamicState(DynamicState),
    Draw {
        vertex_count: u32,
        instance_count: u32,
        first_vertex: u32,
        first_instance: u32,
    },
    DrawIndexed {
        index_count: u32,
        instance_count: u32,
        first_index: u32,
        base_vertex: i32,
        first_instance: u32,
    },
    DrawIndirect {
        buffer: BufferId,
        offset: BufferAddress,
    },
    Dispatch([u32; 3]),
    DispatchIndirect {
        buffer: BufferId,
        offset: BufferAddress,
    },
    CopyBuffer {
        src: BufferId,
        src_offset: BufferAddress,
        dst: BufferId,
        dst_offset: BufferAddress,
        size: BufferAddress,
    },
    FillBuffer {
        buffer: BufferId,
        offset: BufferAddress,
        size: BufferAddress,
        value: u32,
    },
    BeginRenderPass {
        framebuffer: FramebufferId,
        contents: PassContents,
        clear_values: ClearValues,
    },
    NextSubpass(PassContents),
    EndRenderPass,
    ExecuteCommands(SmallVec<[Arc<CommandBuffer>; 4]>),
}

impl Command {
    /// Static name for error reporting and logs.
    pub fn name(&self) -> &'static str {
        match *self {
            Command::BindGraphicsPipeline(_) => "bind_graphics_pipeline",
            Command::BindComputePipeline(_) => "bind_compute_pipeline",
            Command::BindDescriptorSet { .. } => "bind_descriptor_set",
            Command::SetVertexBuffer { .. } => "set_vertex_buffer",
            Command::SetIndexBuffer { .. } => "set_index_buffer",
            Command::SetDynamicState(_) => "set_dynamic_state",
            Command::Draw { .. } => "draw",
            Command::DrawIndexed { .. } => "draw_indexed",
            Command::DrawIndirect { .. } => "draw_indirect",
            Command::Dispatch(_) => "dispatch",
            Command::DispatchIndirect { .. } => "dispatch_indirect",
            Command::CopyBuffer { .. } => "copy_buffer",
            Command::FillBuffer { .. } => "fill_buffer",
            Command::BeginRenderPass { .. } => "begin_render_pass",
            Command::NextSubpass(_) => "next_subpass",
            Command::EndRenderPass => "end_render_pass",
            Command::ExecuteCommands(_) => "execute_commands",
        }
    }

    fn classes(&self) -> CommandClasses {
        match *self {
            Command::CopyBuffer { .. } | Command::FillBuffer { .. } => CommandClasses::TRANSFER,
            Command::BindComputePipeline(_)
            | Command::Dispatch(_)
            | Command::DispatchIndirect { .. } => CommandClasses::COMPUTE,
            Command::BindGraphicsPipeline(_)
            | Command::SetVertexBuffer { .. }
            | Command::SetIndexBuffer { .. }
            | Command::SetDynamicState(_)
            | Command::Draw { .. }
            | Command::DrawIndexed { .. }
            | Command::DrawIndirect { .. } => CommandClasses::DRAW,
            Command::BindDescriptorSet { .. } => CommandClasses::BIND,
            Command::BeginRenderPass { .. } | Command::NextSubpass(_) | Command::EndRenderPass => {
                CommandClasses::PASS
            }
            Command::ExecuteCommands(_) => CommandClasses::EXECUTE,
        }
    }
}

/// Error recording a command.
///
/// All variants abort only the offending operation; the builder stays in its
/// previous valid state.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("command {name} is not legal for this buffer kind in its current state")]
    IllegalCommand { name: &'static str },
    #[error("subpass contents do not match the mode the render pass was begun with")]
    ModeMismatch,
    #[error("no render pass is active")]
    NotInRenderPass,
    #[error("a render pass is already active")]
    AlreadyInRenderPass,
    #[error("cannot finish: a render pass is still open")]
    UnterminatedRenderPass,
}

impl RecordError {
    fn illegal(command: &Command) -> Self {
        RecordError::IllegalCommand {
            name: command.name(),
        }
    }
}

/// Describes a [`CommandBufferBuilder`].
#[derive(Clone, Debug)]
pub struct CommandBufferDescriptor<'a> {
    /// Debug label, copied into the finished buffer.
    pub label: Label<'a>,
    pub kind: CommandBufferKind,
}

/// Records a sequence of commands and enforces the recording state machine.
///
/// Single-owner by construction: every operation takes `&mut self`, there is
/// no internal locking. Dropping the builder before [`finish`](Self::finish)
/// discards everything recorded so far with no cleanup obligations.
#[derive(Debug)]
pub struct CommandBufferBuilder {
    kind: CommandBufferKind,
    label: Option<String>,
    state: RenderPassState,
    commands: Vec<Command>,
    scope: UsageScope,
}

impl CommandBufferBuilder {
    pub fn new(desc: &CommandBufferDescriptor) -> Self {
        log::trace!("new {:?} command buffer builder", desc.kind);
        CommandBufferBuilder {
            kind: desc.kind,
            label: desc.label.as_ref().map(|cow| cow.to_string()),
            state: RenderPassState::None,
            commands: Vec::new(),
            scope: UsageScope::default(),
        }
    }

    pub fn kind(&self) -> CommandBufferKind {
        self.kind
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// True while a render pass is open on this (primary) builder.
    pub fn is_recording_pass(&self) -> bool {
        !matches!(self.state, RenderPassState::None)
    }

    /// Index of the subpass currently being recorded, if any.
    pub fn current_subpass(&self) -> Option<u32> {
        match self.state {
            RenderPassState::None => None,
            RenderPassState::InsideInline { subpass }
            | RenderPassState::InsideSecondary { subpass } => Some(subpass),
        }
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// The command classes admitted in the current `(kind, state)` pair.
    fn admitted(&self) -> CommandClasses {
        match (self.kind, self.state) {
            (CommandBufferKind::Primary, RenderPassState::None) => {
                CommandClasses::TRANSFER
                    | CommandClasses::COMPUTE
                    | CommandClasses::BIND
                    | CommandClasses::PASS
            }
            (CommandBufferKind::Primary, RenderPassState::InsideInline { .. }) => {
                CommandClasses::DRAW | CommandClasses::BIND | CommandClasses::PASS
            }
            (CommandBufferKind::Primary, RenderPassState::InsideSecondary { .. }) => {
                CommandClasses::EXECUTE | CommandClasses::PASS
            }
            (CommandBufferKind::SecondaryGraphics, _) => {
                CommandClasses::DRAW | CommandClasses::BIND
            }
            (CommandBufferKind::SecondaryCompute, _) => {
                CommandClasses::COMPUTE | CommandClasses::BIND | CommandClasses::TRANSFER
            }
        }
    }

    /// Record one command. This is the single legality chokepoint: the typed
    /// recording methods all funnel through here.
    pub fn push_command(&mut self, command: Command) -> Result<(), RecordError> {
        let next_state = self.validate(&command)?;
        self.track(&command);
        self.state = next_state;
        self.commands.push(command);
        Ok(())
    }

    /// Check `command` against the current state without mutating anything,
    /// returning the state the builder moves to if the command is recorded.
    fn validate(&self, command: &Command) -> Result<RenderPassState, RecordError> {
        if !self.admitted().contains(command.classes()) {
            return Err(RecordError::illegal(command));
        }

        match *command {
            Command::BeginRenderPass { contents, .. } => match self.state {
                RenderPassState::None => Ok(match contents {
                    PassContents::Inline => RenderPassState::InsideInline { subpass: 0 },
                    PassContents::SecondaryBuffers => {
                        RenderPassState::InsideSecondary { subpass: 0 }
                    }
                }),
                _ => Err(RecordError::AlreadyInRenderPass),
            },
            Command::NextSubpass(contents) => match (self.state, contents) {
                (RenderPassState::None, _) => Err(RecordError::NotInRenderPass),
                (RenderPassState::InsideInline { subpass }, PassContents::Inline) => {
                    Ok(RenderPassState::InsideInline {
                        subpass: subpass + 1,
                    })
                }
                (RenderPassState::InsideSecondary { subpass }, PassContents::SecondaryBuffers) => {
                    Ok(RenderPassState::InsideSecondary {
                        subpass: subpass + 1,
                    })
                }
                _ => Err(RecordError::ModeMismatch),
            },
            Command::EndRenderPass => match self.state {
                RenderPassState::None => Err(RecordError::NotInRenderPass),
                _ => Ok(RenderPassState::None),
            },
            Command::ExecuteCommands(ref buffers) => {
                // Only whole secondary graphics buffers may supply the
                // contents of a secondary-mode pass.
                if buffers
                    .iter()
                    .any(|cb| cb.kind() != CommandBufferKind::SecondaryGraphics)
                {
                    return Err(RecordError::illegal(command));
                }
                Ok(self.state)
            }
            _ => Ok(self.state),
        }
    }

    fn track(&mut self, command: &Command) {
        match *command {
            Command::BindGraphicsPipeline(id) => self.scope.use_graphics_pipeline(id),
            Command::BindComputePipeline(id) => self.scope.use_compute_pipeline(id),
            Command::BindDescriptorSet { set, .. } => self.scope.use_descriptor_set(set),
            Command::SetVertexBuffer { buffer, .. }
            | Command::SetIndexBuffer { buffer, .. }
            | Command::DrawIndirect { buffer, .. }
            | Command::DispatchIndirect { buffer, .. }
            | Command::FillBuffer { buffer, .. } => self.scope.use_buffer(buffer),
            Command::CopyBuffer { src, dst, .. } => {
                self.scope.use_buffer(src);
                self.scope.use_buffer(dst);
            }
            Command::BeginRenderPass { framebuffer, .. } => {
                self.scope.use_framebuffer(framebuffer)
            }
            Command::ExecuteCommands(ref buffers) => {
                for cb in buffers {
                    self.scope.merge(cb.resources());
                }
            }
            Command::SetDynamicState(_)
            | Command::Draw { .. }
            | Command::DrawIndexed { .. }
            | Command::Dispatch(_)
            | Command::NextSubpass(_)
            | Command::EndRenderPass => {}
        }
    }

    /// Consume the builder and bake an immutable [`CommandBuffer`].
    pub fn finish(self) -> Result<CommandBuffer, RecordError> {
        profiling::scope!("CommandBufferBuilder::finish");
        if !matches!(self.state, RenderPassState::None) {
            return Err(RecordError::UnterminatedRenderPass);
        }
        log::trace!(
            "finished {:?} command buffer with {} commands",
            self.kind,
            self.commands.len()
        );
        Ok(CommandBuffer {
            kind: self.kind,
            label: self.label,
            commands: self.commands,
            resources: self.scope.finish(),
        })
    }
}

/// An immutable, validated sequence of recorded commands.
///
/// Never mutated after [`CommandBufferBuilder::finish`]; share it across
/// threads for submission by wrapping it in an `Arc`. "Changing" a command
/// buffer means recording a new one.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub struct CommandBuffer {
    kind: CommandBufferKind,
    label: Option<String>,
    commands: Vec<Command>,
    resources: ResourceUses,
}

impl CommandBuffer {
    pub fn kind(&self) -> CommandBufferKind {
        self.kind
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every external resource this buffer (including any executed secondary
    /// buffers) references, in first-use order.
    pub fn resources(&self) -> &ResourceUses {
        &self.resources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{
        BufferId, ComputePipelineId, FramebufferId, GraphicsPipelineId, TypedId,
    };
    use crate::MAX_COLOR_ATTACHMENTS;

    fn builder(kind: CommandBufferKind) -> CommandBufferBuilder {
        CommandBufferBuilder::new(&CommandBufferDescriptor { label: None, kind })
    }

    fn pass_desc(contents: PassContents) -> RenderPassDescriptor {
        let mut clear_values = ClearValues::new();
        clear_values.push(ClearValue::Color(Color::BLACK));
        RenderPassDescriptor {
            framebuffer: FramebufferId::zip(1, 1),
            contents,
            clear_values,
        }
    }

    fn secondary_graphics() -> Arc<CommandBuffer> {
        let mut b = builder(CommandBufferKind::SecondaryGraphics);
        b.bind_graphics_pipeline(GraphicsPipelineId::zip(7, 1))
            .unwrap();
        b.draw(3, 1, 0, 0).unwrap();
        Arc::new(b.finish().unwrap())
    }

    #[test]
    fn finish_inside_pass_is_unterminated() {
        let mut b = builder(CommandBufferKind::Primary);
        b.begin_render_pass(&pass_desc(PassContents::Inline)).unwrap();
        assert_eq!(b.finish(), Err(RecordError::UnterminatedRenderPass));
    }

    #[test]
    fn begin_twice_is_already_in_render_pass() {
        let mut b = builder(CommandBufferKind::Primary);
        b.begin_render_pass(&pass_desc(PassContents::Inline)).unwrap();
        assert_eq!(
            b.begin_render_pass(&pass_desc(PassContents::SecondaryBuffers)),
            Err(RecordError::AlreadyInRenderPass)
        );
    }

    #[test]
    fn end_outside_pass_is_not_in_render_pass() {
        let mut b = builder(CommandBufferKind::Primary);
        assert_eq!(b.end_render_pass(), Err(RecordError::NotInRenderPass));
    }

    #[test]
    fn next_subpass_outside_pass_is_not_in_render_pass() {
        let mut b = builder(CommandBufferKind::Primary);
        assert_eq!(
            b.next_subpass(PassContents::Inline),
            Err(RecordError::NotInRenderPass)
        );
    }

    #[test]
    fn next_subpass_wrong_mode_is_mode_mismatch() {
        let mut b = builder(CommandBufferKind::Primary);
        b.begin_render_pass(&pass_desc(PassContents::Inline)).unwrap();
        assert_eq!(
            b.next_subpass(PassContents::SecondaryBuffers),
            Err(RecordError::ModeMismatch)
        );
        // The failed advance must not have moved the subpass index.
        assert_eq!(b.current_subpass(), Some(0));
        b.next_subpass(PassContents::Inline).unwrap();
        assert_eq!(b.current_subpass(), Some(1));
    }

    #[test]
    fn secondary_compute_rejects_draws() {
        let mut b = builder(CommandBufferKind::SecondaryCompute);
        assert_eq!(
            b.draw(3, 1, 0, 0),
            Err(RecordError::IllegalCommand { name: "draw" })
        );
        assert_eq!(
            b.bind_graphics_pipeline(GraphicsPipelineId::zip(1, 1)),
            Err(RecordError::IllegalCommand {
                name: "bind_graphics_pipeline"
            })
        );
        // Its own domain still works.
        b.bind_compute_pipeline(ComputePipelineId::zip(1, 1)).unwrap();
        b.dispatch(8, 8, 1).unwrap();
        b.finish().unwrap();
    }

    #[test]
    fn secondary_builders_reject_pass_boundaries() {
        for kind in [
            CommandBufferKind::SecondaryGraphics,
            CommandBufferKind::SecondaryCompute,
        ] {
            let mut b = builder(kind);
            assert_eq!(
                b.begin_render_pass(&pass_desc(PassContents::Inline)),
                Err(RecordError::IllegalCommand {
                    name: "begin_render_pass"
                })
            );
            assert_eq!(
                b.end_render_pass(),
                Err(RecordError::IllegalCommand {
                    name: "end_render_pass"
                })
            );
        }
    }

    #[test]
    fn draw_outside_pass_is_illegal() {
        let mut b = builder(CommandBufferKind::Primary);
        assert_eq!(
            b.draw(3, 1, 0, 0),
            Err(RecordError::IllegalCommand { name: "draw" })
        );
    }

    #[test]
    fn inline_pass_rejects_execute_commands() {
        let secondary = secondary_graphics();
        let mut b = builder(CommandBufferKind::Primary);
        b.begin_render_pass(&pass_desc(PassContents::Inline)).unwrap();
        assert_eq!(
            b.execute_commands(&[secondary]),
            Err(RecordError::IllegalCommand {
                name: "execute_commands"
            })
        );
    }

    #[test]
    fn secondary_pass_rejects_inline_draws() {
        let mut b = builder(CommandBufferKind::Primary);
        b.begin_render_pass(&pass_desc(PassContents::SecondaryBuffers))
            .unwrap();
        assert_eq!(
            b.draw(3, 1, 0, 0),
            Err(RecordError::IllegalCommand { name: "draw" })
        );
    }

    #[test]
    fn execute_commands_rejects_compute_secondaries() {
        let mut c = builder(CommandBufferKind::SecondaryCompute);
        c.dispatch(1, 1, 1).unwrap();
        let compute = Arc::new(c.finish().unwrap());

        let mut b = builder(CommandBufferKind::Primary);
        b.begin_render_pass(&pass_desc(PassContents::SecondaryBuffers))
            .unwrap();
        assert_eq!(
            b.execute_commands(&[compute]),
            Err(RecordError::IllegalCommand {
                name: "execute_commands"
            })
        );
        // Nothing was recorded for the failed call.
        assert_eq!(b.command_count(), 1);
    }

    #[test]
    fn transfers_only_outside_passes() {
        let src = BufferId::zip(1, 1);
        let dst = BufferId::zip(2, 1);

        let mut b = builder(CommandBufferKind::Primary);
        b.copy_buffer(src, 0, dst, 0, 256).unwrap();
        b.begin_render_pass(&pass_desc(PassContents::Inline)).unwrap();
        assert_eq!(
            b.copy_buffer(src, 0, dst, 0, 256),
            Err(RecordError::IllegalCommand {
                name: "copy_buffer"
            })
        );
        b.end_render_pass().unwrap();
        b.fill_buffer(dst, 0, 64, 0).unwrap();
        b.finish().unwrap();
    }

    #[test]
    fn failed_command_leaves_builder_usable() {
        let mut b = builder(CommandBufferKind::Primary);
        assert!(b.draw(3, 1, 0, 0).is_err());
        b.begin_render_pass(&pass_desc(PassContents::Inline)).unwrap();
        b.bind_graphics_pipeline(GraphicsPipelineId::zip(1, 1))
            .unwrap();
        b.draw(3, 1, 0, 0).unwrap();
        b.end_render_pass().unwrap();
        let cb = b.finish().unwrap();
        // begin + bind + draw + end; the rejected draw is absent.
        assert_eq!(cb.command_count(), 4);
    }

    #[test]
    fn full_frame_and_determinism() {
        let record = || {
            let mut b = CommandBufferBuilder::new(&CommandBufferDescriptor {
                label: Some("frame".into()),
                kind: CommandBufferKind::Primary,
            });
            b.copy_buffer(BufferId::zip(10, 1), 0, BufferId::zip(11, 1), 0, 1024)
                .unwrap();
            b.begin_render_pass(&pass_desc(PassContents::Inline)).unwrap();
            b.bind_graphics_pipeline(GraphicsPipelineId::zip(3, 1))
                .unwrap();
            b.set_vertex_buffer(0, BufferId::zip(10, 1), 0).unwrap();
            b.set_dynamic_state(DynamicState {
                line_width: Some(2.0),
                ..DynamicState::none()
            })
            .unwrap();
            b.draw(36, 1, 0, 0).unwrap();
            b.next_subpass(PassContents::Inline).unwrap();
            b.draw(6, 1, 0, 0).unwrap();
            b.end_render_pass().unwrap();
            b.finish().unwrap()
        };

        let first = record();
        let second = record();
        assert_eq!(first.command_count(), second.command_count());
        assert_eq!(first.resources(), second.resources());
        assert_eq!(first, second);

        // Buffer 10 is referenced twice but tracked once, in first-use order.
        assert_eq!(
            first.resources().buffers,
            vec![BufferId::zip(10, 1), BufferId::zip(11, 1)]
        );
        assert_eq!(first.label(), Some("frame"));
        assert_eq!(first.kind(), CommandBufferKind::Primary);
    }

    #[test]
    fn executed_secondary_resources_are_merged() {
        let secondary = secondary_graphics();
        let mut b = builder(CommandBufferKind::Primary);
        b.begin_render_pass(&pass_desc(PassContents::SecondaryBuffers))
            .unwrap();
        b.execute_commands(&[secondary.clone()]).unwrap();
        b.end_render_pass().unwrap();
        let cb = b.finish().unwrap();

        assert_eq!(
            cb.resources().graphics_pipelines,
            secondary.resources().graphics_pipelines
        );
        assert_eq!(cb.resources().framebuffers, vec![FramebufferId::zip(1, 1)]);
    }

    #[test]
    fn clear_values_fit_attachment_limit() {
        let mut clear_values = ClearValues::new();
        for _ in 0..MAX_COLOR_ATTACHMENTS {
            clear_values.push(ClearValue::Color(Color::TRANSPARENT));
        }
        clear_values.push(ClearValue::DepthStencil {
            depth: 1.0,
            stencil: 0,
        });

        let mut b = builder(CommandBufferKind::Primary);
        b.begin_render_pass(&RenderPassDescriptor {
            framebuffer: FramebufferId::zip(1, 1),
            contents: PassContents::Inline,
            clear_values,
        })
        .unwrap();
        b.end_render_pass().unwrap();
        b.finish().unwrap();
    }
}
