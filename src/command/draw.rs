//! Draw structures and draw-family recording.

use crate::{
    command::{Command, CommandBufferBuilder, RecordError},
    dynamic_state::DynamicState,
    id::{BufferId, DescriptorSetId, GraphicsPipelineId},
    BufferAddress, IndexFormat,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "trace", derive(serde::Serialize))]
#[cfg_attr(feature = "replay", derive(serde::Deserialize))]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub w: T,
    pub h: T,
}

impl CommandBufferBuilder {
    pub fn bind_graphics_pipeline(
        &mut self,
        pipeline: GraphicsPipelineId,
    ) -> Result<(), RecordError> {
        self.push_command(Command::BindGraphicsPipeline(pipeline))
    }

    pub fn bind_descriptor_set(
        &mut self,
        index: u32,
        set: DescriptorSetId,
    ) -> Result<(), RecordError> {
        self.push_command(Command::BindDescriptorSet { index, set })
    }

    pub fn set_vertex_buffer(
        &mut self,
        slot: u32,
        buffer: BufferId,
        offset: BufferAddress,
    ) -> Result<(), RecordError> {
        self.push_command(Command::SetVertexBuffer {
            slot,
            buffer,
            offset,
        })
    }

    pub fn set_index_buffer(
        &mut self,
        buffer: BufferId,
        format: IndexFormat,
        offset: BufferAddress,
    ) -> Result<(), RecordError> {
        self.push_command(Command::SetIndexBuffer {
            buffer,
            format,
            offset,
        })
    }

    /// Record dynamic state for subsequent draws. The state is captured by
    /// value; later changes to the passed struct have no effect.
    pub fn set_dynamic_state(&mut self, state: DynamicState) -> Result<(), RecordError> {
        self.push_command(Command::SetDynamicState(state))
    }

    pub fn draw(
        &mut self,
        vertex_count: u32,
        instance_count: u32,
        first_vertex: u32,
        first_instance: u32,
    ) -> Result<(), RecordError> {
        self.push_command(Command::Draw {
            vertex_count,
            instance_count,
            first_vertex,
            first_instance,
        })
    }

    pub fn draw_indexed(
        &mut self,
        index_count: u32,
        instance_count: u32,
        first_index: u32,
        base_vertex: i32,
        first_instance: u32,
    ) -> Result<(), RecordError> {
        self.push_command(Command::DrawIndexed {
            index_count,
            instance_count,
            first_index,
            base_vertex,
            first_instance,
        })
    }

    /// Draw with parameters sourced from `buffer` at `offset` at execution
    /// time.
    pub fn draw_indirect(
        &mut self,
        buffer: BufferId,
        offset: BufferAddress,
    ) -> Result<(), RecordError> {
        self.push_command(Command::DrawIndirect { buffer, offset })
    }
}
