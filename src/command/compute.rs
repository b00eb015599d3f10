//! Dispatch-family recording.

use crate::{
    command::{Command, CommandBufferBuilder, RecordError},
    id::{BufferId, ComputePipelineId},
    BufferAddress,
};

impl CommandBufferBuilder {
    pub fn bind_compute_pipeline(
        &mut self,
        pipeline: ComputePipelineId,
    ) -> Result<(), RecordError> {
        self.push_command(Command::BindComputePipeline(pipeline))
    }

    pub fn dispatch(&mut self, x: u32, y: u32, z: u32) -> Result<(), RecordError> {
        self.push_command(Command::Dispatch([x, y, z]))
    }

    /// Dispatch with the workgroup counts sourced from `buffer` at `offset`
    /// at execution time.
    pub fn dispatch_indirect(
        &mut self,
        buffer: BufferId,
        offset: BufferAddress,
    ) -> Result<(), RecordError> {
        self.push_command(Command::DispatchIndirect { buffer, offset })
    }
}
