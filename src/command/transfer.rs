//! Transfer-family recording.
//!
//! Transfers are legal on primary builders outside render passes and on
//! secondary compute builders. Offsets and sizes are recorded verbatim;
//! range and alignment checks need device limits and therefore belong to
//! the device layer consuming the finished buffer.

use crate::{
    command::{Command, CommandBufferBuilder, RecordError},
    id::BufferId,
    BufferAddress,
};

impl CommandBufferBuilder {
    /// Copy `size` bytes from `src` at `src_offset` to `dst` at `dst_offset`.
    pub fn copy_buffer(
        &mut self,
        src: BufferId,
        src_offset: BufferAddress,
        dst: BufferId,
        dst_offset: BufferAddress,
        size: BufferAddress,
    ) -> Result<(), RecordError> {
        self.push_command(Command::CopyBuffer {
            src,
            src_offset,
            dst,
            dst_offset,
            size,
        })
    }

    /// Fill `size` bytes of `buffer` starting at `offset` with a repeated
    /// 32-bit `value`.
    pub fn fill_buffer(
        &mut self,
        buffer: BufferId,
        offset: BufferAddress,
        size: BufferAddress,
        value: u32,
    ) -> Result<(), RecordError> {
        self.push_command(Command::FillBuffer {
            buffer,
            offset,
            size,
            value,
        })
    }
}
