//! Span layout: assigns each event kind its base opcode offset.
//!
//! A single fold over the descriptor table in declaration order. The
//! descriptor at position `i` starts at the sum of all widths before it, so
//! spans are contiguous, pairwise disjoint, and strictly increasing.

use crate::descriptor::EventDescriptor;

/// Size of the opcode value space (one byte).
pub const OPCODE_SPACE: u32 = 256;

/// A descriptor placed at its assigned base offset.
#[derive(Debug, Clone, Copy)]
pub struct SpanEntry {
    pub descriptor: EventDescriptor,
    /// Position in the table, used to disambiguate start/count names.
    pub index: usize,
    /// First opcode value of this kind's span.
    pub offset: u32,
}

/// Result of the layout pass.
#[derive(Debug, Clone)]
pub struct Layout {
    pub entries: Vec<SpanEntry>,
    /// First opcode value after all declared spans (the total width).
    pub reserved: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("table overflow: {total} opcode values declared, only {OPCODE_SPACE} available")]
    TableOverflow { total: u32 },
}

impl Layout {
    /// Compute the layout for `table`.
    ///
    /// Never fails: a table whose widths sum past [`OPCODE_SPACE`] still lays
    /// out, and [`Layout::unused`] goes negative. The emitted report is the
    /// signal for the table author to fix the widths.
    pub fn compute(table: &[EventDescriptor]) -> Layout {
        let mut entries = Vec::with_capacity(table.len());
        let mut offset = 0u32;

        for (index, descriptor) in table.iter().enumerate() {
            entries.push(SpanEntry {
                descriptor: *descriptor,
                index,
                offset,
            });
            offset += u32::from(descriptor.width);
        }

        Layout {
            entries,
            reserved: offset,
        }
    }

    /// Like [`Layout::compute`], but rejects tables that overflow the opcode
    /// value space.
    pub fn compute_strict(table: &[EventDescriptor]) -> Result<Layout, LayoutError> {
        let layout = Self::compute(table);
        if layout.reserved > OPCODE_SPACE {
            return Err(LayoutError::TableOverflow {
                total: layout.reserved,
            });
        }
        Ok(layout)
    }

    /// Opcode values left unclaimed. Negative when the table overflows.
    pub fn unused(&self) -> i32 {
        OPCODE_SPACE as i32 - self.reserved as i32
    }
}
