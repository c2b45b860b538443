//! The event descriptor table.
//!
//! One row per event kind. Row order is load-bearing: offsets are assigned by
//! cumulative width, so reordering, inserting, or removing a row shifts every
//! constant after it. Downstream code must be regenerated whenever this table
//! changes; the shifting offsets are what force that to be noticed.

/// One row of the protocol table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDescriptor {
    /// Event kind, lowercase snake_case, unique within the table.
    pub kind: &'static str,
    /// Number of opcode values this kind reserves. Width 1 is a plain event;
    /// width > 1 encodes a numeric value directly in the opcode position.
    pub width: u16,
    /// Labels for the raw bytes that follow the opcode, in wire order.
    pub operands: &'static [&'static str],
}

impl EventDescriptor {
    pub const fn new(
        kind: &'static str,
        width: u16,
        operands: &'static [&'static str],
    ) -> Self {
        Self {
            kind,
            width,
            operands,
        }
    }

    /// Total encoded length in bytes: the opcode plus one byte per operand.
    pub fn encoded_size(&self) -> usize {
        1 + self.operands.len()
    }
}

/// The shipped protocol table.
///
/// Widths must sum to at most 256; the emitter reports the slack at the end
/// of the listing so the table author can see how much room is left.
pub const EVENT_TABLE: &[EventDescriptor] = &[
    // Timing
    EventDescriptor::new("long_delta", 1, &["UpperBits", "LowerBits"]),
    EventDescriptor::new("long_delta_notes_off", 1, &["UpperBits", "LowerBits"]),
    EventDescriptor::new("short_delta", 50, &[]),
    EventDescriptor::new("short_delta_notes_off", 50, &[]),
    // Notes
    EventDescriptor::new("note_on", 128, &[]),
    EventDescriptor::new("notes_off", 1, &[]),
    // Instrument control
    EventDescriptor::new("set_flags", 1, &["Flags"]),
    EventDescriptor::new("set_volume", 1, &["Volume"]),
    EventDescriptor::new("set_pan", 3, &[]),
    EventDescriptor::new("set_velocity", 1, &["Velocity"]),
    EventDescriptor::new("set_adsr", 1, &["A", "D", "S", "R"]),
    EventDescriptor::new("set_a", 1, &["A"]),
    EventDescriptor::new("set_d", 1, &["D"]),
    EventDescriptor::new("set_s", 1, &["S"]),
    EventDescriptor::new("set_r", 1, &["R"]),
    EventDescriptor::new("set_pitch_env", 1, &["NoteOffset", "Duration"]),
    EventDescriptor::new("set_arp_rate", 1, &["Rate"]),
    EventDescriptor::new("set_portamento", 1, &["Portamento"]),
    EventDescriptor::new("set_vibrato", 1, &["Speed", "Depth"]),
];
