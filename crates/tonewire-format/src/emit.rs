//! Text emission of the computed layout as `#define` constants.
//!
//! The listing is a pure function of the table: one ID constant per kind
//! (with the operand labels as a trailing comment), one SIZE constant, and
//! for multi-width kinds a START alias plus a COUNT so the runtime can walk
//! the whole span without hardcoding its extent. A RESERVED constant and an
//! unused-value report close the listing.

use crate::descriptor::EventDescriptor;
use crate::layout::{Layout, SpanEntry};
use crate::utils::to_const_case;

/// Prefix shared by every emitted constant.
pub const CONST_PREFIX: &str = "TONEWIRE_FMT";

/// Renders a [`Layout`] into the constant listing.
pub struct Emitter<'a> {
    layout: &'a Layout,
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            output: String::new(),
        }
    }

    /// Emit the full listing.
    pub fn emit(mut self) -> String {
        self.banner();

        for entry in &self.layout.entries {
            self.emit_entry(entry);
        }

        self.define(
            &format!("{CONST_PREFIX}_RESERVED"),
            &hex(self.layout.reserved),
            None,
        );
        self.output
            .push_str(&format!("// Unused values: {}\n", self.layout.unused()));
        self.output.push_str("// -----\n");

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }

    fn banner(&mut self) {
        self.output.push_str("// -----\n");
        self.output
            .push_str("// tonewire opcode span definitions (generated, do not edit)\n");
    }

    fn emit_entry(&mut self, entry: &SpanEntry) {
        let id = id_name(&entry.descriptor);
        let operands = operand_comment(&entry.descriptor);
        self.define(&id, &hex(entry.offset), operands.as_deref());
        self.define(
            &size_name(&entry.descriptor),
            &entry.descriptor.encoded_size().to_string(),
            None,
        );

        // Multi-width kinds get a START alias (textual, so downstream picks
        // up renames) and a COUNT for iterating the span.
        if entry.descriptor.width > 1 {
            self.define(&span_name(entry, "START"), &id, None);
            self.define(
                &span_name(entry, "COUNT"),
                &entry.descriptor.width.to_string(),
                None,
            );
        }
    }

    fn define(&mut self, name: &str, value: &str, comment: Option<&str>) {
        self.output.push_str("#define ");
        self.output.push_str(name);
        self.output.push(' ');
        self.output.push_str(value);
        if let Some(comment) = comment {
            self.output.push_str(" // ");
            self.output.push_str(comment);
        }
        self.output.push('\n');
    }
}

/// Compute the layout for `table` and emit the listing in one step.
pub fn render(table: &[EventDescriptor]) -> String {
    Emitter::new(&Layout::compute(table)).emit()
}

/// ID constant name. Operand-carrying kinds get an `_ARG<n>` suffix so that
/// kinds sharing a prefix but differing in arity never collide.
fn id_name(descriptor: &EventDescriptor) -> String {
    let kind = to_const_case(descriptor.kind);
    if descriptor.operands.is_empty() {
        format!("{CONST_PREFIX}_{kind}_ID")
    } else {
        format!("{CONST_PREFIX}_{kind}_ARG{}_ID", descriptor.operands.len())
    }
}

fn size_name(descriptor: &EventDescriptor) -> String {
    format!("{CONST_PREFIX}_{}_SIZE", to_const_case(descriptor.kind))
}

/// START/COUNT name, disambiguated by table position so the pair stays
/// globally unique even if kind strings repeat.
fn span_name(entry: &SpanEntry, suffix: &str) -> String {
    format!(
        "{CONST_PREFIX}_{}_{}_{}",
        to_const_case(entry.descriptor.kind),
        entry.index,
        suffix
    )
}

fn operand_comment(descriptor: &EventDescriptor) -> Option<String> {
    if descriptor.operands.is_empty() {
        return None;
    }
    Some(
        descriptor
            .operands
            .iter()
            .map(|label| format!("[{label}]"))
            .collect(),
    )
}

/// Lowercase hex, zero-padded to at least two digits. Offsets never need the
/// padding past 0xff in a valid table, but an overflowing one still renders.
fn hex(value: u32) -> String {
    format!("0x{value:02x}")
}
