#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Opcode span layout for the tonewire audio-event encoding.
//!
//! The wire format packs note and instrument-control events into a byte
//! stream. The first byte of every event is an opcode; each event kind owns a
//! contiguous span of opcode values, assigned in declaration order from a
//! single descriptor table. This crate computes those spans and renders them
//! as `#define` constants for the encoder/decoder runtime.
//!
//! Two layers:
//! - **Layout**: fold over [`EVENT_TABLE`] assigning each kind its base
//!   offset (cumulative sum of prior widths)
//! - **Emission**: deterministic text rendering of the resulting constants

mod descriptor;
mod emit;
mod layout;
pub mod utils;

#[cfg(test)]
mod layout_tests;

pub use descriptor::{EVENT_TABLE, EventDescriptor};
pub use emit::{CONST_PREFIX, Emitter, render};
pub use layout::{Layout, LayoutError, OPCODE_SPACE, SpanEntry};
