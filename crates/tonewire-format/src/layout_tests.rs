//! Layout arithmetic tests.
//!
//! Verify offset accumulation, span disjointness, and the overflow policies.

use crate::descriptor::{EVENT_TABLE, EventDescriptor};
use crate::layout::{Layout, LayoutError, OPCODE_SPACE};

#[test]
fn offsets_accumulate_in_table_order() {
    let table = [
        EventDescriptor::new("a", 1, &[]),
        EventDescriptor::new("b", 50, &[]),
        EventDescriptor::new("c", 1, &["X"]),
    ];
    let layout = Layout::compute(&table);

    let offsets: Vec<u32> = layout.entries.iter().map(|e| e.offset).collect();
    assert_eq!(offsets, [0, 1, 51]);
    assert_eq!(layout.reserved, 52);
    assert_eq!(layout.unused(), 204);
}

#[test]
fn empty_table_reserves_nothing() {
    let layout = Layout::compute(&[]);
    assert!(layout.entries.is_empty());
    assert_eq!(layout.reserved, 0);
    assert_eq!(layout.unused(), OPCODE_SPACE as i32);
}

#[test]
fn successor_spans_are_contiguous() {
    let layout = Layout::compute(EVENT_TABLE);
    for pair in layout.entries.windows(2) {
        assert_eq!(
            pair[0].offset + u32::from(pair[0].descriptor.width),
            pair[1].offset,
            "gap between {} and {}",
            pair[0].descriptor.kind,
            pair[1].descriptor.kind,
        );
    }
}

#[test]
fn spans_never_overlap() {
    let layout = Layout::compute(EVENT_TABLE);
    for (i, a) in layout.entries.iter().enumerate() {
        for b in &layout.entries[i + 1..] {
            let a_end = a.offset + u32::from(a.descriptor.width);
            assert!(
                a_end <= b.offset,
                "{} overlaps {}",
                a.descriptor.kind,
                b.descriptor.kind,
            );
        }
    }
}

#[test]
fn shipped_table_fits_opcode_space() {
    let layout = Layout::compute_strict(EVENT_TABLE).unwrap();
    assert_eq!(layout.reserved, 246);
    assert_eq!(layout.unused(), 10);
}

#[test]
fn exact_fit_leaves_no_unused() {
    let table = [
        EventDescriptor::new("low", 128, &[]),
        EventDescriptor::new("high", 128, &[]),
    ];
    let layout = Layout::compute_strict(&table).unwrap();
    assert_eq!(layout.reserved, OPCODE_SPACE);
    assert_eq!(layout.unused(), 0);
}

#[test]
fn overflow_reports_negative_unused_by_default() {
    let table = [
        EventDescriptor::new("big", 250, &[]),
        EventDescriptor::new("bigger", 50, &[]),
    ];
    let layout = Layout::compute(&table);
    assert_eq!(layout.reserved, 300);
    assert_eq!(layout.unused(), -44);
}

#[test]
fn strict_mode_rejects_overflow() {
    let table = [
        EventDescriptor::new("big", 250, &[]),
        EventDescriptor::new("bigger", 50, &[]),
    ];
    let err = Layout::compute_strict(&table).unwrap_err();
    assert_eq!(err, LayoutError::TableOverflow { total: 300 });
    assert_eq!(
        err.to_string(),
        "table overflow: 300 opcode values declared, only 256 available"
    );
}

#[test]
fn encoded_size_counts_opcode_plus_operands() {
    for descriptor in EVENT_TABLE {
        assert_eq!(descriptor.encoded_size(), 1 + descriptor.operands.len());
    }
}
