//! The physical rotation primitive.
//!
//! All plate derivations move symbols around the 8 outer palaces by
//! spatial adjacency (not by Luoshu numbering), inserting the Center as
//! the 5th element of every 9-step traversal. Rotating 0 steps is the
//! identity; rotating 4 steps always lands on the Center; for any fixed
//! direction the 9 step counts enumerate all 9 palaces exactly once.

use crate::palace::Palace;

/// Clockwise physical traversal of the outer ring, starting north.
pub const OUTER_CLOCKWISE: [Palace; 8] = [
    Palace::Kan,
    Palace::Gen,
    Palace::Zhen,
    Palace::Xun,
    Palace::Li,
    Palace::Kun,
    Palace::Dui,
    Palace::Qian,
];

/// Counterclockwise physical traversal (reversal of the clockwise ring).
pub const OUTER_COUNTERCLOCKWISE: [Palace; 8] = [
    Palace::Kan,
    Palace::Qian,
    Palace::Dui,
    Palace::Kun,
    Palace::Li,
    Palace::Xun,
    Palace::Zhen,
    Palace::Gen,
];

/// Position of an outer palace in `OUTER_CLOCKWISE`.
const fn cw_index(palace: Palace) -> usize {
    match palace {
        Palace::Kan => 0,
        Palace::Gen => 1,
        Palace::Zhen => 2,
        Palace::Xun => 3,
        Palace::Li => 4,
        Palace::Kun => 5,
        Palace::Dui => 6,
        Palace::Qian => 7,
        // Callers resolve the Center before rotating; ring_anchor keeps
        // this total anyway.
        Palace::Zhong => 5,
    }
}

/// Rotate `steps` palaces from `start` along the physical ring.
///
/// A Center start is resolved to its borrowed palace; `steps` is taken
/// modulo 9. Step 4 is always the Center; steps past it continue on the
/// ring where they left off.
pub const fn rotate(start: Palace, steps: u8, clockwise: bool) -> Palace {
    let start = start.ring_anchor();
    let s = (steps % 9) as usize;
    if s == 4 {
        return Palace::Zhong;
    }
    let ring: &[Palace; 8] = if clockwise {
        &OUTER_CLOCKWISE
    } else {
        &OUTER_COUNTERCLOCKWISE
    };
    let start_idx = if clockwise {
        cw_index(start)
    } else {
        (8 - cw_index(start)) % 8
    };
    let offset = if s > 4 { s - 1 } else { s };
    ring[(start_idx + offset) % 8]
}
