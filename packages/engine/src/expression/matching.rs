//! Right-aligned segment matching

use super::qname::QualifiedName;

/// Compare two segment sequences from the innermost segment outwards
///
/// Two absolute sequences must have the same length. When either side is
/// relative the comparison stops as soon as one side runs out, so the shorter
/// sequence only has to be a suffix of the longer one.
pub(super) fn sequences_match(
    left: &[QualifiedName],
    left_relative: bool,
    right: &[QualifiedName],
    right_relative: bool,
) -> bool {
    if !(left_relative || right_relative) && left.len() != right.len() {
        return false;
    }

    left.iter()
        .rev()
        .zip(right.iter().rev())
        .all(|(l, r)| l.matches(r))
}
