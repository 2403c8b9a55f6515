//! Matching pressed tokens against stored bindings

use crate::binding::Binding;
use crate::chord::Chord;

/// Find the first binding whose chord is a subset of `pressed`
///
/// Bindings are scanned in stored order. A binding with an empty chord
/// matches every key press, so an unconfigured binding ahead of real ones
/// shadows them.
pub fn find_match<'a>(bindings: &'a [Binding], pressed: &Chord) -> Option<&'a Binding> {
    let found = bindings
        .iter()
        .find(|binding| binding.shortcut.is_subset_of(pressed));

    if let Some(binding) = found {
        if !binding.is_configured() {
            tracing::warn!(
                "Unconfigured binding {:?} matched {:?} vacuously",
                binding.link,
                pressed.to_string()
            );
        }
    }

    found
}

/// Index of the first unconfigured binding; every key press that reaches it
/// opens its link
pub fn find_catch_all(bindings: &[Binding]) -> Option<usize> {
    bindings.iter().position(|binding| !binding.is_configured())
}
