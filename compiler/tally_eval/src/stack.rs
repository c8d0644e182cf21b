//! Host stack headroom for the tree walker.
//!
//! Every nested expression and every user-level call costs several host
//! frames, so a deep program would otherwise overflow the native stack long
//! before it ran out of memory.

/// Once less than this much stack is left, evaluation moves to a new segment.
#[cfg(not(target_arch = "wasm32"))]
const HEADROOM: usize = 128 * 1024;

/// Size of each segment mapped when headroom runs out.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT: usize = 2 * 1024 * 1024;

/// Run one evaluation step with at least [`HEADROOM`] bytes of stack.
///
/// wasm32 has no stack switching, so the step runs in place there.
#[inline]
pub(crate) fn with_headroom<R>(step: impl FnOnce() -> R) -> R {
    #[cfg(not(target_arch = "wasm32"))]
    {
        stacker::maybe_grow(HEADROOM, SEGMENT, step)
    }
    #[cfg(target_arch = "wasm32")]
    {
        step()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
