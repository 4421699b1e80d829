//! Capacity shrink policy shared by [`Stack`](crate::Stack) and
//! [`Queue`](crate::Queue).

/// Capacities at or below this are never shrunk.
pub(crate) const SHRINK_THRESHOLD: usize = 16;

/// Capacity to shrink to after a removal, or `None` to keep the buffer.
///
/// A buffer shrinks when it is above [`SHRINK_THRESHOLD`], more than twice
/// its initial capacity (if one was given), and less than 1/8 full. It
/// halves, but never drops below the initial capacity. The 1/8 fill mark
/// keeps tight push/pop loops from oscillating between grow and shrink.
pub(crate) fn shrink_target(capacity: usize, len: usize, initial: usize) -> Option<usize> {
    if capacity <= SHRINK_THRESHOLD
        || (initial != 0 && capacity <= initial * 2)
        || len >= capacity / 8
    {
        return None;
    }
    let target = (capacity / 2).max(initial);
    (target != capacity).then_some(target)
}
