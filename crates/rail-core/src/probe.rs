//! Seeing through the scroll-proxy overlay.
//!
//! The overlay must capture wheel and touch input, which also makes it swallow
//! hover and clicks meant for the cards underneath. A probe switches the
//! overlay's hit-testing off, asks what is under the pointer, and switches it
//! back. [`SuspendedHitTest`] restores the previous value on drop, so every
//! exit path (including early returns and `?`) leaves the overlay as it was.

/// Something whose hit-testing can be toggled, i.e. CSS `pointer-events`.
pub trait HitTestTarget {
    /// Current inline `pointer-events` value; empty when unset.
    fn pointer_events(&self) -> String;
    fn set_pointer_events(&self, value: &str);
}

pub struct SuspendedHitTest<'a, T: HitTestTarget + ?Sized> {
    target: &'a T,
    previous: String,
}

impl<'a, T: HitTestTarget + ?Sized> SuspendedHitTest<'a, T> {
    pub fn new(target: &'a T) -> Self {
        let previous = target.pointer_events();
        target.set_pointer_events("none");
        Self { target, previous }
    }
}

impl<T: HitTestTarget + ?Sized> Drop for SuspendedHitTest<'_, T> {
    fn drop(&mut self) {
        self.target.set_pointer_events(&self.previous);
    }
}

/// Runs `query` with hit-testing on `overlay` suspended.
pub fn probe_through<T, R>(overlay: &T, query: impl FnOnce() -> R) -> R
where
    T: HitTestTarget + ?Sized,
{
    let _guard = SuspendedHitTest::new(overlay);
    query()
}

/// Parses a `data-stack-index` attribute value.
pub fn parse_stack_index(raw: Option<&str>, len: usize) -> Option<usize> {
    let i = raw?.trim().parse::<usize>().ok()?;
    (i < len).then_some(i)
}

/// First stack index found walking from the hit element up through its
/// ancestors. `chain` yields each node's `data-stack-index`, innermost first.
pub fn stack_index_from_ancestry<'s, I>(chain: I, len: usize) -> Option<usize>
where
    I: IntoIterator<Item = Option<&'s str>>,
{
    chain
        .into_iter()
        .flatten()
        .find_map(|raw| parse_stack_index(Some(raw), len))
}
