// Copyright (c) 2025 The Caliper Authors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The pending-box worklist.
//!
//! A single LIFO stack gives depth-first exploration order, which keeps the
//! frontier small; classification is history-independent, so the order
//! affects performance only. The worklist is owned by the solver and reused
//! across runs without deallocating.

use caliper_model::region::IntervalBox;

/// A box awaiting exploration, together with the sign-combination mask its
/// ancestry certified (reused by the monotonicity shortcut).
#[derive(Clone, Debug)]
pub(crate) struct PendingBox {
    pub(crate) region: IntervalBox,
    pub(crate) corner_hint: Option<usize>,
}

/// LIFO stack of pending boxes.
#[derive(Clone, Debug, Default)]
pub(crate) struct Worklist {
    entries: Vec<PendingBox>,
}

impl Worklist {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn preallocated(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, pending: PendingBox) {
        self.entries.push(pending);
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<PendingBox> {
        self.entries.pop()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears the logical state without deallocating the backing storage.
    #[inline]
    pub(crate) fn reset(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use caliper_core::interval::Interval;

    fn pending(inf: f64, sup: f64) -> PendingBox {
        PendingBox {
            region: IntervalBox::new([Interval::from_inf_sup(inf, sup)]),
            corner_hint: None,
        }
    }

    #[test]
    fn test_worklist_is_lifo() {
        let mut worklist = Worklist::new();
        worklist.push(pending(0.0, 1.0));
        worklist.push(pending(1.0, 2.0));

        assert_eq!(worklist.len(), 2);
        assert_eq!(worklist.pop().unwrap().region[0].inf(), 1.0);
        assert_eq!(worklist.pop().unwrap().region[0].inf(), 0.0);
        assert!(worklist.pop().is_none());
    }

    #[test]
    fn test_reset_clears_entries() {
        let mut worklist = Worklist::preallocated(16);
        worklist.push(pending(0.0, 1.0));

        worklist.reset();
        assert!(worklist.is_empty());
    }
}
