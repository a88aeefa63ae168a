use core::task::Waker;
use fixedbitset::FixedBitSet;

/// Tracks which slots have been woken and should be polled.
#[derive(Debug)]
pub(crate) struct ReadinessVec {
    ready_count: usize,
    ready: FixedBitSet,
    parent_waker: Option<Waker>,
}

impl ReadinessVec {
    /// Create a new instance with every slot marked as ready, so each one
    /// gets polled at least once.
    pub(crate) fn new(len: usize) -> Self {
        let mut ready = FixedBitSet::with_capacity(len);
        ready.set_range(.., true);
        Self {
            ready_count: len,
            ready,
            parent_waker: None,
        }
    }

    /// Mark the slot at `index` as ready.
    ///
    /// Returns the old ready state of the slot.
    pub(crate) fn set_ready(&mut self, index: usize) -> bool {
        if self.ready.contains(index) {
            true
        } else {
            self.ready_count += 1;
            self.ready.set(index, true);
            false
        }
    }

    /// Mark the slot at `index` as no longer ready.
    ///
    /// Returns whether the slot was ready.
    pub(crate) fn clear_ready(&mut self, index: usize) -> bool {
        if self.ready.contains(index) {
            self.ready_count -= 1;
            self.ready.set(index, false);
            true
        } else {
            false
        }
    }

    /// Returns `true` if any of the slots are ready.
    pub(crate) fn any_ready(&self) -> bool {
        self.ready_count > 0
    }

    /// Access the parent waker.
    #[inline]
    pub(crate) fn parent_waker(&self) -> Option<&Waker> {
        self.parent_waker.as_ref()
    }

    /// Set the parent `Waker`. This needs to be called at the start of every
    /// `poll` function.
    pub(crate) fn set_waker(&mut self, parent_waker: &Waker) {
        match &mut self.parent_waker {
            Some(prev) => prev.clone_from(parent_waker),
            None => self.parent_waker = Some(parent_waker.clone()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_ready() {
        let mut readiness = ReadinessVec::new(3);
        assert!(readiness.any_ready());
        assert!(readiness.clear_ready(0));
        assert!(!readiness.clear_ready(0));
        assert!(readiness.clear_ready(1));
        assert!(readiness.clear_ready(2));
        assert!(!readiness.any_ready());

        assert!(!readiness.set_ready(1));
        assert!(readiness.set_ready(1));
        assert!(readiness.any_ready());
    }
}
