use core::task::{Context, Waker};

/// Without a lock to share readiness behind, every slot is polled with the
/// parent's waker.
#[derive(Debug)]
pub(crate) struct WakerVec {
    len: usize,
}

impl WakerVec {
    pub(crate) fn new(len: usize) -> Self {
        Self { len }
    }

    /// Call `poll` with the index and the parent's context for every slot.
    pub(crate) fn for_each_ready(
        &self,
        parent_waker: &Waker,
        mut poll: impl FnMut(usize, &mut Context<'_>),
    ) {
        let mut cx = Context::from_waker(parent_waker);
        for index in 0..self.len {
            poll(index, &mut cx);
        }
    }
}
