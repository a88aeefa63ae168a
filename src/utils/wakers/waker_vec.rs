use super::readiness_vec::ReadinessVec;

use alloc::sync::Arc;
use alloc::task::Wake;
use alloc::vec::Vec;
use core::task::{Context, Waker};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The waker handed to a single slot.
#[derive(Debug)]
struct SlotWaker {
    index: usize,
    readiness: Arc<Mutex<ReadinessVec>>,
}

impl Wake for SlotWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        let parent = {
            let mut readiness = lock(&self.readiness);
            if readiness.set_ready(self.index) {
                return;
            }
            readiness.parent_waker().cloned()
        };
        // Wake outside of the lock, the parent may poll us right away.
        if let Some(parent) = parent {
            parent.wake();
        }
    }
}

/// One waker per slot, all sharing the same readiness markers.
#[derive(Debug)]
pub(crate) struct WakerVec {
    wakers: Vec<Waker>,
    readiness: Arc<Mutex<ReadinessVec>>,
}

impl WakerVec {
    pub(crate) fn new(len: usize) -> Self {
        let readiness = Arc::new(Mutex::new(ReadinessVec::new(len)));
        let wakers = (0..len)
            .map(|index| {
                Waker::from(Arc::new(SlotWaker {
                    index,
                    readiness: readiness.clone(),
                }))
            })
            .collect();
        Self { wakers, readiness }
    }

    /// Register the parent waker, then call `poll` with the index and a
    /// context for every slot woken since the last call.
    pub(crate) fn for_each_ready(
        &self,
        parent_waker: &Waker,
        mut poll: impl FnMut(usize, &mut Context<'_>),
    ) {
        let mut readiness = lock(&self.readiness);
        readiness.set_waker(parent_waker);
        if !readiness.any_ready() {
            return;
        }

        for (index, waker) in self.wakers.iter().enumerate() {
            if !readiness.clear_ready(index) {
                continue;
            }
            // Unlock while polling, the slot may wake itself.
            drop(readiness);
            poll(index, &mut Context::from_waker(waker));
            readiness = lock(&self.readiness);
        }
    }
}

fn lock(readiness: &Mutex<ReadinessVec>) -> MutexGuard<'_, ReadinessVec> {
    // The markers stay consistent even if a waker panicked mid-update.
    readiness.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod test {
    use super::*;
    use core::task::Poll;
    use futures_lite::future::{self, block_on};

    #[test]
    fn only_woken_slots_are_visited() {
        block_on(future::poll_fn(|cx| {
            let wakers = WakerVec::new(3);
            let mut visited = Vec::new();
            wakers.for_each_ready(cx.waker(), |index, _| visited.push(index));
            assert_eq!(visited, [0, 1, 2]);

            visited.clear();
            wakers.for_each_ready(cx.waker(), |index, _| visited.push(index));
            assert!(visited.is_empty());

            wakers.wakers[2].wake_by_ref();
            wakers.for_each_ready(cx.waker(), |index, cx| {
                visited.push(index);
                cx.waker().wake_by_ref();
            });
            assert_eq!(visited, [2]);

            visited.clear();
            wakers.for_each_ready(cx.waker(), |index, _| visited.push(index));
            assert_eq!(visited, [2]);
            Poll::Ready(())
        }));
    }
}
