use super::All as AllTrait;
use crate::operation::{Operation, OperationMap};
use crate::utils::{get_pin_mut, iter_pin_mut, trace, MaybeDone, WakerVec};

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;
use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::hash::{BuildHasher, Hash};

use futures_core::FusedFuture;
use pin_project::pin_project;

type OperationFuture<M> = <<M as OperationMap>::Operation as Operation>::Future;

/// A future which waits for all keyed operations to complete successfully, or
/// abort early on error.
///
/// This `struct` is created by the [`all`] method on the [`All`] trait. See
/// its documentation for more.
///
/// [`all`]: crate::future::All::all
/// [`All`]: crate::future::All
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct All<M>
where
    M: OperationMap,
{
    /// Whether the future has completed
    consumed: bool,
    /// The number of operations still in flight
    pending: usize,
    /// The keys, in the same order as the slots
    keys: Vec<M::Key>,
    /// One waker per slot, recording which slots need to be polled again
    wakers: WakerVec,
    /// One slot per operation, each driving the operation's future
    slots: Pin<Box<[MaybeDone<OperationFuture<M>>]>>,
}

impl<M> All<M>
where
    M: OperationMap,
{
    pub(crate) fn new(operations: M) -> Self {
        let (keys, slots): (Vec<_>, Vec<_>) = operations
            .into_entries()
            .map(|(key, operation)| (key, MaybeDone::new(operation.start())))
            .unzip();
        trace!(entries = keys.len(), "started keyed operations");
        Self {
            consumed: false,
            pending: keys.len(),
            wakers: WakerVec::new(keys.len()),
            keys,
            slots: Box::into_pin(slots.into_boxed_slice()),
        }
    }
}

impl<M, T, E> Future for All<M>
where
    M: OperationMap,
    M::Operation: Operation<Output = Result<T, E>>,
{
    type Output = Result<M::Output<T>, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        // Poll every woken slot, remembering the first failure in entry order.
        let mut failure = None;
        let slots = &mut *this.slots;
        let pending = &mut *this.pending;
        this.wakers.for_each_ready(cx.waker(), |index, cx| {
            let Some(mut slot) = get_pin_mut(slots.as_mut(), index) else {
                return;
            };
            if slot.is_pending() && slot.as_mut().poll(cx).is_ready() {
                *pending -= 1;
                if failure.is_none() {
                    failure = slot.take_err();
                }
            }
        });

        if let Some(err) = failure {
            trace!("keyed operation failed, short-circuiting");
            *this.consumed = true;
            return Poll::Ready(Err(err));
        }

        if *this.pending > 0 {
            return Poll::Pending;
        }

        *this.consumed = true;
        trace!(entries = this.keys.len(), "keyed operations completed");
        let keys = mem::take(this.keys);
        let output = keys
            .into_iter()
            .zip(iter_pin_mut(this.slots.as_mut()))
            .map(|(key, slot)| match slot.take_ok() {
                Some(value) => (key, value),
                None => unreachable!("every slot holds an output once all are done"),
            })
            .collect();
        Poll::Ready(Ok(output))
    }
}

impl<M, T, E> FusedFuture for All<M>
where
    M: OperationMap,
    M::Operation: Operation<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.consumed
    }
}

impl<M> fmt::Debug for All<M>
where
    M: OperationMap,
    M::Key: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys.iter().zip(self.slots.iter().map(MaybeDone::state)))
            .finish()
    }
}

impl<K, F, T, E> AllTrait for Vec<(K, F)>
where
    F: Operation<Output = Result<T, E>>,
{
    type Output = Vec<(K, T)>;
    type Error = E;
    type Future = All<Self>;

    fn all(self) -> Self::Future {
        All::new(self)
    }
}

impl<K, F, T, E> AllTrait for BTreeMap<K, F>
where
    K: Ord,
    F: Operation<Output = Result<T, E>>,
{
    type Output = BTreeMap<K, T>;
    type Error = E;
    type Future = All<Self>;

    fn all(self) -> Self::Future {
        All::new(self)
    }
}

#[cfg(feature = "std")]
impl<K, F, S, T, E> AllTrait for HashMap<K, F, S>
where
    K: Eq + Hash,
    F: Operation<Output = Result<T, E>>,
    S: BuildHasher + Default,
{
    type Output = HashMap<K, T, S>;
    type Error = E;
    type Future = All<Self>;

    fn all(self) -> Self::Future {
        All::new(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::test_utils::{after, delayed_op, ready_op};

    use core::cell::Cell;
    use futures_lite::future::{block_on, poll_once};
    use std::rc::Rc;

    #[test]
    fn smoke() {
        block_on(async {
            let res = vec![("a", ready_op(Ok::<_, ()>(1))), ("b", ready_op(Ok::<_, ()>(2)))]
                .all()
                .await;
            assert_eq!(res, Ok(vec![("a", 1), ("b", 2)]));
        });
    }

    #[test]
    fn empty() {
        block_on(async {
            let ops: Vec<(&str, fn() -> core::future::Ready<Result<u8, ()>>)> = vec![];
            assert_eq!(ops.all().await, Ok(vec![]));
        });
    }

    #[test]
    fn out_of_order_completion() {
        block_on(async {
            let ops: BTreeMap<_, _> = (0..5u8)
                .map(|n| (n, delayed_op(5 - n as usize, Ok::<_, ()>(n * 10))))
                .collect();
            let res = ops.all().await.unwrap();
            assert_eq!(res, (0..5u8).map(|n| (n, n * 10)).collect::<BTreeMap<_, _>>());
        });
    }

    #[test]
    fn short_circuit() {
        block_on(async {
            let res = vec![
                ("slow", delayed_op(1_000_000, Ok::<i32, &str>(1))),
                ("fail", delayed_op(1, Err::<i32, &str>("boom"))),
            ]
            .all()
            .await;
            assert_eq!(res, Err("boom"));
        });
    }

    #[test]
    fn first_failure_in_entry_order() {
        block_on(async {
            let res = vec![
                ("a", ready_op(Err::<u8, _>("first"))),
                ("b", ready_op(Err::<u8, _>("second"))),
            ]
            .all()
            .await;
            assert_eq!(res, Err("first"));
        });
    }

    #[test]
    fn every_operation_polled_before_pending() {
        block_on(async {
            let started = Rc::new(Cell::new(0));
            let ops: Vec<_> = (0..3)
                .map(|n| {
                    let started = started.clone();
                    let op = move || async move {
                        started.set(started.get() + 1);
                        after(2, Ok::<_, ()>(n)).await
                    };
                    (n, op)
                })
                .collect();
            let mut fut = ops.all();
            assert_eq!(started.get(), 0);
            assert!(poll_once(&mut fut).await.is_none());
            assert_eq!(started.get(), 3);
            assert_eq!(fut.await, Ok(vec![(0, 0), (1, 1), (2, 2)]));
        });
    }

    #[test]
    #[cfg(feature = "std")]
    fn idle_operations_are_not_polled_again() {
        use crate::utils::test_utils::busy_and_idle;

        block_on(async {
            let (ops, idle_polls) = busy_and_idle(100, 9);
            let res = ops.all().await.unwrap();
            assert_eq!(res[0], (0, 0));
            assert_eq!(res.len(), 10);
            assert_eq!(idle_polls.get(), 2 * 9);
        });
    }

    #[test]
    fn debug() {
        block_on(async {
            let mut fut = vec![
                ("a", delayed_op(0, Ok::<_, ()>(1))),
                ("b", delayed_op(3, Ok::<_, ()>(2))),
            ]
            .all();
            assert_eq!(format!("{fut:?}"), r#"{"a": Pending, "b": Pending}"#);
            assert!(poll_once(&mut fut).await.is_none());
            assert_eq!(format!("{fut:?}"), r#"{"a": Ready, "b": Pending}"#);
            assert!(!fut.is_terminated());
            assert_eq!(fut.await, Ok(vec![("a", 1), ("b", 2)]));
        });
    }
}
