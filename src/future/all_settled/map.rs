use super::AllSettled as AllSettledTrait;
use crate::operation::{Operation, OperationMap};
use crate::outcome::Outcome;
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

/// A future which waits for all keyed operations to settle.
///
/// This `struct` is created by the [`all_settled`] method on the [`AllSettled`]
/// trait. See its documentation for more.
///
/// [`all_settled`]: crate::future::AllSettled::all_settled
/// [`AllSettled`]: crate::future::AllSettled
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct AllSettled<M>
where
    M: OperationMap,
{
    consumed: bool,
    pending: usize,
    keys: Vec<M::Key>,
    wakers: WakerVec,
    slots: Pin<Box<[MaybeDone<OperationFuture<M>>]>>,
}

impl<M> AllSettled<M>
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

impl<M, T, E> Future for AllSettled<M>
where
    M: OperationMap,
    M::Operation: Operation<Output = Result<T, E>>,
{
    type Output = M::Output<Outcome<T, E>>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        let slots = &mut *this.slots;
        let pending = &mut *this.pending;
        this.wakers.for_each_ready(cx.waker(), |index, cx| {
            let Some(mut slot) = get_pin_mut(slots.as_mut(), index) else {
                return;
            };
            if slot.is_pending() && slot.as_mut().poll(cx).is_ready() {
                *pending -= 1;
            }
        });

        if *this.pending > 0 {
            return Poll::Pending;
        }

        *this.consumed = true;
        trace!(entries = this.keys.len(), "keyed operations settled");
        let keys = mem::take(this.keys);
        let output = keys
            .into_iter()
            .zip(iter_pin_mut(this.slots.as_mut()))
            .map(|(key, slot)| match slot.take_output() {
                Some(result) => (key, Outcome::from(result)),
                None => unreachable!("every slot holds an output once all are settled"),
            })
            .collect();
        Poll::Ready(output)
    }
}

impl<M, T, E> FusedFuture for AllSettled<M>
where
    M: OperationMap,
    M::Operation: Operation<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.consumed
    }
}

impl<M> fmt::Debug for AllSettled<M>
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

impl<K, F, T, E> AllSettledTrait for Vec<(K, F)>
where
    F: Operation<Output = Result<T, E>>,
{
    type Output = Vec<(K, Outcome<T, E>)>;
    type Future = AllSettled<Self>;

    fn all_settled(self) -> Self::Future {
        AllSettled::new(self)
    }
}

impl<K, F, T, E> AllSettledTrait for BTreeMap<K, F>
where
    K: Ord,
    F: Operation<Output = Result<T, E>>,
{
    type Output = BTreeMap<K, Outcome<T, E>>;
    type Future = AllSettled<Self>;

    fn all_settled(self) -> Self::Future {
        AllSettled::new(self)
    }
}

#[cfg(feature = "std")]
impl<K, F, S, T, E> AllSettledTrait for HashMap<K, F, S>
where
    K: Eq + Hash,
    F: Operation<Output = Result<T, E>>,
    S: BuildHasher + Default,
{
    type Output = HashMap<K, Outcome<T, E>, S>;
    type Future = AllSettled<Self>;

    fn all_settled(self) -> Self::Future {
        AllSettled::new(self)
    }
}
