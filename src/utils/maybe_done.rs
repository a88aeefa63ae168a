use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use pin_project::pin_project;

use super::PollState;

/// A slot holding a future that may have completed.
///
/// Each entry of a keyed operation is driven through one of these: the
/// future is polled until it resolves, its output is parked in the slot, and
/// the output is moved out once the parent future is ready to build its
/// result.
#[derive(Debug)]
#[pin_project(project = MaybeDoneProj, project_replace = MaybeDoneReplace)]
pub(crate) enum MaybeDone<Fut: Future> {
    /// A not-yet-completed future
    Future(#[pin] Fut),

    /// The output of the completed future
    Done(Fut::Output),

    /// The empty variant after the output has been taken.
    Gone,
}

impl<Fut: Future> MaybeDone<Fut> {
    pub(crate) fn new(future: Fut) -> Self {
        Self::Future(future)
    }

    /// Returns `true` if the future has not completed yet.
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Future(_))
    }

    /// Report where this slot is in its lifecycle.
    #[inline]
    pub(crate) fn state(&self) -> PollState {
        match self {
            Self::Future(_) => PollState::Pending,
            Self::Done(_) => PollState::Ready,
            Self::Gone => PollState::Consumed,
        }
    }

    /// Move the output out of the slot, leaving it [`Gone`][Self::Gone].
    ///
    /// Returns `None` if the future has not completed yet, or if the output
    /// was already taken.
    #[inline]
    pub(crate) fn take_output(self: Pin<&mut Self>) -> Option<Fut::Output> {
        if !matches!(&*self, Self::Done(_)) {
            return None;
        }
        match self.project_replace(Self::Gone) {
            MaybeDoneReplace::Done(output) => Some(output),
            _ => None,
        }
    }
}

impl<T, E, Fut> MaybeDone<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    /// Take the `Ok(output)` of the slot without driving it towards completion.
    /// If the future is done but is an `Err(_)`, this will return `None`.
    #[inline]
    pub(crate) fn take_ok(self: Pin<&mut Self>) -> Option<T> {
        if !matches!(&*self, Self::Done(Ok(_))) {
            return None;
        }
        self.take_output().and_then(Result::ok)
    }

    /// Take the `Err(output)` of the slot without driving it towards completion.
    /// If the future is done but is an `Ok(_)`, this will return `None`.
    #[inline]
    pub(crate) fn take_err(self: Pin<&mut Self>) -> Option<E> {
        if !matches!(&*self, Self::Done(Err(_))) {
            return None;
        }
        self.take_output().and_then(Result::err)
    }
}

impl<Fut: Future> Future for MaybeDone<Fut> {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let output = match self.as_mut().project() {
            MaybeDoneProj::Future(fut) => ready!(fut.poll(cx)),
            MaybeDoneProj::Done(_) => return Poll::Ready(()),
            MaybeDoneProj::Gone => panic!("MaybeDone polled after value taken"),
        };
        self.set(Self::Done(output));
        Poll::Ready(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::future;
    use core::pin::pin;

    #[test]
    fn take_once() {
        futures_lite::future::block_on(async {
            let mut slot = pin!(MaybeDone::new(future::ready(Ok::<_, ()>(12))));
            assert!(matches!(slot.state(), PollState::Pending));
            assert_eq!(slot.as_mut().take_ok(), None);

            slot.as_mut().await;
            assert!(matches!(slot.state(), PollState::Ready));
            assert_eq!(slot.as_mut().take_err(), None);
            assert_eq!(slot.as_mut().take_ok(), Some(12));
            assert!(matches!(slot.state(), PollState::Consumed));
            assert_eq!(slot.as_mut().take_ok(), None);
        });
    }

    #[test]
    fn take_err() {
        futures_lite::future::block_on(async {
            let mut slot = pin!(MaybeDone::new(future::ready(Err::<u8, _>("boom"))));
            slot.as_mut().await;
            assert_eq!(slot.as_mut().take_ok(), None);
            assert_eq!(slot.as_mut().take_err(), Some("boom"));
        });
    }
}
