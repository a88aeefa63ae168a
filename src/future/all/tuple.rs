use super::All as AllTrait;
use crate::operation::Operation;
use crate::utils::{trace, MaybeDone};

use core::fmt::{self, Debug};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::FusedFuture;
use pin_project::pin_project;

macro_rules! impl_all_tuple {
    ($StructName:ident $(($K:ident $F:ident $T:ident))+) => {
        /// A future which waits for a tuple of keyed operations to complete
        /// successfully, or abort early on error.
        ///
        /// This `struct` is created by the [`all`] method on the [`All`] trait. See
        /// its documentation for more.
        ///
        /// [`all`]: crate::future::All::all
        /// [`All`]: crate::future::All
        #[pin_project]
        #[must_use = "futures do nothing unless you `.await` or poll them"]
        #[allow(non_snake_case)]
        pub struct $StructName<$($K, $F: Future),+> {
            consumed: bool,
            keys: Option<($($K,)+)>,
            $(#[pin] $F: MaybeDone<$F>,)+
        }

        #[allow(non_snake_case)]
        impl<$($K, $F),+> Debug for $StructName<$($K, $F),+>
        where $(
            $K: Debug,
            $F: Future,
        )+ {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.keys {
                    Some(($($K,)+)) => f.debug_map()
                        $(.entry($K, &self.$F.state()))+
                        .finish(),
                    None => f.debug_list()
                        $(.entry(&self.$F.state()))+
                        .finish(),
                }
            }
        }

        #[allow(non_snake_case)]
        impl<E, $($K, $F, $T),+> Future for $StructName<$($K, $F),+>
        where $(
            $F: Future<Output = Result<$T, E>>,
        )+ {
            type Output = Result<($(($K, $T),)+), E>;

            fn poll(
                self: Pin<&mut Self>, cx: &mut Context<'_>
            ) -> Poll<Self::Output> {
                let mut this = self.project();

                assert!(
                    !*this.consumed,
                    "Futures must not be polled after completing"
                );

                let mut all_done = true;
                let mut failure = None;
                $(
                    if this.$F.as_mut().poll(cx).is_pending() {
                        all_done = false;
                    } else if failure.is_none() {
                        failure = this.$F.as_mut().take_err();
                    }
                )+

                if let Some(err) = failure {
                    trace!("keyed operation failed, short-circuiting");
                    *this.consumed = true;
                    return Poll::Ready(Err(err));
                }

                if !all_done {
                    return Poll::Pending;
                }

                *this.consumed = true;
                match (this.keys.take(), $(this.$F.as_mut().take_ok(),)+) {
                    (Some(($($K,)+)), $(Some($T),)+) => Poll::Ready(Ok(($(($K, $T),)+))),
                    _ => unreachable!("every slot holds an output once all are done"),
                }
            }
        }

        impl<E, $($K, $F, $T),+> FusedFuture for $StructName<$($K, $F),+>
        where $(
            $F: Future<Output = Result<$T, E>>,
        )+ {
            fn is_terminated(&self) -> bool {
                self.consumed
            }
        }

        #[allow(non_snake_case)]
        impl<E, $($K, $F, $T),+> AllTrait for ($(($K, $F),)+)
        where $(
            $F: Operation<Output = Result<$T, E>>,
        )+ {
            type Output = ($(($K, $T),)+);
            type Error = E;
            type Future = $StructName<$($K, $F::Future),+>;

            fn all(self) -> Self::Future {
                let ($(($K, $F),)+) = self;
                $StructName {
                    consumed: false,
                    keys: Some(($($K,)+)),
                    $($F: MaybeDone::new($F.start()),)+
                }
            }
        }
    };
}

impl_all_tuple! { All1 (K0 F0 T0) }
impl_all_tuple! { All2 (K0 F0 T0) (K1 F1 T1) }
impl_all_tuple! { All3 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) }
impl_all_tuple! { All4 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) }
impl_all_tuple! { All5 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) (K4 F4 T4) }
impl_all_tuple! { All6 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) (K4 F4 T4) (K5 F5 T5) }
impl_all_tuple! { All7 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) (K4 F4 T4) (K5 F5 T5)
(K6 F6 T6) }
impl_all_tuple! { All8 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) (K4 F4 T4) (K5 F5 T5)
(K6 F6 T6) (K7 F7 T7) }
impl_all_tuple! { All9 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) (K4 F4 T4) (K5 F5 T5)
(K6 F6 T6) (K7 F7 T7) (K8 F8 T8) }
impl_all_tuple! { All10 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) (K4 F4 T4) (K5 F5 T5)
(K6 F6 T6) (K7 F7 T7) (K8 F8 T8) (K9 F9 T9) }
impl_all_tuple! { All11 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) (K4 F4 T4) (K5 F5 T5)
(K6 F6 T6) (K7 F7 T7) (K8 F8 T8) (K9 F9 T9) (K10 F10 T10) }
impl_all_tuple! { All12 (K0 F0 T0) (K1 F1 T1) (K2 F2 T2) (K3 F3 T3) (K4 F4 T4) (K5 F5 T5)
(K6 F6 T6) (K7 F7 T7) (K8 F8 T8) (K9 F9 T9) (K10 F10 T10) (K11 F11 T11) }
