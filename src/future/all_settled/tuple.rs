use super::AllSettled as AllSettledTrait;
use crate::operation::Operation;
use crate::outcome::Outcome;
use crate::utils::{trace, MaybeDone};

use core::fmt::{self, Debug};
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::FusedFuture;
use pin_project::pin_project;

macro_rules! impl_all_settled_tuple {
    ($StructName:ident $(($K:ident $F:ident $T:ident $E:ident))+) => {
        /// A future which waits for a tuple of keyed operations to settle.
        ///
        /// This `struct` is created by the [`all_settled`] method on the
        /// [`AllSettled`] trait. See its documentation for more.
        ///
        /// [`all_settled`]: crate::future::AllSettled::all_settled
        /// [`AllSettled`]: crate::future::AllSettled
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
        impl<$($K, $F, $T, $E),+> Future for $StructName<$($K, $F),+>
        where $(
            $F: Future<Output = Result<$T, $E>>,
        )+ {
            type Output = ($(($K, Outcome<$T, $E>),)+);

            fn poll(
                self: Pin<&mut Self>, cx: &mut Context<'_>
            ) -> Poll<Self::Output> {
                let mut this = self.project();

                assert!(
                    !*this.consumed,
                    "Futures must not be polled after completing"
                );

                let mut all_done = true;
                $(
                    if this.$F.as_mut().poll(cx).is_pending() {
                        all_done = false;
                    }
                )+

                if !all_done {
                    return Poll::Pending;
                }

                *this.consumed = true;
                trace!("keyed operations settled");
                match (this.keys.take(), $(this.$F.as_mut().take_output(),)+) {
                    (Some(($($K,)+)), $(Some($T),)+) => {
                        Poll::Ready(($(($K, Outcome::from($T)),)+))
                    }
                    _ => unreachable!("every slot holds an output once all are done"),
                }
            }
        }

        impl<$($K, $F, $T, $E),+> FusedFuture for $StructName<$($K, $F),+>
        where $(
            $F: Future<Output = Result<$T, $E>>,
        )+ {
            fn is_terminated(&self) -> bool {
                self.consumed
            }
        }

        #[allow(non_snake_case)]
        impl<$($K, $F, $T, $E),+> AllSettledTrait for ($(($K, $F),)+)
        where $(
            $F: Operation<Output = Result<$T, $E>>,
        )+ {
            type Output = ($(($K, Outcome<$T, $E>),)+);
            type Future = $StructName<$($K, $F::Future),+>;

            fn all_settled(self) -> Self::Future {
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

impl_all_settled_tuple! { AllSettled1 (K0 F0 T0 E0) }
impl_all_settled_tuple! { AllSettled2 (K0 F0 T0 E0) (K1 F1 T1 E1) }
impl_all_settled_tuple! { AllSettled3 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) }
impl_all_settled_tuple! { AllSettled4 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3) }
impl_all_settled_tuple! { AllSettled5 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3)
(K4 F4 T4 E4) }
impl_all_settled_tuple! { AllSettled6 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3)
(K4 F4 T4 E4) (K5 F5 T5 E5) }
impl_all_settled_tuple! { AllSettled7 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3)
(K4 F4 T4 E4) (K5 F5 T5 E5) (K6 F6 T6 E6) }
impl_all_settled_tuple! { AllSettled8 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3)
(K4 F4 T4 E4) (K5 F5 T5 E5) (K6 F6 T6 E6) (K7 F7 T7 E7) }
impl_all_settled_tuple! { AllSettled9 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3)
(K4 F4 T4 E4) (K5 F5 T5 E5) (K6 F6 T6 E6) (K7 F7 T7 E7) (K8 F8 T8 E8) }
impl_all_settled_tuple! { AllSettled10 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3)
(K4 F4 T4 E4) (K5 F5 T5 E5) (K6 F6 T6 E6) (K7 F7 T7 E7) (K8 F8 T8 E8) (K9 F9 T9 E9) }
impl_all_settled_tuple! { AllSettled11 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3)
(K4 F4 T4 E4) (K5 F5 T5 E5) (K6 F6 T6 E6) (K7 F7 T7 E7) (K8 F8 T8 E8) (K9 F9 T9 E9)
(K10 F10 T10 E10) }
impl_all_settled_tuple! { AllSettled12 (K0 F0 T0 E0) (K1 F1 T1 E1) (K2 F2 T2 E2) (K3 F3 T3 E3)
(K4 F4 T4 E4) (K5 F5 T5 E5) (K6 F6 T6 E6) (K7 F7 T7 E7) (K8 F8 T8 E8) (K9 F9 T9 E9)
(K10 F10 T10 E10) (K11 F11 T11 E11) }
