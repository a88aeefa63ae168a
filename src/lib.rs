//! Run a keyed set of async operations concurrently, and get the results back
//! under the same keys.
//!
//! Awaiting a list of futures concurrently gives back a list of outputs, and
//! it's up to the caller to remember which position belonged to which
//! request. This crate keeps the name attached instead: operations go in
//! under a key, and each output comes back under the key of the operation that
//! produced it, regardless of the order in which they complete.
//!
//! # Operations
//!
//! - [`all()`]: Wait for all operations to complete successfully, or abort early
//!   on the first error.
//! - [`all_settled()`]: Wait for all operations to complete, capturing each
//!   success or failure as an [`Outcome`].
//!
//! Both accept any [`OperationMap`] (`Vec<(K, F)>`, `BTreeMap<K, F>`,
//! `HashMap<K, F, S>`) as well as tuples of `(key, operation)` pairs, and are
//! also available as methods through the [`prelude`]. The [`all!`] and
//! [`all_settled!`] macros return a struct with a named field per key, each
//! holding its own type.
//!
//! An operation is a zero-argument closure or function returning a future.
//! Every operation is invoked up front, and all of the resulting futures are
//! polled concurrently by the returned future.
//!
//! # Examples
//!
//! Concurrently await named operations with different output types:
//! ```rust
//! use futures_lite::future::block_on;
//!
//! block_on(async {
//!     let res = keyed_futures::all! {
//!         a: || async { Ok::<_, &str>(1) },
//!         b: || async { Ok("x") },
//!     }
//!     .await;
//!     let res = res.unwrap();
//!     assert_eq!((res.a, res.b), (1, "x"));
//! })
//! ```
//!
//! Capture failures per key instead of failing the whole batch:
//! ```rust
//! use keyed_futures::Outcome;
//! use futures_lite::future::block_on;
//!
//! async fn fetch(id: u8) -> Result<u8, &'static str> {
//!     if id == 0 { Err("boom") } else { Ok(id) }
//! }
//!
//! block_on(async {
//!     let ops: Vec<_> = [("a", 1), ("b", 0)]
//!         .into_iter()
//!         .map(|(key, id)| (key, move || fetch(id)))
//!         .collect();
//!     let res = keyed_futures::all_settled(ops).await;
//!     assert_eq!(res, vec![("a", Outcome::Fulfilled(1)), ("b", Outcome::Rejected("boom"))]);
//! })
//! ```
//!
//! # Cancellation
//!
//! The operations are not given a deadline, and are not retried. Futures only
//! make progress while they're polled, so once [`all()`] resolves to an error
//! the operations which were still in flight are no longer driven: they do
//! not keep running in the background, and are dropped along with the
//! returned future. Timeouts belong inside the operations themselves.
//!
//! Under the `std` feature every operation of a runtime map is polled with its
//! own waker, and only the operations which were woken get polled again.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]
#![allow(non_snake_case)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod operation;
mod outcome;
mod record;
mod utils;

pub mod future;

pub use future::{All, AllSettled};
pub use operation::{Operation, OperationMap};
pub use outcome::{Outcome, Status};

/// The keyed futures prelude.
pub mod prelude {
    pub use super::future::All as _;
    pub use super::future::AllSettled as _;
}

/// Helper types for tuples of `(key, operation)` pairs.
pub mod tuple {
    pub use crate::future::all::tuple::{
        All1, All10, All11, All12, All2, All3, All4, All5, All6, All7, All8, All9,
    };
    pub use crate::future::all_settled::tuple::{
        AllSettled1, AllSettled10, AllSettled11, AllSettled12, AllSettled2, AllSettled3,
        AllSettled4, AllSettled5, AllSettled6, AllSettled7, AllSettled8, AllSettled9,
    };
}

/// Helper types for runtime operation maps.
#[cfg(feature = "alloc")]
pub mod map {
    pub use crate::future::all::map::All;
    pub use crate::future::all_settled::map::AllSettled;
}

/// Start every operation, and wait for all of them to complete successfully.
///
/// This is the free-function form of [`All::all`]: it resolves to the keyed
/// outputs, or to the first error observed.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use std::collections::HashMap;
///
/// block_on(async {
///     let ops = HashMap::from([("a", || async { Ok::<_, ()>(1) })]);
///     let res = keyed_futures::all(ops).await.unwrap();
///     assert_eq!(res["a"], 1);
/// })
/// ```
pub fn all<M: All>(operations: M) -> M::Future {
    operations.all()
}

/// Start every operation, and wait for all of them to settle.
///
/// This is the free-function form of [`AllSettled::all_settled`]. The
/// returned future never fails: each key maps to the [`Outcome`] of its own
/// operation.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
/// use std::collections::BTreeMap;
///
/// block_on(async {
///     let ops: BTreeMap<&str, fn() -> std::future::Ready<Result<u8, ()>>> = BTreeMap::new();
///     assert!(keyed_futures::all_settled(ops).await.is_empty());
/// })
/// ```
pub fn all_settled<M: AllSettled>(operations: M) -> M::Future {
    operations.all_settled()
}
