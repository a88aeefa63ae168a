//! Keyed futures concurrency.
//!
//! The operations in this module take a collection of keyed operations, start
//! every one of them, and resolve to a collection of the same shape with each
//! key mapped to what its own operation produced.
//!
//! | Name         | Return signature                     | When does it return? |
//! | ---          | ---                                  | ---                  |
//! | `All`        | `Result<{k: T}, E>`                  | Return on first `Err`, wait for all to complete
//! | `AllSettled` | `{k: Outcome<T, E>}`                 | Wait for all to complete
//!
//! The following shapes are supported:
//!
//! | Input                   | Output                                  |
//! | ---                     | ---                                     |
//! | `Vec<(K, F)>`           | `Vec<(K, V)>`, in the input order       |
//! | `BTreeMap<K, F>`        | `BTreeMap<K, V>`                        |
//! | `HashMap<K, F, S>`      | `HashMap<K, V, S>`                      |
//! | `((K0, F0), (K1, F1))`  | `((K0, V0), (K1, V1))`, up to 12 entries |
//!
//! Tuples allow every entry to produce a different type. The
//! [`all!`][crate::all!] and [`all_settled!`][crate::all_settled!] macros
//! build on them to return a struct with one named field per key.
//!
//! # Examples
//!
//! ```
//! use keyed_futures::prelude::*;
//! use futures_lite::future::block_on;
//! use std::collections::BTreeMap;
//!
//! block_on(async {
//!     let mut ops = BTreeMap::new();
//!     ops.insert("a", || async { Ok::<_, &str>(1) });
//!     let res = ops.all().await;
//!     assert_eq!(res, Ok(BTreeMap::from([("a", 1)])));
//! })
//! ```
pub use all::All;
pub use all_settled::AllSettled;

pub(crate) mod all;
pub(crate) mod all_settled;
