//! Operations and the keyed collections that hold them.

use core::future::{Future, IntoFuture};

#[cfg(feature = "alloc")]
use alloc::collections::{btree_map, BTreeMap};
#[cfg(feature = "alloc")]
use alloc::vec::{self, Vec};
#[cfg(feature = "std")]
use std::collections::{hash_map, HashMap};
#[cfg(feature = "std")]
use std::hash::{BuildHasher, Hash};

/// A zero-argument operation which produces a future when started.
///
/// This is implemented for every `FnOnce() -> impl IntoFuture`, so closures
/// returning `async` blocks and `async fn` items can be used directly:
///
/// ```
/// use keyed_futures::Operation;
/// use futures_lite::future::block_on;
///
/// async fn fetch() -> Result<u8, ()> {
///     Ok(12)
/// }
///
/// assert_eq!(block_on(fetch.start()), Ok(12));
/// assert_eq!(block_on((|| async { "hello" }).start()), "hello");
/// ```
pub trait Operation {
    /// The value the operation eventually produces.
    type Output;

    /// The future returned by starting the operation.
    type Future: Future<Output = Self::Output>;

    /// Invoke the operation, obtaining its future.
    fn start(self) -> Self::Future;
}

impl<F, Fut> Operation for F
where
    F: FnOnce() -> Fut,
    Fut: IntoFuture,
{
    type Output = Fut::Output;
    type Future = Fut::IntoFuture;

    #[inline]
    fn start(self) -> Self::Future {
        self().into_future()
    }
}

/// A runtime collection mapping keys to operations.
///
/// The keyed futures take an operation map apart into its entries, run the
/// operations, and collect the results back into [`OperationMap::Output`]:
/// the same kind of collection, keyed the same way, holding the results in
/// place of the operations.
///
/// For heterogeneous results, use a tuple of `(key, operation)` pairs or the
/// [`all!`][crate::all!] and [`all_settled!`][crate::all_settled!] macros
/// instead.
pub trait OperationMap {
    /// The key type.
    type Key;

    /// The operation type.
    type Operation: Operation;

    /// The same collection shape, holding `V` under each key.
    type Output<V>: FromIterator<(Self::Key, V)>;

    /// The iterator over the entries of the collection.
    type Entries: Iterator<Item = (Self::Key, Self::Operation)>;

    /// Take the collection apart into its entries.
    fn into_entries(self) -> Self::Entries;
}

/// Entries keep their position, so the output lists keys in the same order
/// as the input. Keys are not deduplicated.
#[cfg(feature = "alloc")]
impl<K, F> OperationMap for Vec<(K, F)>
where
    F: Operation,
{
    type Key = K;
    type Operation = F;
    type Output<V> = Vec<(K, V)>;
    type Entries = vec::IntoIter<(K, F)>;

    fn into_entries(self) -> Self::Entries {
        self.into_iter()
    }
}

#[cfg(feature = "alloc")]
impl<K, F> OperationMap for BTreeMap<K, F>
where
    K: Ord,
    F: Operation,
{
    type Key = K;
    type Operation = F;
    type Output<V> = BTreeMap<K, V>;
    type Entries = btree_map::IntoIter<K, F>;

    fn into_entries(self) -> Self::Entries {
        self.into_iter()
    }
}

#[cfg(feature = "std")]
impl<K, F, S> OperationMap for HashMap<K, F, S>
where
    K: Eq + Hash,
    F: Operation,
    S: BuildHasher + Default,
{
    type Key = K;
    type Operation = F;
    type Output<V> = HashMap<K, V, S>;
    type Entries = hash_map::IntoIter<K, F>;

    fn into_entries(self) -> Self::Entries {
        self.into_iter()
    }
}
