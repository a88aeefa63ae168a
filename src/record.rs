//! Record-shaped keyed concurrency.
//!
//! The macros in this module give every key its own named field, so the
//! output of each operation keeps its own type and is accessed by name.

/// Run a set of named operations concurrently, failing fast on the first
/// error.
///
/// Each `name: operation` pair becomes a field of the returned record. The
/// operations are started as soon as the macro is evaluated, and the returned
/// future resolves to `Ok(record)` once all of them have succeeded, or to the
/// error of the first one observed failing. All operations must share the
/// same error type.
///
/// The record implements `Debug`, `Clone`, `PartialEq` and `Eq` when its
/// fields do. At most 12 operations can be given.
///
/// # Examples
///
/// ```
/// use futures_lite::future::block_on;
///
/// async fn fetch_name(name: &str) -> Result<String, std::io::Error> {
///     Ok(format!("{name}_100"))
/// }
///
/// block_on(async {
///     let res = keyed_futures::all! {
///         tom: || fetch_name("tom"),
///         bob: || async { Ok(100) },
///     }
///     .await?;
///
///     assert_eq!(res.tom, "tom_100");
///     assert_eq!(res.bob, 100);
///     Ok::<_, std::io::Error>(())
/// })
/// .unwrap();
/// ```
#[macro_export]
macro_rules! all {
    () => {
        ::core::future::ready(::core::result::Result::<_, ::core::convert::Infallible>::Ok({
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            struct Record {}
            Record {}
        }))
    };
    ($($key:ident : $operation:expr),+ $(,)?) => {{
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[allow(non_camel_case_types)]
        struct Record<$($key),+> {
            $($key: $key,)+
        }

        let future = $crate::future::All::all((
            $((::core::stringify!($key), $operation),)+
        ));
        async move {
            match future.await {
                ::core::result::Result::Ok(($((_, $key),)+)) => {
                    ::core::result::Result::Ok(Record { $($key,)+ })
                }
                ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
            }
        }
    }};
}

/// Run a set of named operations concurrently, capturing every outcome.
///
/// Each `name: operation` pair becomes a field of the returned record, holding
/// an [`Outcome`][crate::Outcome]. The operations are started as soon as the
/// macro is evaluated, and the returned future resolves once every operation
/// has completed. Operations may have different error types.
///
/// # Examples
///
/// ```
/// use keyed_futures::Outcome;
/// use futures_lite::future::block_on;
///
/// block_on(async {
///     let res = keyed_futures::all_settled! {
///         user: || async { Ok::<_, ()>(("1", 100)) },
///         products: || async { Err::<Vec<u32>, _>("Failed to fetch") },
///     }
///     .await;
///
///     assert_eq!(res.user, Outcome::Fulfilled(("1", 100)));
///     assert_eq!(res.products, Outcome::Rejected("Failed to fetch"));
/// })
/// ```
#[macro_export]
macro_rules! all_settled {
    () => {
        ::core::future::ready({
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            struct Record {}
            Record {}
        })
    };
    ($($key:ident : $operation:expr),+ $(,)?) => {{
        #[derive(Debug, Clone, PartialEq, Eq)]
        #[allow(non_camel_case_types)]
        struct Record<$($key),+> {
            $($key: $key,)+
        }

        let future = $crate::future::AllSettled::all_settled((
            $((::core::stringify!($key), $operation),)+
        ));
        async move {
            let ($((_, $key),)+) = future.await;
            Record { $($key,)+ }
        }
    }};
}

#[cfg(test)]
mod test {
    use crate::utils::test_utils::after;
    use crate::{Outcome, Status};

    use futures_lite::future::block_on;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        id: String,
        value: u32,
    }

    async fn fetch_name(name: &str) -> Result<String, &'static str> {
        Ok(format!("{name}_100"))
    }

    async fn fetch_number(num: u32) -> Result<u32, &'static str> {
        after(num as usize % 3, Ok(num)).await
    }

    async fn fetch_user(id: &str) -> Result<User, &'static str> {
        Ok(User { id: id.to_owned(), value: 100 })
    }

    async fn failing_fetch() -> Result<u32, &'static str> {
        Err("Failed to fetch")
    }

    #[test]
    fn mixed_return_types() {
        block_on(async {
            let res = crate::all! {
                tom: || fetch_name("tom"),
                jerry: || fetch_name("jerry"),
                bob: || fetch_number(100),
                alice: || fetch_number(200),
            }
            .await
            .unwrap();

            assert_eq!(res.tom, "tom_100");
            assert_eq!(res.jerry, "jerry_100");
            assert_eq!(res.bob, 100);
            assert_eq!(res.alice, 200);
        });
    }

    #[test]
    fn complex_objects() {
        block_on(async {
            let res = crate::all! {
                user1: || fetch_user("1"),
                user2: || fetch_user("2"),
            }
            .await
            .unwrap();
            assert_eq!(res.user1, User { id: "1".into(), value: 100 });
            assert_eq!(res.user2.id, "2");
        });
    }

    #[test]
    fn rejects_if_any_fails() {
        block_on(async {
            let res = crate::all! {
                success: || fetch_number(1),
                failure: failing_fetch,
            }
            .await;
            assert_eq!(res.map(|r| r.success), Err("Failed to fetch"));
        });
    }

    #[test]
    fn operations_start_eagerly() {
        let invoked = Cell::new(0);
        let fut = crate::all! {
            a: || {
                invoked.set(invoked.get() + 1);
                fetch_number(1)
            },
            b: || {
                invoked.set(invoked.get() + 1);
                fetch_number(2)
            },
        };
        assert_eq!(invoked.get(), 2);
        let res = block_on(fut).unwrap();
        assert_eq!((res.a, res.b), (1, 2));
    }

    #[test]
    fn settled_mixed() {
        block_on(async {
            let res = crate::all_settled! {
                success1: || fetch_name("success"),
                failure: failing_fetch,
                success2: || fetch_number(200),
            }
            .await;

            assert_eq!(res.success1, Outcome::Fulfilled("success_100".to_owned()));
            assert_eq!(res.success2.status(), Status::Fulfilled);
            assert_eq!(res.success2.value(), Some(&200));
            assert_eq!(res.failure.status(), Status::Rejected);
            assert_eq!(res.failure.reason(), Some(&"Failed to fetch"));
        });
    }

    #[test]
    #[allow(clippy::unit_cmp)]
    fn absent_values() {
        block_on(async {
            let res = crate::all! {
                void: || async { Ok::<(), ()>(()) },
                null: || async { Ok::<Option<u8>, ()>(None) },
            }
            .await
            .unwrap();
            assert_eq!(res.void, ());
            assert_eq!(res.null, None);
        });
    }

    #[test]
    fn empty() {
        block_on(async {
            let all = crate::all! {}.await;
            assert!(all.is_ok());
            let settled = crate::all_settled! {}.await;
            assert_eq!(format!("{settled:?}"), "Record");
        });
    }

    #[test]
    fn records_compare_structurally() {
        block_on(async {
            let run = || crate::all! { a: || fetch_number(4), b: || fetch_name("x") };
            assert_eq!(run().await, run().await);
        });
    }
}
