//! Run with `cargo test --features tracing`.

use futures_lite::future::block_on;
use keyed_futures::prelude::*;

use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_writer(move || writer.clone())
        .without_time()
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, captured.contents())
}

#[test]
fn emits_fan_out_and_completion() {
    let (res, logs) = capture(|| {
        block_on(async {
            [("a", 1), ("b", 2)]
                .into_iter()
                .map(|(key, n)| (key, move || async move { Ok::<_, ()>(n) }))
                .collect::<Vec<_>>()
                .all()
                .await
        })
    });
    assert_eq!(res, Ok(vec![("a", 1), ("b", 2)]));
    assert!(logs.contains("started keyed operations"), "{logs}");
    assert!(logs.contains("entries=2"), "{logs}");
    assert!(logs.contains("keyed operations completed"), "{logs}");
}

#[test]
fn emits_short_circuit() {
    let (res, logs) = capture(|| {
        block_on(async {
            (("a", || async { Err::<u8, _>("boom") }),)
                .all()
                .await
        })
    });
    assert_eq!(res, Err("boom"));
    assert!(logs.contains("short-circuiting"), "{logs}");
}

#[test]
fn emits_settled() {
    let (res, logs) = capture(|| {
        block_on(async {
            let ops: Vec<(&str, fn() -> std::future::Ready<Result<u8, ()>>)> =
                vec![("a", || std::future::ready(Err(())))];
            keyed_futures::all_settled(ops).await
        })
    });
    assert_eq!(res.len(), 1);
    assert!(logs.contains("keyed operations settled"), "{logs}");
}
