//! Bounded concurrent execution over item indices.

use std::future::Future;

use futures::stream::{self, StreamExt};

/// Run `work` once for every index in `0..count`, at most `width` at a time.
///
/// `on_done` receives `(index, output)` as each unit finishes, in completion
/// order. Callers store outputs by index, so the order does not matter.
pub async fn run_bounded<T, W, Fut, D>(count: usize, width: usize, work: W, mut on_done: D)
where
    W: Fn(usize) -> Fut,
    Fut: Future<Output = T>,
    D: FnMut(usize, T),
{
    let work = &work;
    let mut finished = stream::iter(0..count)
        .map(move |index| async move { (index, work(index).await) })
        .buffer_unordered(width.max(1));

    while let Some((index, output)) = finished.next().await {
        on_done(index, output);
    }
}
