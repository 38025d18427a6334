// WHY: shared combinators so every view composes the same way
// Each stage is a pull-based flat-map over the previous one.

use futures::future::{self, Either};
use futures::stream::{self, Stream, StreamExt};
use tracing::debug;

use crate::error::{CorpusError, Result};

/// Expand each successful item into the units `f` produces for it.
/// Errors, upstream or from `f`, pass through as single items.
pub(crate) fn flat_map_ok<S, T, U, F>(upstream: S, mut f: F) -> impl Stream<Item = Result<U>>
where
    S: Stream<Item = Result<T>>,
    F: FnMut(T) -> Result<Vec<U>>,
{
    upstream
        .map(move |item| match item.and_then(&mut f) {
            Ok(units) => Either::Left(stream::iter(units.into_iter().map(Ok::<U, CorpusError>))),
            Err(e) => Either::Right(stream::once(future::ready(Err(e)))),
        })
        .flatten()
}

/// Pass items through until an error matching `should_halt`, which is yielded and ends the stream
pub(crate) fn halt_after<S, T, P>(upstream: S, should_halt: P) -> impl Stream<Item = Result<T>>
where
    S: Stream<Item = Result<T>>,
    P: Fn(&CorpusError) -> bool,
{
    upstream.scan(false, move |halted, item| {
        if *halted {
            return future::ready(None);
        }
        if let Err(ref e) = item {
            if should_halt(e) {
                debug!("Stopping stream after error: {}", e);
                *halted = true;
            }
        }
        future::ready(Some(item))
    })
}
