//! Leaf producers and top-level entry points.

use async_trait::async_trait;
use futures_core::Stream;
use futures_util::StreamExt;
use std::future::Future;
use std::marker::PhantomData;

use crate::error::StreamResult;
use crate::stream::chained::ChainedStream;
use crate::stream::core::{DataStream, DataStreamExt};
use crate::stream::count::TakeStream;

// ================================
// Leaf producers
// ================================

/// Stream over a fixed sequence of items
pub struct ItemsStream<T: Send + 'static> {
    cursor: std::vec::IntoIter<T>,
}

/// Create a stream from a fixed sequence; elements come back in order,
/// followed by the end marker.
pub fn from_items<T>(items: Vec<T>) -> ItemsStream<T>
where
    T: Send + 'static,
{
    ItemsStream {
        cursor: items.into_iter(),
    }
}

#[async_trait]
impl<T> DataStream for ItemsStream<T>
where
    T: Send + 'static,
{
    type Item = T;

    async fn next(&mut self) -> StreamResult<Option<T>> {
        Ok(self.cursor.next())
    }
}

/// Stream that is exhausted from the start
pub struct EmptyStream<T> {
    _marker: PhantomData<T>,
}

/// Create a stream that completes immediately
pub fn empty<T>() -> EmptyStream<T>
where
    T: Send + 'static,
{
    EmptyStream {
        _marker: PhantomData,
    }
}

#[async_trait]
impl<T> DataStream for EmptyStream<T>
where
    T: Send + 'static,
{
    type Item = T;

    async fn next(&mut self) -> StreamResult<Option<T>> {
        Ok(None)
    }
}

/// Stream backed by a zero-argument producer function
pub struct FnStream<F, Fut> {
    producer: F,
    _marker: PhantomData<fn() -> Fut>,
}

/// Create a stream that calls `producer` once per `next()`. The producer
/// signals exhaustion by returning `Ok(None)`; it is infinite by default
/// unless composed with `take`.
pub fn from_fn<T, F, Fut>(producer: F) -> FnStream<F, Fut>
where
    T: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = StreamResult<Option<T>>> + Send + 'static,
{
    FnStream {
        producer,
        _marker: PhantomData,
    }
}

#[async_trait]
impl<T, F, Fut> DataStream for FnStream<F, Fut>
where
    T: Send + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = StreamResult<Option<T>>> + Send + 'static,
{
    type Item = T;

    async fn next(&mut self) -> StreamResult<Option<T>> {
        (self.producer)().await
    }
}

// ================================
// Stream-of-streams entry points
// ================================

/// Concatenate a stream of streams into one stream: all elements of the
/// first inner stream, then all of the second, and so on, in order.
pub fn from_concatenated<S>(streams: S) -> ChainedStream<S>
where
    S: DataStream,
    S::Item: DataStream,
{
    ChainedStream::new(streams)
}

/// Invoke a stream-producing function `count` times and concatenate the
/// results. Sugar over [`from_fn`] and [`from_concatenated`].
pub fn from_concatenated_fn<S, F, Fut>(
    producer: F,
    count: i64,
) -> ChainedStream<TakeStream<FnStream<F, Fut>>>
where
    S: DataStream + 'static,
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = StreamResult<Option<S>>> + Send + 'static,
{
    from_concatenated(from_fn(producer).take(count))
}

// ================================
// futures interop
// ================================

/// Pull adapter over a futures `Stream`
pub struct FromStream<St> {
    inner: St,
}

/// Wrap any futures `Stream` as a pull stream.
pub fn from_futures_stream<St>(inner: St) -> FromStream<St>
where
    St: Stream + Unpin + Send,
    St::Item: Send + 'static,
{
    FromStream { inner }
}

#[async_trait]
impl<St> DataStream for FromStream<St>
where
    St: Stream + Unpin + Send,
    St::Item: Send + 'static,
{
    type Item = St::Item;

    async fn next(&mut self) -> StreamResult<Option<St::Item>> {
        Ok(self.inner.next().await)
    }
}
