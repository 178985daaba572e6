//! Core pull contract and the chainable combinator surface.

use async_stream::stream;
use async_trait::async_trait;
use futures_util::stream::{BoxStream, StreamExt};
use std::future::Future;

use crate::error::StreamResult;
use crate::stream::chained::ChainedStream;
use crate::stream::constructors::{from_concatenated, from_items, ItemsStream};
use crate::stream::count::{SkipStream, TakeStream};
use crate::stream::prefetch::PrefetchStream;
use crate::stream::shuffle::ShuffleStream;
use crate::stream::transform::{BatchPump, FilterPump, MapPump, QueuedStream};

/// The pull contract every pipeline stage implements.
///
/// `Ok(None)` is the end marker. Exhaustion is terminal and idempotent:
/// after the first `Ok(None)`, every later call also returns `Ok(None)`.
/// A stage serves one consumer; `&mut self` on `next` forces calls into
/// the order they were issued.
#[async_trait]
pub trait DataStream: Send {
    type Item: Send + 'static;

    /// Produce the next element, or `Ok(None)` once the stream is exhausted.
    async fn next(&mut self) -> StreamResult<Option<Self::Item>>;
}

#[async_trait]
impl<S> DataStream for Box<S>
where
    S: DataStream + ?Sized,
{
    type Item = S::Item;

    async fn next(&mut self) -> StreamResult<Option<Self::Item>> {
        (**self).next().await
    }
}

/// A boxed, heap-allocated pull stream
pub type BoxDataStream<T> = Box<dyn DataStream<Item = T>>;

/// Extension trait providing the chainable combinators on any stage
pub trait DataStreamExt: DataStream + Sized + 'static {
    /// Transform every element with an async function.
    ///
    /// A failing transform surfaces as `Err` from `next()` on the new
    /// stage and leaves it unusable.
    fn map<U, F, Fut>(self, transform: F) -> QueuedStream<MapPump<Self, F, Fut>>
    where
        F: FnMut(Self::Item) -> Fut + Send + 'static,
        Fut: Future<Output = StreamResult<U>> + Send + 'static,
        U: Send + 'static,
    {
        QueuedStream::new(MapPump::new(self, transform))
    }

    /// Keep only the elements the async predicate accepts.
    ///
    /// The returned future may not borrow from the element; compute what
    /// you need from the reference before the `async move` block.
    fn filter<F, Fut>(self, predicate: F) -> QueuedStream<FilterPump<Self, F, Fut>>
    where
        F: FnMut(&Self::Item) -> Fut + Send + 'static,
        Fut: Future<Output = StreamResult<bool>> + Send + 'static,
    {
        QueuedStream::new(FilterPump::new(self, predicate))
    }

    /// Group elements into ordered `Vec`s of `batch_size`.
    ///
    /// A trailing partial group is emitted only when `small_last_batch`
    /// is true, otherwise it is discarded.
    fn batch(self, batch_size: usize, small_last_batch: bool) -> QueuedStream<BatchPump<Self>> {
        QueuedStream::new(BatchPump::new(self, batch_size, small_last_batch))
    }

    /// Forward at most `count` elements. A negative count means unlimited,
    /// leaving the stream unchanged.
    fn take(self, count: i64) -> TakeStream<Self> {
        TakeStream::new(self, count)
    }

    /// Discard the first `count` elements. A negative count means skip
    /// nothing, leaving the stream unchanged.
    fn skip(self, count: i64) -> SkipStream<Self> {
        SkipStream::new(self, count)
    }

    /// All elements of this stream, then all elements of `other`.
    fn concatenate<S>(
        self,
        other: S,
    ) -> ChainedStream<ItemsStream<BoxDataStream<Self::Item>>>
    where
        S: DataStream<Item = Self::Item> + 'static,
    {
        from_concatenated(from_items(vec![self.boxed(), other.boxed()]))
    }

    /// Keep up to `buffer_size` upstream elements in flight ahead of the
    /// consumer. Elements are still delivered in upstream order.
    fn prefetch(self, buffer_size: usize) -> PrefetchStream<Self> {
        PrefetchStream::new(self, buffer_size)
    }

    /// Randomize element order within a sliding window of `buffer_size`
    /// elements, seeded from OS entropy. A window of 1 leaves the order
    /// unchanged.
    fn shuffle(self, buffer_size: usize) -> ShuffleStream<Self> {
        ShuffleStream::new(self, buffer_size, None)
    }

    /// Like [`shuffle`](DataStreamExt::shuffle), but reproducible: the same
    /// seed over the same input yields the same output sequence.
    fn shuffle_seeded(self, buffer_size: usize, seed: &str) -> ShuffleStream<Self> {
        ShuffleStream::new(self, buffer_size, Some(seed))
    }

    /// Type-erase the stage behind the pull trait.
    fn boxed(self) -> BoxDataStream<Self::Item> {
        Box::new(self)
    }

    /// Drain the stream into a `Vec`, aborting on the first error.
    /// Intended for bounded streams and tests.
    fn collect_remaining(mut self) -> impl Future<Output = StreamResult<Vec<Self::Item>>> + Send {
        async move {
            let mut items = Vec::new();
            while let Some(item) = self.next().await? {
                items.push(item);
            }
            Ok(items)
        }
    }

    /// Bridge the pipeline into the futures `Stream` world. The stream
    /// ends after yielding the first error, if any.
    fn into_futures_stream(self) -> BoxStream<'static, StreamResult<Self::Item>> {
        let mut upstream = self;
        stream! {
            loop {
                match upstream.next().await {
                    Ok(Some(item)) => yield Ok(item),
                    Ok(None) => break,
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                }
            }
        }
        .boxed()
    }
}

impl<S> DataStreamExt for S where S: DataStream + Sized + 'static {}
