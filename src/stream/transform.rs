//! Buffering stages whose transformation is not one-to-one.
//!
//! `QueuedStream` decouples "how many upstream pulls were needed" from
//! "how many results were produced": its pump performs one unit of
//! upstream work per call and appends zero or more finished results to
//! an output queue that `next()` drains FIFO.

use async_trait::async_trait;
use std::future::Future;
use std::marker::PhantomData;

use crate::error::StreamResult;
use crate::ring_buffer::GrowingRingBuffer;
use crate::stream::core::DataStream;

/// One unit of upstream work for a [`QueuedStream`].
#[async_trait]
pub trait Pump: Send {
    type Out: Send + 'static;

    /// Pull from upstream and push finished results onto `queue`.
    ///
    /// Returns `true` while progress was made; `false` only when upstream
    /// is exhausted and nothing more can be queued. Once it has returned
    /// `false` it keeps returning `false`.
    async fn pump(&mut self, queue: &mut GrowingRingBuffer<Self::Out>) -> StreamResult<bool>;
}

/// Stage that drives a [`Pump`] until its output queue can answer one call
pub struct QueuedStream<P: Pump> {
    pump: P,
    queue: GrowingRingBuffer<P::Out>,
}

impl<P: Pump> QueuedStream<P> {
    pub(crate) fn new(pump: P) -> Self {
        Self {
            pump,
            queue: GrowingRingBuffer::new(),
        }
    }
}

#[async_trait]
impl<P> DataStream for QueuedStream<P>
where
    P: Pump,
{
    type Item = P::Out;

    async fn next(&mut self) -> StreamResult<Option<P::Out>> {
        while self.queue.is_empty() {
            if !self.pump.pump(&mut self.queue).await? {
                return Ok(None);
            }
        }
        Ok(self.queue.shift())
    }
}

/// Pump applying an async transform to each upstream element
pub struct MapPump<S, F, Fut> {
    upstream: S,
    transform: F,
    _marker: PhantomData<fn() -> Fut>,
}

impl<S, F, Fut> MapPump<S, F, Fut> {
    pub(crate) fn new(upstream: S, transform: F) -> Self {
        Self {
            upstream,
            transform,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<S, U, F, Fut> Pump for MapPump<S, F, Fut>
where
    S: DataStream,
    U: Send + 'static,
    F: FnMut(S::Item) -> Fut + Send + 'static,
    Fut: Future<Output = StreamResult<U>> + Send + 'static,
{
    type Out = U;

    async fn pump(&mut self, queue: &mut GrowingRingBuffer<U>) -> StreamResult<bool> {
        match self.upstream.next().await? {
            Some(item) => {
                let mapped = (self.transform)(item).await?;
                queue.push(mapped);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Pump dropping elements an async predicate rejects
pub struct FilterPump<S, F, Fut> {
    upstream: S,
    predicate: F,
    _marker: PhantomData<fn() -> Fut>,
}

impl<S, F, Fut> FilterPump<S, F, Fut> {
    pub(crate) fn new(upstream: S, predicate: F) -> Self {
        Self {
            upstream,
            predicate,
            _marker: PhantomData,
        }
    }
}

#[async_trait]
impl<S, F, Fut> Pump for FilterPump<S, F, Fut>
where
    S: DataStream,
    F: FnMut(&S::Item) -> Fut + Send + 'static,
    Fut: Future<Output = StreamResult<bool>> + Send + 'static,
{
    type Out = S::Item;

    async fn pump(&mut self, queue: &mut GrowingRingBuffer<S::Item>) -> StreamResult<bool> {
        match self.upstream.next().await? {
            Some(item) => {
                // a rejected element still counts as progress
                if (self.predicate)(&item).await? {
                    queue.push(item);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Pump grouping upstream elements into fixed-size batches
pub struct BatchPump<S: DataStream> {
    upstream: S,
    batch_size: usize,
    small_last_batch: bool,
    in_progress: Vec<S::Item>,
    exhausted: bool,
}

impl<S: DataStream> BatchPump<S> {
    pub(crate) fn new(upstream: S, batch_size: usize, small_last_batch: bool) -> Self {
        assert!(batch_size > 0, "batch size must be positive");
        Self {
            upstream,
            batch_size,
            small_last_batch,
            in_progress: Vec::with_capacity(batch_size),
            exhausted: false,
        }
    }
}

#[async_trait]
impl<S> Pump for BatchPump<S>
where
    S: DataStream,
{
    type Out = Vec<S::Item>;

    async fn pump(&mut self, queue: &mut GrowingRingBuffer<Vec<S::Item>>) -> StreamResult<bool> {
        if self.exhausted {
            return Ok(false);
        }
        match self.upstream.next().await? {
            Some(item) => {
                self.in_progress.push(item);
                if self.in_progress.len() == self.batch_size {
                    queue.push(std::mem::take(&mut self.in_progress));
                }
                Ok(true)
            }
            None => {
                self.exhausted = true;
                if self.small_last_batch && !self.in_progress.is_empty() {
                    // emit the trailing partial group exactly once
                    queue.push(std::mem::take(&mut self.in_progress));
                    return Ok(true);
                }
                self.in_progress.clear();
                Ok(false)
            }
        }
    }
}
