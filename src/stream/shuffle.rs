//! Sliding-window shuffle stage.

use async_trait::async_trait;

use crate::error::StreamResult;
use crate::random::SeededRandom;
use crate::ring_buffer::RingBuffer;
use crate::stream::core::DataStream;

/// Reservoir-style randomization over a bounded, continuously refilled
/// window.
///
/// Every `next()` tops the reservoir up to capacity, removes a uniformly
/// random slot and immediately requests one replacement before handing
/// the element back. The window size bounds how far an element can move
/// from its original position; a window of 1 is a pass-through. For a
/// finite input the output is a permutation of the input.
pub struct ShuffleStream<S>
where
    S: DataStream,
{
    upstream: S,
    buffer: RingBuffer<S::Item>,
    random: SeededRandom,
    upstream_exhausted: bool,
}

impl<S> ShuffleStream<S>
where
    S: DataStream,
{
    pub(crate) fn new(upstream: S, buffer_size: usize, seed: Option<&str>) -> Self {
        Self {
            upstream,
            buffer: RingBuffer::new(buffer_size),
            random: SeededRandom::new(seed),
            upstream_exhausted: false,
        }
    }

    async fn refill(&mut self) -> StreamResult<()> {
        while !self.buffer.is_full() {
            match self.upstream.next().await? {
                Some(item) => self.buffer.push(item),
                None => {
                    self.upstream_exhausted = true;
                    break;
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<S> DataStream for ShuffleStream<S>
where
    S: DataStream,
{
    type Item = S::Item;

    async fn next(&mut self) -> StreamResult<Option<S::Item>> {
        if !self.upstream_exhausted {
            self.refill().await?;
        }
        if self.buffer.is_empty() {
            return Ok(None);
        }
        let index = self.random.index(self.buffer.len());
        let item = self.buffer.excise(index);
        // refill the vacated slot before handing the element back
        if !self.upstream_exhausted {
            match self.upstream.next().await? {
                Some(replacement) => self.buffer.push(replacement),
                None => self.upstream_exhausted = true,
            }
        }
        Ok(item)
    }
}
