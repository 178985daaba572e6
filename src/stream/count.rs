//! Counting pass-through stages: `take` and `skip`.

use async_trait::async_trait;

use crate::error::StreamResult;
use crate::stream::core::DataStream;

/// Forwards at most `max_count` upstream elements, then reports
/// exhaustion. A negative `max_count` disables the limit.
pub struct TakeStream<S> {
    upstream: S,
    max_count: i64,
    count: i64,
}

impl<S> TakeStream<S> {
    pub(crate) fn new(upstream: S, max_count: i64) -> Self {
        Self {
            upstream,
            max_count,
            count: 0,
        }
    }
}

#[async_trait]
impl<S> DataStream for TakeStream<S>
where
    S: DataStream,
{
    type Item = S::Item;

    async fn next(&mut self) -> StreamResult<Option<S::Item>> {
        if self.max_count >= 0 && self.count >= self.max_count {
            return Ok(None);
        }
        self.count += 1;
        self.upstream.next().await
    }
}

/// Discards the first `max_count` upstream elements, then forwards one
/// upstream call per call. A negative `max_count` skips nothing.
pub struct SkipStream<S> {
    upstream: S,
    max_count: i64,
    count: i64,
}

impl<S> SkipStream<S> {
    pub(crate) fn new(upstream: S, max_count: i64) -> Self {
        Self {
            upstream,
            max_count,
            count: 0,
        }
    }
}

#[async_trait]
impl<S> DataStream for SkipStream<S>
where
    S: DataStream,
{
    type Item = S::Item;

    async fn next(&mut self) -> StreamResult<Option<S::Item>> {
        while self.count < self.max_count {
            self.count += 1;
            // short-circuit if upstream runs dry inside the skip quota
            if self.upstream.next().await?.is_none() {
                return Ok(None);
            }
        }
        self.upstream.next().await
    }
}
