//! Ordered flattening of a stream of streams.

use async_trait::async_trait;

use crate::error::StreamResult;
use crate::stream::core::DataStream;

/// Concatenates the elements of a stream of streams, preserving order:
/// every element of inner stream *i* is delivered before any element of
/// inner stream *i + 1*.
///
/// Calls to `next()` cannot overlap because the receiver is `&mut self`,
/// so each call observes exactly the state the previous call left behind
/// no matter how slowly any inner fetch resolves. Empty inner streams are
/// skipped transparently; the caller only ever sees an element or the end
/// marker.
pub struct ChainedStream<S>
where
    S: DataStream,
    S::Item: DataStream,
{
    outer: S,
    current: Option<S::Item>,
    exhausted: bool,
}

impl<S> ChainedStream<S>
where
    S: DataStream,
    S::Item: DataStream,
{
    pub(crate) fn new(outer: S) -> Self {
        Self {
            outer,
            current: None,
            exhausted: false,
        }
    }
}

#[async_trait]
impl<S> DataStream for ChainedStream<S>
where
    S: DataStream,
    S::Item: DataStream,
{
    type Item = <S::Item as DataStream>::Item;

    async fn next(&mut self) -> StreamResult<Option<Self::Item>> {
        if self.exhausted {
            return Ok(None);
        }
        loop {
            match self.current.as_mut() {
                Some(inner) => match inner.next().await? {
                    Some(item) => return Ok(Some(item)),
                    // current inner stream drained; advance within the
                    // same logical request
                    None => self.current = None,
                },
                None => match self.outer.next().await? {
                    Some(inner) => self.current = Some(inner),
                    None => {
                        self.exhausted = true;
                        return Ok(None);
                    }
                },
            }
        }
    }
}
