//! Bounded look-ahead stage.

use async_trait::async_trait;
use futures::channel::mpsc::{channel, Receiver};
use futures_util::{SinkExt, StreamExt};
use tokio::spawn;

use crate::error::StreamResult;
use crate::stream::core::DataStream;

/// Keeps up to `buffer_size` upstream elements in flight ahead of the
/// consumer.
///
/// On the first `next()` a pull task takes ownership of the upstream and
/// feeds a bounded channel; the channel is the fixed-capacity FIFO of
/// outstanding results, so delivery order is upstream order regardless of
/// when the individual fetches complete. Once issued, an upstream request
/// cannot be withdrawn; dropping the stage merely stops further pulls.
pub struct PrefetchStream<S>
where
    S: DataStream + 'static,
{
    upstream: Option<S>,
    buffer_size: usize,
    receiver: Option<Receiver<StreamResult<S::Item>>>,
    done: bool,
}

impl<S> PrefetchStream<S>
where
    S: DataStream + 'static,
{
    pub(crate) fn new(upstream: S, buffer_size: usize) -> Self {
        Self {
            upstream: Some(upstream),
            buffer_size,
            receiver: None,
            done: false,
        }
    }

    fn start(mut upstream: S, buffer_size: usize) -> Receiver<StreamResult<S::Item>> {
        let (mut tx, rx) = channel(buffer_size);
        spawn(async move {
            loop {
                match upstream.next().await {
                    Ok(Some(item)) => {
                        if tx.send(Ok(item)).await.is_err() {
                            log::debug!("prefetch consumer dropped, stopping pull task");
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        let _ = tx.send(Err(e)).await;
                        break;
                    }
                }
            }
        });
        rx
    }
}

#[async_trait]
impl<S> DataStream for PrefetchStream<S>
where
    S: DataStream + 'static,
{
    type Item = S::Item;

    async fn next(&mut self) -> StreamResult<Option<S::Item>> {
        if self.done {
            return Ok(None);
        }
        if self.receiver.is_none() {
            if let Some(upstream) = self.upstream.take() {
                self.receiver = Some(Self::start(upstream, self.buffer_size));
            }
        }
        match self.receiver.as_mut() {
            Some(receiver) => match receiver.next().await {
                Some(Ok(item)) => Ok(Some(item)),
                Some(Err(e)) => {
                    self.done = true;
                    Err(e)
                }
                None => {
                    self.done = true;
                    Ok(None)
                }
            },
            None => Ok(None),
        }
    }
}
