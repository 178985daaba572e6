//! Lazy pull-based stream stages and combinators.
//!
//! A pipeline is built by chaining stages over a leaf producer; no stage
//! performs upstream work until `next()` is first called on it.

pub mod chained;
pub mod constructors;
pub mod core;
pub mod count;
pub mod prefetch;
pub mod shuffle;
pub mod transform;

// Re-export core types
pub use core::{BoxDataStream, DataStream, DataStreamExt};

// Re-export constructors
pub use constructors::{
    empty, from_concatenated, from_concatenated_fn, from_fn, from_futures_stream, from_items,
    EmptyStream, FnStream, FromStream, ItemsStream,
};

// Re-export stage types
pub use chained::ChainedStream;
pub use count::{SkipStream, TakeStream};
pub use prefetch::PrefetchStream;
pub use shuffle::ShuffleStream;
pub use transform::{BatchPump, FilterPump, MapPump, Pump, QueuedStream};
