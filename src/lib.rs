pub mod error;
pub mod random;
pub mod ring_buffer;
pub mod stream;

// Re-export the whole stream surface at the crate root
pub use error::{StreamError, StreamResult};
pub use stream::*;
