pub mod iter;
mod queue;

pub use iter::{IntoIter, Iter};
pub use queue::FifoQueue;
