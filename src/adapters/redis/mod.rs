//! Redis adapters.

mod sequence_allocator;

pub use sequence_allocator::RedisSequenceAllocator;
