//! Synchronization primitives for wavefront scheduling

pub mod barrier;

pub use barrier::WavefrontBarrier;
