pub mod interval;
pub mod loader;
pub mod rng;
pub mod sampler;
