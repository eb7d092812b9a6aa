pub mod cache;
pub mod dictionary;
pub mod normalize;
pub mod remote;
pub mod resolver;
pub mod singleflight;
