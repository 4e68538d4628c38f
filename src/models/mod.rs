pub mod addon;
pub mod stream_record;

pub use addon::*;
pub use stream_record::*;
