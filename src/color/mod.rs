pub mod factors;
pub mod transform;

pub use factors::{Channel, ChannelFactors};
pub use transform::apply;
