mod frame;
mod frame_kind;
pub mod wire;

pub use frame::Frame;
pub use frame_kind::FrameKind;
