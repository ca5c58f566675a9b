pub mod camera;
pub mod cli;
pub mod frame;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod types;
pub mod view;

// Re-export the per-frame core so hosts and tests reach it without digging
pub use camera::{AutoMode, CameraState};
pub use frame::{FrameClock, FrameInfo};
pub use input::{Button, GamepadSnapshot, InputAggregator, InputSignal, InputSource};
pub use view::{SceneTransforms, ViewProjection};
