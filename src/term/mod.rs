//! Terminal host plumbing: framebuffer, diffing renderer, scene view and
//! decorative particles.

pub mod fb;
pub mod particles;
pub mod renderer;
pub mod view;

pub use fb::FrameBuffer;
pub use particles::ParticleField;
pub use renderer::TerminalRenderer;
pub use view::{SceneView, Viewport};
