pub mod animation;
pub mod camera;
pub mod cli;
pub mod core;
pub mod error;
pub mod math;
pub mod motion;
pub mod scene;
pub mod scenes;
pub mod session;
pub mod texture;
pub mod traits;
pub mod types;

pub use animation::AnimationLoop;
pub use error::{AnimatorError, Result};
pub use scenes::{create_scene, SceneKind, SceneSetup};
pub use session::{initialize, Session, SessionSnapshot};
