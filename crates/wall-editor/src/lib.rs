//! Solid Wall Editor
//!
//! Host-integration layer for the wall primitive: an explicit scene graph
//! (objects, active selection, cursor, editor mode), the Add Wall
//! operator, and an action queue/dispatch system for driving both.

pub mod actions;
pub mod ops;
pub mod scene;
pub mod state;

// Re-exports for convenience
pub use ops::{AddWall, OperatorError};
pub use scene::{EditorMode, Scene, SceneError, SceneObject};
pub use state::{EditorAction, EditorState, SharedEditorState};
