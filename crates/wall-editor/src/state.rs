//! Editor state and action queue

use std::path::PathBuf;
use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;
use uuid::Uuid;

use crate::scene::{EditorMode, Scene};

/// Actions that can be performed on the editor state
#[derive(Debug, Clone)]
pub enum EditorAction {
    // File actions
    /// Start over with an empty scene
    NewScene,
    /// Save the scene (None reuses the current scene path)
    SaveScene(Option<PathBuf>),
    /// Load a scene file
    LoadScene(PathBuf),

    // Object actions
    /// Add a wall primitive, or refresh the active one when `edit` is set
    AddWall {
        edit: bool,
        length: f32,
        width: f32,
        height: f32,
    },
    /// Make an object active and selected (None clears the selection)
    SelectObject(Option<Uuid>),
    /// Delete the active object
    DeleteActiveObject,
    /// Move the 3D cursor
    SetCursor(Vec3),
    /// Switch between object and edit mode
    SetMode(EditorMode),
}

/// Editor application state
pub struct EditorState {
    /// Current scene
    pub scene: Scene,
    /// Scene file path
    pub scene_path: Option<PathBuf>,
    /// Has unsaved changes
    pub modified: bool,
    /// Pending actions
    pending_actions: Vec<EditorAction>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            scene: Scene::default(),
            scene_path: None,
            modified: false,
            pending_actions: Vec::new(),
        }
    }
}

impl EditorState {
    /// Replace the scene with a fresh one
    pub fn new_scene(&mut self) {
        self.scene = Scene::default();
        self.scene_path = None;
        self.modified = false;
    }

    /// Queue an action for the next dispatch pass
    pub fn queue_action(&mut self, action: EditorAction) {
        self.pending_actions.push(action);
    }

    /// Take all pending actions, leaving the queue empty
    pub fn take_actions(&mut self) -> Vec<EditorAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Wrap the state for sharing across threads
    pub fn into_shared(self) -> SharedEditorState {
        Arc::new(Mutex::new(self))
    }
}

/// Editor state shared between the dispatcher and its callers
pub type SharedEditorState = Arc<Mutex<EditorState>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_and_take_actions() {
        let mut state = EditorState::default();
        state.queue_action(EditorAction::NewScene);
        state.queue_action(EditorAction::SetMode(EditorMode::Edit));

        let actions = state.take_actions();
        assert_eq!(actions.len(), 2);
        assert!(state.take_actions().is_empty());
    }

    #[test]
    fn test_new_scene_resets_state() {
        let mut state = EditorState::default();
        state.modified = true;
        state.scene_path = Some(PathBuf::from("old.ron"));
        state.new_scene();
        assert!(!state.modified);
        assert!(state.scene_path.is_none());
        assert_eq!(state.scene.object_count(), 0);
    }
}
