//! Action handling module
//!
//! This module contains the action dispatch system for the wall editor.
//! Actions are queued in EditorState and processed in dispatch order.
//! Routing actions through here is how a host surface (menu entry, key
//! binding, script) reaches the operators without touching scene state
//! directly.

mod file;
mod object;

use crate::state::{EditorAction, SharedEditorState};

pub use file::handle_file_action;
pub use object::handle_object_action;

/// Context for action handlers
pub struct ActionContext<'a> {
    pub state: &'a SharedEditorState,
}

impl<'a> ActionContext<'a> {
    pub fn new(state: &'a SharedEditorState) -> Self {
        Self { state }
    }
}

/// Dispatch an action to the appropriate handler
pub fn dispatch_action(action: EditorAction, ctx: &ActionContext) {
    match action {
        // File actions
        EditorAction::NewScene | EditorAction::SaveScene(_) | EditorAction::LoadScene(_) => {
            handle_file_action(action, ctx);
        }

        // Object actions
        EditorAction::AddWall { .. }
        | EditorAction::SelectObject(_)
        | EditorAction::DeleteActiveObject
        | EditorAction::SetCursor(_)
        | EditorAction::SetMode(_) => {
            handle_object_action(action, ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EditorState;

    #[test]
    fn test_dispatch_add_wall() {
        let state = EditorState::default().into_shared();
        let ctx = ActionContext::new(&state);

        dispatch_action(
            EditorAction::AddWall {
                edit: false,
                length: 1.0,
                width: 0.25,
                height: 0.5,
            },
            &ctx,
        );

        let state = state.lock();
        assert_eq!(state.scene.object_count(), 1);
        assert!(state.modified);
        assert!(state.scene.active().is_some());
    }

    #[test]
    fn test_dispatch_edit_without_active_leaves_scene_untouched() {
        let state = EditorState::default().into_shared();
        let ctx = ActionContext::new(&state);

        dispatch_action(
            EditorAction::AddWall {
                edit: true,
                length: 1.0,
                width: 0.25,
                height: 0.5,
            },
            &ctx,
        );

        let state = state.lock();
        assert_eq!(state.scene.object_count(), 0);
        assert!(!state.modified);
    }

    #[test]
    fn test_dispatch_select_and_delete() {
        let state = EditorState::default().into_shared();
        let ctx = ActionContext::new(&state);

        dispatch_action(
            EditorAction::AddWall {
                edit: false,
                length: 1.0,
                width: 0.25,
                height: 0.5,
            },
            &ctx,
        );
        let id = state.lock().scene.active().unwrap();

        dispatch_action(EditorAction::SelectObject(None), &ctx);
        assert!(state.lock().scene.active().is_none());

        dispatch_action(EditorAction::SelectObject(Some(id)), &ctx);
        assert_eq!(state.lock().scene.active(), Some(id));

        dispatch_action(EditorAction::DeleteActiveObject, &ctx);
        let state = state.lock();
        assert_eq!(state.scene.object_count(), 0);
        assert!(state.scene.active().is_none());
    }
}
