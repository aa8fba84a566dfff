//! Object action handlers

use crate::ops::AddWall;
use crate::state::EditorAction;

use super::ActionContext;

/// Handle object-level actions (add, select, delete, cursor, mode)
pub fn handle_object_action(action: EditorAction, ctx: &ActionContext) {
    match action {
        EditorAction::AddWall {
            edit,
            length,
            width,
            height,
        } => {
            let op = AddWall {
                edit,
                length,
                width,
                height,
            };
            let mut state = ctx.state.lock();
            match op.execute(&mut state.scene) {
                Ok(id) => {
                    state.modified = true;
                    tracing::info!(object = %id, edit, "added wall");
                }
                Err(e) => {
                    tracing::warn!("add wall unavailable: {e}");
                }
            }
        }

        EditorAction::SelectObject(id) => {
            let mut state = ctx.state.lock();
            state.scene.deselect_all();
            state.scene.set_active(id);
            if let Some(object) = state.scene.active_object_mut() {
                object.selected = true;
            }
        }

        EditorAction::DeleteActiveObject => {
            let mut state = ctx.state.lock();
            match state.scene.active() {
                Some(id) => {
                    state.scene.remove_object(id);
                    state.modified = true;
                    tracing::info!(object = %id, "deleted object");
                }
                None => {
                    tracing::warn!("delete requested with no active object");
                }
            }
        }

        EditorAction::SetCursor(position) => {
            ctx.state.lock().scene.cursor = position;
        }

        EditorAction::SetMode(mode) => {
            ctx.state.lock().scene.mode = mode;
            tracing::debug!(?mode, "switched editor mode");
        }

        // File actions are routed to handle_file_action
        _ => {}
    }
}
