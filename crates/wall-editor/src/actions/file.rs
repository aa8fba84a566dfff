//! File action handlers (scene persistence)

use crate::scene::Scene;
use crate::state::EditorAction;

use super::ActionContext;

/// Handle scene file actions (new, save, load)
pub fn handle_file_action(action: EditorAction, ctx: &ActionContext) {
    match action {
        EditorAction::NewScene => {
            ctx.state.lock().new_scene();
            tracing::info!("created new scene");
        }

        EditorAction::SaveScene(path) => {
            let mut state = ctx.state.lock();
            let Some(path) = path.or_else(|| state.scene_path.clone()) else {
                tracing::warn!("no path to save the scene to");
                return;
            };
            match state.scene.save(&path) {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "saved scene");
                    state.scene_path = Some(path);
                    state.modified = false;
                }
                Err(e) => {
                    tracing::error!("failed to save scene: {e}");
                }
            }
        }

        EditorAction::LoadScene(path) => {
            match Scene::load(&path) {
                Ok(scene) => {
                    let mut state = ctx.state.lock();
                    state.scene = scene;
                    state.scene_path = Some(path);
                    state.modified = false;
                    tracing::info!(objects = state.scene.object_count(), "loaded scene");
                }
                Err(e) => {
                    tracing::error!(path = %path.display(), "failed to load scene: {e}");
                }
            }
        }

        // Object actions are routed to handle_object_action
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::dispatch_action;
    use crate::state::EditorState;

    #[test]
    fn test_save_and_load_through_actions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.ron");

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
        dispatch_action(EditorAction::SaveScene(Some(path.clone())), &ctx);
        assert!(!state.lock().modified);

        dispatch_action(EditorAction::NewScene, &ctx);
        assert_eq!(state.lock().scene.object_count(), 0);

        dispatch_action(EditorAction::LoadScene(path), &ctx);
        let state = state.lock();
        assert_eq!(state.scene.object_count(), 1);
        assert!(state.scene_path.is_some());
    }
}
