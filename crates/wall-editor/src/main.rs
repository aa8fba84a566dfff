//! Solid Wall editor entry point
//!
//! Headless driver: adds a wall with the default dimensions and, when a
//! path argument is given, saves the resulting scene to it.

use wall_editor::actions::{ActionContext, dispatch_action};
use wall_editor::state::{EditorAction, EditorState};
use wall_core::{WALL_DEFAULT_HEIGHT, WALL_DEFAULT_LENGTH, WALL_DEFAULT_WIDTH};

fn main() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wall_editor=debug,wall_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Solid Wall editor");

    let state = EditorState::default().into_shared();

    {
        let mut state = state.lock();
        state.queue_action(EditorAction::AddWall {
            edit: false,
            length: WALL_DEFAULT_LENGTH,
            width: WALL_DEFAULT_WIDTH,
            height: WALL_DEFAULT_HEIGHT,
        });
        if let Some(path) = std::env::args().nth(1) {
            state.queue_action(EditorAction::SaveScene(Some(path.into())));
        }
    }

    let actions = state.lock().take_actions();
    let ctx = ActionContext::new(&state);
    for action in actions {
        dispatch_action(action, &ctx);
    }

    let state = state.lock();
    tracing::info!(objects = state.scene.object_count(), "scene ready");
}
