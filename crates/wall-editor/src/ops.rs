//! Mesh operators
//!
//! Operators take their parameters by value and mutate an explicit
//! [`Scene`], so the create/replace/join decision logic is an ordinary
//! state machine over {no active object, object mode, edit mode} and the
//! `edit` flag.

use uuid::Uuid;

use wall_core::{
    WALL_DEFAULT_HEIGHT, WALL_DEFAULT_LENGTH, WALL_DEFAULT_WIDTH, WALL_PARAM_MAX, WALL_PARAM_MIN,
    wall_mesh,
};

use crate::scene::{EditorMode, Scene, SceneError, SceneObject};

/// Add a wall primitive to the scene, or refresh an existing one
///
/// With `edit` unset the operator creates a new object at the scene
/// cursor and makes it active. With `edit` set it regenerates the active
/// object's geometry in place. Dimensions outside the supported range are
/// clamped, matching the limits the interactive properties advertise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddWall {
    /// Whether to replace the active object's geometry instead of adding
    pub edit: bool,
    /// Half-span of the straight run
    pub length: f32,
    /// Wall thickness
    pub width: f32,
    /// Half-height
    pub height: f32,
}

impl Default for AddWall {
    fn default() -> Self {
        Self {
            edit: false,
            length: WALL_DEFAULT_LENGTH,
            width: WALL_DEFAULT_WIDTH,
            height: WALL_DEFAULT_HEIGHT,
        }
    }
}

impl AddWall {
    /// Create an add operator with the given dimensions
    pub fn new(length: f32, width: f32, height: f32) -> Self {
        Self {
            edit: false,
            length,
            width,
            height,
        }
    }

    fn clamped(&self) -> (f32, f32, f32) {
        (
            self.length.clamp(WALL_PARAM_MIN, WALL_PARAM_MAX),
            self.width.clamp(WALL_PARAM_MIN, WALL_PARAM_MAX),
            self.height.clamp(WALL_PARAM_MIN, WALL_PARAM_MAX),
        )
    }

    /// Run the operator against the scene
    ///
    /// Returns the ID of the object that ends up holding the wall
    /// geometry: the new object, or the active object when editing or
    /// joining.
    pub fn execute(&self, scene: &mut Scene) -> Result<Uuid, OperatorError> {
        let mode = scene.mode;
        let (length, width, height) = self.clamped();

        if self.edit {
            // Replace the active object's geometry in place.
            let Some(active_id) = scene.active() else {
                return Err(OperatorError::NoActiveObject);
            };
            let mesh = wall_mesh(length, width, height);
            scene.deselect_all();
            let object = scene
                .get_object_mut(active_id)
                .ok_or(OperatorError::NoActiveObject)?;
            object.selected = true;
            // The datablock is only swapped in object mode; in edit mode
            // the geometry stays under the user's edit.
            if mode == EditorMode::Object {
                object.mesh = mesh;
            }
            return Ok(active_id);
        }

        let mesh = wall_mesh(length, width, height);
        scene.deselect_all();

        let name = scene.unique_object_name(&mesh.name);
        let mut object = SceneObject::new(name, mesh);
        object.location = scene.cursor;
        object.selected = true;
        let new_id = scene.add_object(object);

        match (scene.active(), mode) {
            (Some(active_id), EditorMode::Edit) => {
                // The active object is being structurally edited: fold the
                // new geometry into it and keep it under edit.
                scene.join(active_id, new_id)?;
                if let Some(active) = scene.get_object_mut(active_id) {
                    active.selected = true;
                }
                Ok(active_id)
            }
            _ => {
                scene.set_active(Some(new_id));
                Ok(new_id)
            }
        }
    }
}

/// Operator errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum OperatorError {
    #[error("nothing to edit: the scene has no active object")]
    NoActiveObject,
    #[error(transparent)]
    Scene(#[from] SceneError),
}
