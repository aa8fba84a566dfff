//! Scene graph and editor mode state
//!
//! The host application's implicit scene state (active object, selection,
//! cursor, edit mode) is modeled here as an explicit value that operators
//! receive and mutate. The scene serializes to RON for persistence.

use std::collections::HashMap;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use wall_core::QuadMesh;

/// Editor mode for the active object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    /// Whole-object editing (move, select, delete)
    #[default]
    Object,
    /// Structural editing of the active object's geometry
    Edit,
}

/// An object in the scene: a named placement of a mesh datablock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: Uuid,
    pub name: String,
    /// Object origin in world space
    pub location: Vec3,
    /// Selection flag
    pub selected: bool,
    /// Mesh geometry, in object-local coordinates
    pub mesh: QuadMesh,
}

impl SceneObject {
    /// Create a new object at the world origin
    pub fn new(name: impl Into<String>, mesh: QuadMesh) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: Vec3::ZERO,
            selected: false,
            mesh,
        }
    }
}

/// Serialization format for the scene file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneData {
    version: u32,
    name: String,
    objects: Vec<SceneObject>,
    active: Option<Uuid>,
    cursor: Vec3,
    mode: EditorMode,
}

/// The editor scene: all objects plus the shared editor state
#[derive(Debug, Clone)]
pub struct Scene {
    /// File format version
    pub version: u32,
    /// Scene name
    pub name: String,
    /// All objects (keyed by ID for O(1) lookup)
    objects: HashMap<Uuid, SceneObject>,
    /// Currently active object
    active: Option<Uuid>,
    /// 3D cursor, where new objects are placed
    pub cursor: Vec3,
    /// Current editor mode
    pub mode: EditorMode,
}

impl From<Scene> for SceneData {
    fn from(scene: Scene) -> Self {
        let mut objects: Vec<SceneObject> = scene.objects.into_values().collect();
        objects.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            version: scene.version,
            name: scene.name,
            objects,
            active: scene.active,
            cursor: scene.cursor,
            mode: scene.mode,
        }
    }
}

impl From<SceneData> for Scene {
    fn from(data: SceneData) -> Self {
        let objects: HashMap<Uuid, SceneObject> =
            data.objects.into_iter().map(|o| (o.id, o)).collect();
        // An active id that does not resolve to an object is dropped
        let active = data.active.filter(|id| objects.contains_key(id));
        Self {
            version: data.version,
            name: data.name,
            objects,
            active,
            cursor: data.cursor,
            mode: data.mode,
        }
    }
}

impl Serialize for Scene {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        SceneData::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Scene {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = SceneData::deserialize(deserializer)?;
        Ok(Scene::from(data))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("Scene")
    }
}

impl Scene {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: 1,
            name: name.into(),
            objects: HashMap::new(),
            active: None,
            cursor: Vec3::ZERO,
            mode: EditorMode::default(),
        }
    }

    /// Save the scene to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SceneError> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| SceneError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize the scene to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, SceneError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| SceneError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load a scene from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SceneError::Io(e.to_string()))?;
        let scene: Scene =
            ron::from_str(&content).map_err(|e| SceneError::Deserialize(e.to_string()))?;
        Ok(scene)
    }

    // ============== Object Accessors ==============

    /// Number of objects in the scene
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Iterate over all objects
    pub fn objects_iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.values()
    }

    /// Add an object to the scene, returns the object ID
    pub fn add_object(&mut self, object: SceneObject) -> Uuid {
        let id = object.id;
        self.objects.insert(id, object);
        id
    }

    /// Get an object by ID
    pub fn get_object(&self, id: Uuid) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    /// Get a mutable object by ID
    pub fn get_object_mut(&mut self, id: Uuid) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    /// Remove an object by ID, clearing the active reference if needed
    pub fn remove_object(&mut self, id: Uuid) -> Option<SceneObject> {
        if self.active == Some(id) {
            self.active = None;
        }
        self.objects.remove(&id)
    }

    // ============== Selection & Active Object ==============

    /// The currently active object ID
    pub fn active(&self) -> Option<Uuid> {
        self.active
    }

    /// Reference to the currently active object
    pub fn active_object(&self) -> Option<&SceneObject> {
        self.active.and_then(|id| self.objects.get(&id))
    }

    /// Mutable reference to the currently active object
    pub fn active_object_mut(&mut self) -> Option<&mut SceneObject> {
        self.active.and_then(|id| self.objects.get_mut(&id))
    }

    /// Set the active object (None clears it)
    pub fn set_active(&mut self, id: Option<Uuid>) {
        self.active = id.filter(|id| self.objects.contains_key(id));
    }

    /// Clear the selection flag on every object
    pub fn deselect_all(&mut self) {
        for object in self.objects.values_mut() {
            object.selected = false;
        }
    }

    /// Find a free object name, suffixing `.001`, `.002`, ... when taken
    pub fn unique_object_name(&self, base: &str) -> String {
        if !self.objects.values().any(|o| o.name == base) {
            return base.to_string();
        }
        let mut counter = 1;
        loop {
            let candidate = format!("{base}.{counter:03}");
            if !self.objects.values().any(|o| o.name == candidate) {
                return candidate;
            }
            counter += 1;
        }
    }

    // ============== Join ==============

    /// Merge the source object's geometry into the target object
    ///
    /// The source placement is applied relative to the target before the
    /// merge, then the source object is removed from the scene.
    pub fn join(&mut self, target_id: Uuid, source_id: Uuid) -> Result<(), SceneError> {
        let source = self
            .remove_object(source_id)
            .ok_or(SceneError::ObjectNotFound(source_id))?;
        let Some(target) = self.objects.get_mut(&target_id) else {
            // Put the source back before reporting, so a bad target id
            // does not silently drop geometry.
            self.objects.insert(source.id, source);
            return Err(SceneError::ObjectNotFound(target_id));
        };

        let mut mesh = source.mesh;
        mesh.translate(source.location - target.location);
        target.mesh.merge(&mesh);
        Ok(())
    }
}

/// Scene-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("object {0} not found in the scene")]
    ObjectNotFound(Uuid),
}

#[cfg(test)]
mod tests {
    use super::*;
    use wall_core::wall_mesh;

    fn wall_object(name: &str) -> SceneObject {
        SceneObject::new(name, wall_mesh(1.0, 0.25, 0.5))
    }

    #[test]
    fn test_add_and_activate() {
        let mut scene = Scene::default();
        let id = scene.add_object(wall_object("Wall"));
        scene.set_active(Some(id));
        assert_eq!(scene.active(), Some(id));
        assert_eq!(scene.active_object().unwrap().name, "Wall");
    }

    #[test]
    fn test_set_active_rejects_unknown_id() {
        let mut scene = Scene::default();
        scene.set_active(Some(Uuid::new_v4()));
        assert_eq!(scene.active(), None);
    }

    #[test]
    fn test_remove_clears_active() {
        let mut scene = Scene::default();
        let id = scene.add_object(wall_object("Wall"));
        scene.set_active(Some(id));
        scene.remove_object(id);
        assert_eq!(scene.active(), None);
        assert_eq!(scene.object_count(), 0);
    }

    #[test]
    fn test_deselect_all() {
        let mut scene = Scene::default();
        let a = scene.add_object(wall_object("A"));
        let b = scene.add_object(wall_object("B"));
        scene.get_object_mut(a).unwrap().selected = true;
        scene.get_object_mut(b).unwrap().selected = true;
        scene.deselect_all();
        assert!(scene.objects_iter().all(|o| !o.selected));
    }

    #[test]
    fn test_unique_object_name() {
        let mut scene = Scene::default();
        assert_eq!(scene.unique_object_name("Wall"), "Wall");
        scene.add_object(wall_object("Wall"));
        assert_eq!(scene.unique_object_name("Wall"), "Wall.001");
        scene.add_object(wall_object("Wall.001"));
        assert_eq!(scene.unique_object_name("Wall"), "Wall.002");
    }

    #[test]
    fn test_join_applies_relative_placement() {
        let mut scene = Scene::default();
        let target_id = scene.add_object(wall_object("Wall"));
        let mut source = wall_object("Wall.001");
        source.location = Vec3::new(10.0, 0.0, 0.0);
        let source_id = scene.add_object(source);

        scene.join(target_id, source_id).unwrap();

        let target = scene.get_object(target_id).unwrap();
        assert_eq!(target.mesh.vertex_count(), 32);
        assert_eq!(target.mesh.face_count(), 28);
        assert!(target.mesh.validate().is_ok());
        // Source vertex 0 was (-1.25, -0.125, -0.5), shifted 10 along x
        assert_eq!(target.mesh.vertices[16], [8.75, -0.125, -0.5]);
        assert_eq!(scene.object_count(), 1);
    }

    #[test]
    fn test_join_missing_target_keeps_source() {
        let mut scene = Scene::default();
        let source_id = scene.add_object(wall_object("Wall"));
        let err = scene.join(Uuid::new_v4(), source_id).unwrap_err();
        assert!(matches!(err, SceneError::ObjectNotFound(_)));
        assert_eq!(scene.object_count(), 1);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut scene = Scene::new("Test Scene");
        let id = scene.add_object(wall_object("Wall"));
        scene.set_active(Some(id));
        scene.cursor = Vec3::new(1.0, 2.0, 3.0);
        scene.mode = EditorMode::Edit;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.ron");
        scene.save(&path).unwrap();

        let loaded = Scene::load(&path).unwrap();
        assert_eq!(loaded.name, "Test Scene");
        assert_eq!(loaded.object_count(), 1);
        assert_eq!(loaded.active(), Some(id));
        assert_eq!(loaded.cursor, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(loaded.mode, EditorMode::Edit);
        assert_eq!(loaded.get_object(id).unwrap().mesh.vertex_count(), 16);
    }
}
