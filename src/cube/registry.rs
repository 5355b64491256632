//! Owned, indexed camera collection with a focused slot for input routing.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::camera::Camera;

/// Stable handle into a [`CameraRegistry`]. Cameras are never removed, so a
/// handle stays valid for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraId(usize);

impl CameraId {
    /// Position of the camera in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// What a camera is used for by the cube renderer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CameraRole {
    /// Viewer-facing camera rendering into the window.
    App,
    /// Camera repositioned per face to fill the cube map.
    #[default]
    Probe,
}

/// Cameras owned by the renderer, plus which one receives input.
#[derive(Debug, Clone, Default)]
pub struct CameraRegistry {
    cameras: Vec<Camera>,
    focused: usize,
}

impl CameraRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a camera and return its handle.
    pub fn insert(&mut self, camera: Camera) -> CameraId {
        self.cameras.push(camera);
        CameraId(self.cameras.len() - 1)
    }

    /// Number of cameras.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cameras.len()
    }

    /// Whether no camera has been inserted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty()
    }

    /// Camera for `id`, if it belongs to this registry.
    #[must_use]
    pub fn get(&self, id: CameraId) -> Option<&Camera> {
        self.cameras.get(id.0)
    }

    /// Mutable camera for `id`, if it belongs to this registry.
    pub fn get_mut(&mut self, id: CameraId) -> Option<&mut Camera> {
        self.cameras.get_mut(id.0)
    }

    /// Handle of the camera receiving input.
    #[must_use]
    pub fn focused(&self) -> CameraId {
        CameraId(self.focused)
    }

    /// Route input to `id`. Unknown handles are ignored.
    pub fn focus(&mut self, id: CameraId) {
        if id.0 < self.cameras.len() {
            self.focused = id.0;
        }
    }

    /// Move focus to the next camera, wrapping around.
    pub fn cycle_focus(&mut self) -> CameraId {
        if !self.cameras.is_empty() {
            self.focused = (self.focused + 1) % self.cameras.len();
        }
        self.focused()
    }

    /// Camera receiving input, if any exist.
    pub fn focused_mut(&mut self) -> Option<&mut Camera> {
        self.cameras.get_mut(self.focused)
    }

    /// All cameras in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Camera> {
        self.cameras.iter_mut()
    }
}

impl Index<CameraId> for CameraRegistry {
    type Output = Camera;

    fn index(&self, id: CameraId) -> &Camera {
        &self.cameras[id.0]
    }
}

impl IndexMut<CameraId> for CameraRegistry {
    fn index_mut(&mut self, id: CameraId) -> &mut Camera {
        &mut self.cameras[id.0]
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn camera(width: f32) -> Camera {
        Camera::new(width, 100.0, 0.785, 0.1, 100.0, 1.0)
    }

    #[test]
    fn ids_index_in_insertion_order() {
        let mut registry = CameraRegistry::new();
        assert!(registry.is_empty());
        let a = registry.insert(camera(100.0));
        let b = registry.insert(camera(200.0));
        assert_eq!(registry.len(), 2);
        assert_eq!((a.index(), b.index()), (0, 1));
        assert_eq!(registry[b].size(), (200.0, 100.0));
        assert!(registry.get(CameraId(5)).is_none());
    }

    #[test]
    fn focus_cycles_and_wraps() {
        let mut registry = CameraRegistry::new();
        let a = registry.insert(camera(100.0));
        let b = registry.insert(camera(100.0));
        assert_eq!(registry.focused(), a);
        assert_eq!(registry.cycle_focus(), b);
        assert_eq!(registry.cycle_focus(), a);
        registry.focus(b);
        assert_eq!(registry.focused(), b);
        registry.focus(CameraId(9));
        assert_eq!(registry.focused(), b);
    }

    #[test]
    fn focused_mut_reaches_the_focused_camera() {
        let mut registry = CameraRegistry::new();
        let a = registry.insert(camera(100.0));
        let b = registry.insert(camera(100.0));
        registry.focus(b);
        if let Some(cam) = registry.focused_mut() {
            cam.set_position(Vec3::X);
        }
        assert_eq!(registry[b].position(), Vec3::X);
        assert_eq!(registry[a].position(), Vec3::ZERO);
    }

    #[test]
    fn empty_registry_has_no_focus_target() {
        let mut registry = CameraRegistry::new();
        assert!(registry.focused_mut().is_none());
        assert_eq!(registry.cycle_focus().index(), 0);
    }

    #[test]
    fn role_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            role: CameraRole,
        }
        let parsed: Wrapper = toml::from_str("role = \"app\"").unwrap();
        assert_eq!(parsed.role, CameraRole::App);
    }
}
