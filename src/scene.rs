use uuid::Uuid;

use crate::element::{Model, Shape};
use crate::renderer::Renderer;

/// Stable handle for a model in the scene.
///
/// Indices shift when models are removed; ids do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelId(Uuid);

impl ModelId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ModelId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered collection of committed models.
///
/// Insertion order is draw order: later entries are painted on top and win hit-tests.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    models: Vec<(ModelId, Model)>,
}

impl Scene {
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Append a model on top of everything else
    pub fn push(&mut self, model: impl Into<Model>) -> ModelId {
        let id = ModelId::new();
        self.models.push((id, model.into()));
        id
    }

    /// Put a model back at `index` under an existing id. `index` is clamped to the end.
    pub fn insert(&mut self, index: usize, id: ModelId, model: Model) {
        let index = index.min(self.models.len());
        self.models.insert(index, (id, model));
    }

    pub fn remove(&mut self, index: usize) -> Option<(ModelId, Model)> {
        if index < self.models.len() {
            Some(self.models.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&Model> {
        self.models.get(index).map(|(_, model)| model)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Model> {
        self.models.get_mut(index).map(|(_, model)| model)
    }

    pub fn id_at(&self, index: usize) -> Option<ModelId> {
        self.models.get(index).map(|(id, _)| *id)
    }

    pub fn index_of(&self, id: ModelId) -> Option<usize> {
        self.models.iter().position(|(model_id, _)| *model_id == id)
    }

    pub fn get_by_id_mut(&mut self, id: ModelId) -> Option<&mut Model> {
        self.models
            .iter_mut()
            .find(|(model_id, _)| *model_id == id)
            .map(|(_, model)| model)
    }

    pub fn last(&self) -> Option<&Model> {
        self.models.last().map(|(_, model)| model)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Models in draw order (bottom first)
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Model> + ExactSizeIterator {
        self.models.iter().map(|(_, model)| model)
    }

    /// Draw every model, bottom first
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for model in self.iter() {
            model.draw(renderer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use egui::Color32;

    #[test]
    fn test_ids_survive_removal() {
        let mut scene = Scene::new();
        let a = scene.push(factory::create_line((0.0, 0.0), (1.0, 1.0), Color32::RED));
        let b = scene.push(factory::create_line((0.0, 0.0), (-1.0, 1.0), Color32::RED));

        assert_eq!(scene.index_of(b), Some(1));
        scene.remove(0);
        assert_eq!(scene.index_of(a), None);
        assert_eq!(scene.index_of(b), Some(0));
    }

    #[test]
    fn test_insert_restores_position() {
        let mut scene = Scene::new();
        scene.push(factory::create_line((0.0, 0.0), (1.0, 0.0), Color32::RED));
        let middle = scene.push(factory::create_line((0.0, 0.0), (0.0, 1.0), Color32::RED));
        scene.push(factory::create_line((0.0, 0.0), (1.0, 1.0), Color32::RED));

        let (id, model) = scene.remove(1).unwrap();
        assert_eq!(id, middle);
        scene.insert(1, id, model);
        assert_eq!(scene.index_of(middle), Some(1));
        assert_eq!(scene.len(), 3);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut scene = Scene::new();
        assert!(scene.remove(0).is_none());
    }
}
