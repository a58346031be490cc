use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::model::{Coords, Image};

use super::ImageStore;

/// In-memory [`ImageStore`] keyed by coordinate.
#[derive(Debug, Default)]
pub struct MemoryStore {
    images: RwLock<BTreeMap<Coords, Arc<Image>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_images(images: impl IntoIterator<Item = Image>) -> Self {
        let store = Self::new();
        for image in images {
            store.put_image(image);
        }
        store
    }

    /// Stores `image` at its own coordinate, replacing any previous image there.
    pub fn put_image(&self, image: Image) -> Arc<Image> {
        let image = Arc::new(image);
        self.write()
            .insert(image.coords().clone(), Arc::clone(&image));
        image
    }

    pub fn remove_image(&self, coords: &Coords) -> Option<Arc<Image>> {
        self.write().remove(coords)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<Coords, Arc<Image>>> {
        self.images.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<Coords, Arc<Image>>> {
        self.images.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ImageStore for MemoryStore {
    fn has_image(&self, coords: &Coords) -> bool {
        self.read().contains_key(coords)
    }

    fn image(&self, coords: &Coords) -> Option<Arc<Image>> {
        self.read().get(coords).cloned()
    }

    fn any_image(&self) -> Option<Arc<Image>> {
        self.read().values().next().cloned()
    }

    fn axes(&self) -> Vec<String> {
        let images = self.read();
        let axes = images
            .keys()
            .flat_map(|coords| coords.axes().map(str::to_string))
            .collect::<BTreeSet<_>>();
        axes.into_iter().collect()
    }

    fn axis_length(&self, axis: &str) -> usize {
        self.read()
            .keys()
            .filter_map(|coords| coords.index(axis))
            .max()
            .map_or(0, |max| max + 1)
    }

    fn max_indices(&self) -> Coords {
        let images = self.read();
        let mut maxima = BTreeMap::<&str, usize>::new();
        for coords in images.keys() {
            for (axis, index) in coords.iter() {
                let entry = maxima.entry(axis).or_insert(index);
                *entry = (*entry).max(index);
            }
        }
        maxima
            .into_iter()
            .fold(Coords::builder(), |builder, (axis, index)| {
                builder.index(axis, index)
            })
            .build()
    }
}
