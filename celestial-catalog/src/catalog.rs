use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::messier::messier_objects;
use crate::object::CatalogObject;

static MESSIER_CATALOG: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let catalog = Catalog::new(messier_objects());
    tracing::debug!(objects = catalog.len(), "loaded Messier catalog");
    Arc::new(catalog)
});

/// An ordered, immutable collection of catalog objects.
///
/// Order is significant: nearest-object matching breaks ties in favor of the
/// earlier entry.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    objects: Vec<CatalogObject>,
}

impl Catalog {
    pub fn new(objects: Vec<CatalogObject>) -> Self {
        Self { objects }
    }

    /// The shared built-in Messier catalog.
    pub fn messier() -> Arc<Catalog> {
        Arc::clone(&MESSIER_CATALOG)
    }

    pub fn objects(&self) -> &[CatalogObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogObject> {
        self.objects.iter()
    }

    /// Case-insensitive lookup by identifier (`"m31"`, `"M31"`).
    pub fn by_id(&self, id: &str) -> Option<&CatalogObject> {
        let id = id.trim();
        self.objects.iter().find(|o| o.id().eq_ignore_ascii_case(id))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogObject;
    type IntoIter = std::slice::Iter<'a, CatalogObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
