//! ObjectCollection - an ordered list of object masks

use super::ObjectMask;

/// An ordered collection of [`ObjectMask`]s
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectCollection {
    objects: Vec<ObjectMask>,
}

impl ObjectCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty collection with room for `capacity` objects
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            objects: Vec::with_capacity(capacity),
        }
    }

    /// Append an object
    pub fn push(&mut self, object: ObjectMask) {
        self.objects.push(object);
    }

    /// Number of objects
    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True when the collection holds no objects
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Get an object by index
    pub fn get(&self, index: usize) -> Option<&ObjectMask> {
        self.objects.get(index)
    }

    /// Iterate over the objects in order
    pub fn iter(&self) -> std::slice::Iter<'_, ObjectMask> {
        self.objects.iter()
    }

    /// Borrow the objects as a slice
    pub fn as_slice(&self) -> &[ObjectMask] {
        &self.objects
    }

    /// Sum of the voxel counts of all objects
    pub fn total_voxels(&self) -> usize {
        self.objects.iter().map(ObjectMask::count_on).sum()
    }

    /// Consume the collection, returning the underlying vector
    pub fn into_vec(self) -> Vec<ObjectMask> {
        self.objects
    }
}

impl From<Vec<ObjectMask>> for ObjectCollection {
    fn from(objects: Vec<ObjectMask>) -> Self {
        Self { objects }
    }
}

impl FromIterator<ObjectMask> for ObjectCollection {
    fn from_iter<I: IntoIterator<Item = ObjectMask>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ObjectCollection {
    type Item = ObjectMask;
    type IntoIter = std::vec::IntoIter<ObjectMask>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.into_iter()
    }
}

impl<'a> IntoIterator for &'a ObjectCollection {
    type Item = &'a ObjectMask;
    type IntoIter = std::slice::Iter<'a, ObjectMask>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
