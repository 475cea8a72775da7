//! Set: a hash-backed set with the usual algebra.
//!
//! Thin layer over `hashbrown::HashSet` adding whole-set operations
//! (`insert_all`, `contains_any`, `union`, ...) and a deterministic `Debug`
//! rendering that sorts elements by their debug text.

use core::fmt;
use core::hash::Hash;
use hashbrown::HashSet;

/// A set of elements of some hashable type.
#[derive(Clone)]
pub struct Set<E> {
    items: HashSet<E>,
}

impl<E> Set<E>
where
    E: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds an element; returns whether it was newly inserted.
    pub fn insert(&mut self, v: E) -> bool {
        self.items.insert(v)
    }

    /// Removes an element; absent elements are ignored.
    pub fn remove(&mut self, v: &E) -> bool {
        self.items.remove(v)
    }

    pub fn contains(&self, v: &E) -> bool {
        self.items.contains(v)
    }

    /// Reports whether any element of `other` is in `self`.
    pub fn contains_any(&self, other: &Set<E>) -> bool {
        other.items.iter().any(|v| self.items.contains(v))
    }

    /// Reports whether every element of `other` is in `self`.
    pub fn contains_all(&self, other: &Set<E>) -> bool {
        other.items.iter().all(|v| self.items.contains(v))
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&E) -> bool) {
        self.items.retain(keep);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates elements in an indeterminate order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.items.iter()
    }
}

impl<E> Set<E>
where
    E: Eq + Hash + Clone,
{
    /// Adds the elements of `other` to `self`.
    pub fn insert_all(&mut self, other: &Set<E>) {
        for v in &other.items {
            self.items.insert(v.clone());
        }
    }

    /// Removes the elements of `other` from `self`; elements present in
    /// `other` but not `self` are ignored.
    pub fn remove_all(&mut self, other: &Set<E>) {
        for v in &other.items {
            self.items.remove(v);
        }
    }

    /// A new set containing the elements of both sets.
    pub fn union(&self, other: &Set<E>) -> Set<E> {
        Set {
            items: self.items.union(&other.items).cloned().collect(),
        }
    }

    /// A new set containing the elements present in both sets.
    pub fn intersection(&self, other: &Set<E>) -> Set<E> {
        Set {
            items: self.items.intersection(&other.items).cloned().collect(),
        }
    }

    /// A new set containing the elements of `self` not present in `other`.
    pub fn difference(&self, other: &Set<E>) -> Set<E> {
        Set {
            items: self.items.difference(&other.items).cloned().collect(),
        }
    }
}

impl<E> Default for Set<E>
where
    E: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> PartialEq for Set<E>
where
    E: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<E> Eq for Set<E> where E: Eq + Hash {}

impl<E> FromIterator<E> for Set<E>
where
    E: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> Extend<E> for Set<E>
where
    E: Eq + Hash,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, E> IntoIterator for &'a Set<E> {
    type Item = &'a E;
    type IntoIter = hashbrown::hash_set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<E> IntoIterator for Set<E> {
    type Item = E;
    type IntoIter = hashbrown::hash_set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// Deterministic output: elements sorted by their debug text.
impl<E> fmt::Debug for Set<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut texts: Vec<String> = self.items.iter().map(|v| format!("{v:?}")).collect();
        texts.sort();
        f.write_str("{")?;
        for (i, t) in texts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(t)?;
        }
        f.write_str("}")
    }
}
