//! OrdMap: a hash map that iterates in update order.
//!
//! Entries are kept on an intrusive doubly linked list threaded through
//! slotmap-backed nodes: less recently updated entries precede more recently
//! updated ones. Inserting a new key appends it to the back; updating an
//! existing key's value also moves it to the back. Lookup is O(1) average via
//! a hash index over precomputed entry hashes, so `K: Hash` runs once per
//! insertion and never again (lookups hash the query, not stored keys).

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
use hashbrown::HashTable;
use slotmap::{DefaultKey, SlotMap};
use std::collections::hash_map::RandomState;

struct Node<K, V> {
    key: K,
    value: V,
    hash: u64,
    prev: Option<DefaultKey>,
    next: Option<DefaultKey>,
}

/// A map ordered by recency of update, least recently updated first.
pub struct OrdMap<K, V, S = RandomState> {
    hasher: S,
    index: HashTable<DefaultKey>,
    nodes: SlotMap<DefaultKey, Node<K, V>>,
    head: Option<DefaultKey>,
    tail: Option<DefaultKey>,
}

impl<K, V> OrdMap<K, V>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }
}

impl<K, V> Default for OrdMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> OrdMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            index: HashTable::new(),
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn find_node<Q>(&self, q: &Q) -> Option<DefaultKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hasher.hash_one(q);
        self.index
            .find(hash, |&k| {
                self.nodes
                    .get(k)
                    .map(|n| n.key.borrow() == q)
                    .unwrap_or(false)
            })
            .copied()
    }

    pub fn contains_key<Q>(&self, q: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.find_node(q).is_some()
    }

    pub fn get<Q>(&self, q: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let k = self.find_node(q)?;
        self.nodes.get(k).map(|n| &n.value)
    }

    /// Mutable access to a value. Does not count as an update: the entry
    /// keeps its place in the iteration order.
    pub fn get_mut<Q>(&mut self, q: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let k = self.find_node(q)?;
        self.nodes.get_mut(k).map(|n| &mut n.value)
    }

    /// Inserts or updates `key`, returning the displaced value if any. Both
    /// a fresh insert and an update place the entry at the back of the
    /// iteration order.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.find_node(&key) {
            Some(k) => {
                let old = mem::replace(&mut self.nodes[k].value, value);
                self.unlink(k);
                self.push_back(k);
                Some(old)
            }
            None => {
                let hash = self.hasher.hash_one(&key);
                let k = self.nodes.insert(Node {
                    key,
                    value,
                    hash,
                    prev: None,
                    next: None,
                });
                self.index.insert_unique(hash, k, |&kk| {
                    self.nodes.get(kk).map(|n| n.hash).unwrap_or(0)
                });
                self.push_back(k);
                None
            }
        }
    }

    /// Removes `q`'s entry and returns its value. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.hasher.hash_one(q);
        let entry = self
            .index
            .find_entry(hash, |&k| {
                self.nodes
                    .get(k)
                    .map(|n| n.key.borrow() == q)
                    .unwrap_or(false)
            })
            .ok()?;
        let (k, _) = entry.remove();
        self.unlink(k);
        self.nodes.remove(k).map(|n| n.value)
    }

    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates entries least recently updated first.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.nodes.len(),
        }
    }

    /// Keys in map order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Values in map order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    fn push_back(&mut self, k: DefaultKey) {
        match self.tail {
            Some(t) => {
                self.nodes[t].next = Some(k);
                self.nodes[k].prev = Some(t);
            }
            None => {
                self.head = Some(k);
                self.nodes[k].prev = None;
            }
        }
        self.nodes[k].next = None;
        self.tail = Some(k);
    }

    fn unlink(&mut self, k: DefaultKey) {
        let (prev, next) = {
            let n = &self.nodes[k];
            (n.prev, n.next)
        };
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(x) => self.nodes[x].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[k].prev = None;
        self.nodes[k].next = None;
    }
}

/// Iterator over `OrdMap` entries in update order.
pub struct Iter<'a, K, V> {
    nodes: &'a SlotMap<DefaultKey, Node<K, V>>,
    cursor: Option<DefaultKey>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cursor?;
        let n = self.nodes.get(k)?;
        self.cursor = n.next;
        self.remaining -= 1;
        Some((&n.key, &n.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V, S> IntoIterator for &'a OrdMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
