//! LRU Cache Module
//!
//! Fixed-capacity cache ordered by recency of use.
//!
//! Nodes live in a `Vec` and link to each other by index, forming a doubly
//! linked list:
//! - Head = Most recently used
//! - Tail = Least recently used
//!
//! A `HashMap` maps each key to its node index, so lookup, promotion and
//! eviction are all O(1).

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::mem;

use parking_lot::Mutex;

const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: usize,
    next: usize,
}

// == LRU Cache ==
/// Single-threaded LRU cache.
///
/// Every operation takes `&mut self`; share it across threads through
/// [`SyncLruCache`] or an external lock.
#[derive(Debug)]
pub struct LruCache<K, V> {
    capacity: usize,
    map: HashMap<K, usize>,
    nodes: Vec<Node<K, V>>,
    head: usize,
    tail: usize,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache. A capacity of 0 stores nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            head: NIL,
            tail: NIL,
        }
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss leaves the ordering untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        Some(&self.nodes[idx].value)
    }

    /// Returns the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|&idx| &self.nodes[idx].value)
    }

    // == Put ==
    /// Inserts or updates `key` and marks it most recently used.
    ///
    /// Inserting a new key into a full cache first evicts the least recently
    /// used entry, which is returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.move_to_front(idx);
            return None;
        }

        if self.nodes.len() >= self.capacity {
            // Reuse the tail slot for the new entry.
            let idx = self.tail;
            self.unlink(idx);
            let evicted = mem::replace(
                &mut self.nodes[idx],
                Node {
                    key: key.clone(),
                    value,
                    prev: NIL,
                    next: NIL,
                },
            );
            self.map.remove(&evicted.key);
            self.map.insert(key, idx);
            self.push_front(idx);
            return Some((evicted.key, evicted.value));
        }

        let idx = self.nodes.len();
        self.nodes.push(Node {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        });
        self.map.insert(key, idx);
        self.push_front(idx);
        None
    }

    // == Remove ==
    /// Removes `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.map.remove(key)?;
        self.unlink(idx);

        let last = self.nodes.len() - 1;
        let removed = self.nodes.swap_remove(idx);
        if idx != last {
            // The former last node now sits at `idx`; repoint its neighbours.
            let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
            if prev == NIL {
                self.head = idx;
            } else {
                self.nodes[prev].next = idx;
            }
            if next == NIL {
                self.tail = idx;
            } else {
                self.nodes[next].prev = idx;
            }
            if let Some(slot) = self.map.get_mut::<K>(&self.nodes[idx].key) {
                *slot = idx;
            }
        }
        Some(removed.value)
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            if cursor == NIL {
                return None;
            }
            let node = &self.nodes[cursor];
            cursor = node.next;
            Some((&node.key, &node.value))
        })
    }

    /// Returns the least recently used entry, the next eviction candidate.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.nodes.get(self.tail).map(|node| (&node.key, &node.value))
    }

    // == Len ==
    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the maximum number of entries the cache retains.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == List Maintenance ==
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;
        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
        if self.tail == NIL {
            self.tail = idx;
        }
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head != idx {
            self.unlink(idx);
            self.push_front(idx);
        }
    }

    /// Panics if the map and the linked order disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.map.len(), self.nodes.len());
        assert!(self.len() <= self.capacity);

        let forward: Vec<&K> = self.iter().map(|(k, _)| k).collect();
        assert_eq!(forward.len(), self.len());
        for key in forward {
            let idx = self.map[key];
            assert!(self.nodes[idx].key == *key);
        }

        let mut backward = 0;
        let mut cursor = self.tail;
        while cursor != NIL {
            backward += 1;
            cursor = self.nodes[cursor].prev;
        }
        assert_eq!(backward, self.len());
    }
}

// == Sync LRU Cache ==
/// [`LruCache`] behind a single exclusive lock.
///
/// Reads promote entries, so `get` takes the lock exclusively as well.
#[derive(Debug)]
pub struct SyncLruCache<K, V> {
    inner: Mutex<LruCache<K, V>>,
}

impl<K: Eq + Hash + Clone, V: Clone> SyncLruCache<K, V> {
    // == Constructor ==
    /// Creates an empty shared cache. A capacity of 0 stores nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
        }
    }

    // == Get ==
    /// Returns a clone of the value for `key` and marks it most recently used.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Returns a clone of the value for `key` without changing its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().peek(key).cloned()
    }

    // == Put ==
    /// Inserts or updates `key`, returning the entry evicted to make room.
    pub fn put(&self, key: K, value: V) -> Option<(K, V)> {
        self.inner.lock().put(key, value)
    }

    // == Remove ==
    /// Removes `key`, returning its value if it was present.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.lock().remove(key)
    }

    /// Keys from most to least recently used.
    pub fn keys_mru(&self) -> Vec<K> {
        self.inner.lock().iter().map(|(k, _)| k.clone()).collect()
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the maximum number of entries the cache retains.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}
