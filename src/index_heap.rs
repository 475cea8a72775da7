//! IndexHeap: a binary min-heap over a caller-supplied ordering predicate,
//! with externally tracked element positions.
//!
//! The heap reports every position change through an optional callback so
//! that the owner of an element can later repair or remove it by index in
//! O(log n), without searching. This is the classic priority-queue-with-
//! mutable-priorities arrangement: the owner keeps each live element next to
//! its last-reported index (typically a `Cell<usize>` inside the element) and
//! hands that index to [`IndexHeap::fix`] or [`IndexHeap::remove`].
//!
//! The predicate decides which side is "first": `a < b` yields a min-heap,
//! `a > b` a max-heap. Only a consistent strict weak ordering is required;
//! ties are broken arbitrarily and ordering among equal elements is not
//! stable.
//!
//! Single-threaded by construction: all mutating operations take `&mut self`,
//! the callback runs synchronously inside the triggering call, and nothing
//! blocks or allocates beyond the backing `Vec`.

/// A binary heap whose elements' positions are mirrored to the caller.
///
/// # Example
///
/// ```
/// use containerkit::IndexHeap;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// struct Task {
///     name: &'static str,
///     priority: Cell<u32>,
///     pos: Cell<usize>,
/// }
///
/// // Higher priority wins: an inverted predicate makes a max-heap.
/// let mut heap: IndexHeap<Rc<Task>, _> =
///     IndexHeap::new(|a: &Rc<Task>, b: &Rc<Task>| a.priority.get() > b.priority.get());
/// heap.set_index_changed(|t, i| t.pos.set(i));
///
/// let urgent = Rc::new(Task { name: "deploy", priority: Cell::new(1), pos: Cell::new(0) });
/// heap.push(Rc::new(Task { name: "triage", priority: Cell::new(3), pos: Cell::new(0) }));
/// heap.push(urgent.clone());
///
/// // Raise a queued task's priority, then repair the heap at the position
/// // the callback last reported for it.
/// urgent.priority.set(5);
/// heap.fix(urgent.pos.get());
///
/// assert_eq!(heap.pop().unwrap().name, "deploy");
/// assert_eq!(heap.pop().unwrap().name, "triage");
/// assert!(heap.pop().is_none());
/// ```
pub struct IndexHeap<T, L> {
    items: Vec<T>,
    less: L,
    on_index_changed: Option<Box<dyn FnMut(&T, usize)>>,
}

impl<T, L> IndexHeap<T, L>
where
    L: Fn(&T, &T) -> bool,
{
    /// Creates an empty heap ordered by `less`. No index-changed callback is
    /// installed; positions go unreported until [`set_index_changed`] is
    /// called.
    ///
    /// [`set_index_changed`]: IndexHeap::set_index_changed
    pub fn new(less: L) -> Self {
        Self {
            items: Vec::new(),
            less,
            on_index_changed: None,
        }
    }

    /// Installs the callback invoked with `(&element, new_index)` every time
    /// an element's position changes: on push, on every swap performed by a
    /// sift (both elements), on [`init`] (every element, moved or not), and
    /// for the element back-filled into the vacated slot during `pop` or
    /// `remove`.
    ///
    /// The element leaving the heap receives no callback; the return value of
    /// `pop`/`remove` is its notification. Install the callback before adding
    /// elements, otherwise their positions are unknown to the owner until
    /// they next move.
    ///
    /// [`init`]: IndexHeap::init
    pub fn set_index_changed<F>(&mut self, f: F)
    where
        F: FnMut(&T, usize) + 'static,
    {
        self.on_index_changed = Some(Box::new(f));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the root: the first element under the ordering predicate.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the element at position `i`, as last reported by the callback.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.items.get(i)
    }

    /// The backing sequence in heap order. Only the root's placement is
    /// meaningful; the rest is not sorted.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Replaces the heap's contents with `items` and establishes the heap
    /// invariant in O(n), sifting down from the last parent. Every element's
    /// final position is reported through the callback, including elements
    /// that never move.
    pub fn init(&mut self, items: Vec<T>) {
        self.items = items;
        let n = self.items.len();
        for i in 0..n {
            self.notify(i);
        }
        for i in (0..n / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Appends `x` and sifts it up until the invariant holds. O(log n).
    pub fn push(&mut self, x: T) {
        self.items.push(x);
        let i = self.items.len() - 1;
        self.notify(i);
        self.sift_up(i);
    }

    /// Removes and returns the root, or `None` if the heap is empty.
    /// O(log n).
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop();
        if !self.items.is_empty() {
            self.notify(0);
            self.sift_down(0);
        }
        root
    }

    /// Re-establishes the invariant after the element at `i` changed priority
    /// in place. Equivalent to `remove(i)` followed by a push of the new
    /// value, but cheaper. O(log n).
    ///
    /// Sifts down first; only if that moves nothing does it sift up, so both
    /// raised and lowered priorities are handled.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn fix(&mut self, i: usize) {
        let n = self.items.len();
        assert!(i < n, "fix index (is {i}) should be < len (is {n})");
        if !self.sift_down(i) {
            self.sift_up(i);
        }
    }

    /// Removes and returns the element at position `i`. The vacated slot is
    /// back-filled with the last element and the invariant repaired at `i` as
    /// [`fix`] does. O(log n).
    ///
    /// [`fix`]: IndexHeap::fix
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn remove(&mut self, i: usize) -> T {
        let n = self.items.len();
        assert!(i < n, "remove index (is {i}) should be < len (is {n})");
        self.items.swap(i, n - 1);
        let removed = self.items.pop().expect("length checked above");
        if i < self.items.len() {
            self.notify(i);
            if !self.sift_down(i) {
                self.sift_up(i);
            }
        }
        removed
    }

    fn notify(&mut self, i: usize) {
        if let Some(cb) = self.on_index_changed.as_mut() {
            cb(&self.items[i], i);
        }
    }

    // Swaps two occupied positions and reports both new positions.
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
        self.notify(i);
        self.notify(j);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !(self.less)(&self.items[i], &self.items[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    // Returns whether the element moved at all.
    fn sift_down(&mut self, mut i: usize) -> bool {
        let start = i;
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < n && (self.less)(&self.items[right], &self.items[left]) {
                child = right;
            }
            if !(self.less)(&self.items[child], &self.items[i]) {
                break;
            }
            self.swap(i, child);
            i = child;
        }
        i != start
    }
}
