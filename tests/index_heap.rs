// IndexHeap public-API suite: the owner-side usage convention.
//
// Every test drives the heap the way a real owner does: elements live behind
// Rc, the index-changed callback writes each element's position into a Cell
// inside the element, and fix/remove are issued at the last-reported
// position. Core behaviors exercised:
// - Pop order: repeated pops yield the predicate's order.
// - Priority updates: mutate in place, then fix at the reported index.
// - Targeted removal: remove by reported index returns that exact element.
// - Size conservation across push/pop/remove/init.

use containerkit::IndexHeap;
use std::cell::Cell;
use std::rc::Rc;

struct Item {
    name: &'static str,
    priority: Cell<i32>,
    pos: Cell<usize>,
}

fn item(name: &'static str, priority: i32) -> Rc<Item> {
    Rc::new(Item {
        name,
        priority: Cell::new(priority),
        pos: Cell::new(usize::MAX),
    })
}

// Inverted predicate: the highest priority is "first".
fn max_heap() -> IndexHeap<Rc<Item>, impl Fn(&Rc<Item>, &Rc<Item>) -> bool> {
    let mut h = IndexHeap::new(|a: &Rc<Item>, b: &Rc<Item>| a.priority.get() > b.priority.get());
    h.set_index_changed(|it: &Rc<Item>, i| it.pos.set(i));
    h
}

// Test: the classic priority-queue-with-updates flow. Init with a batch,
// push a latecomer, raise its priority in place, fix, then drain in
// decreasing priority order.
#[test]
fn priority_queue_update_then_drain() {
    let mut pq = max_heap();
    pq.init(vec![item("banana", 3), item("apple", 2), item("pear", 4)]);

    let orange = item("orange", 1);
    pq.push(orange.clone());

    orange.priority.set(5);
    pq.fix(orange.pos.get());

    let mut drained = Vec::new();
    while let Some(it) = pq.pop() {
        drained.push((it.priority.get(), it.name));
    }
    assert_eq!(
        drained,
        vec![(5, "orange"), (4, "pear"), (3, "banana"), (2, "apple")]
    );
    assert_eq!(pq.len(), 0);
}

// Test: pushing 1..=20 in reverse yields 1,2,...,20 from pop.
#[test]
fn pop_yields_sorted_order() {
    let mut h = IndexHeap::new(|a: &i32, b: &i32| a < b);
    for v in (1..=20).rev() {
        h.push(v);
    }
    let drained: Vec<i32> = std::iter::from_fn(|| h.pop()).collect();
    assert_eq!(drained, (1..=20).collect::<Vec<_>>());
}

// Test: the end-to-end scenario from the module contract.
// init([5,4,3,2,1]) with a<b pops 1..=5 and leaves the heap empty.
#[test]
fn init_unordered_then_drain() {
    let mut h = IndexHeap::new(|a: &i32, b: &i32| a < b);
    h.init(vec![5, 4, 3, 2, 1]);
    for want in 1..=5 {
        assert!(h.len() > 0);
        assert_eq!(h.pop(), Some(want));
    }
    assert_eq!(h.len(), 0);
    assert!(h.pop().is_none());
}

// Test: an owner removing every element by its reported index, in insertion
// order (which is arbitrary with respect to heap layout), gets each element
// back exactly once.
#[test]
fn owner_removes_by_reported_index() {
    let mut h = max_heap();
    let owned: Vec<Rc<Item>> = (0..12).map(|i| item("task", i)).collect();
    for it in &owned {
        h.push(it.clone());
    }
    assert_eq!(h.len(), owned.len());

    for (n, it) in owned.iter().enumerate() {
        let removed = h.remove(it.pos.get());
        assert!(Rc::ptr_eq(it, &removed), "wrong element at reported index");
        assert_eq!(h.len(), owned.len() - n - 1);
    }
    assert!(h.is_empty());
}

// Test: len moves by exactly one per push/pop/remove and init sets it to the
// input length.
#[test]
fn size_conservation() {
    let mut h = IndexHeap::new(|a: &i32, b: &i32| a < b);
    assert_eq!(h.len(), 0);

    h.init(vec![9, 8, 7]);
    assert_eq!(h.len(), 3);

    h.push(1);
    assert_eq!(h.len(), 4);

    h.pop();
    assert_eq!(h.len(), 3);

    h.remove(h.len() - 1);
    assert_eq!(h.len(), 2);

    h.init(Vec::new());
    assert_eq!(h.len(), 0);
}

// Test: peek matches the next pop without consuming it.
#[test]
fn peek_matches_pop() {
    let mut h = IndexHeap::new(|a: &i32, b: &i32| a < b);
    h.init(vec![3, 1, 2]);
    assert_eq!(h.peek(), Some(&1));
    assert_eq!(h.pop(), Some(1));
    assert_eq!(h.peek(), Some(&2));
}
