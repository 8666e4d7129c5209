use std::sync::atomic::{AtomicI32, Ordering};

use then_macro::then;

static TOTAL: AtomicI32 = AtomicI32::new(0);

fn accumulate(value: &i32) {
    TOTAL.fetch_add(*value, Ordering::SeqCst);
}

#[then(accumulate)]
fn add(x: i32, y: i32) -> i32 {
    x + y
}

fn main() {
    assert_eq!(add(2, 3), 5);
    assert_eq!(add(1, 1), 2);
    assert_eq!(TOTAL.load(Ordering::SeqCst), 7);
}
