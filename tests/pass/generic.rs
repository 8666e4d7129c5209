use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};

use then_macro::then;

static CALLS: AtomicUsize = AtomicUsize::new(0);

fn tally<T: Debug>(value: &T) {
    let _ = value;
    CALLS.fetch_add(1, Ordering::SeqCst);
}

#[then(tally)]
fn first<T: Copy + Debug>(values: &[T]) -> T {
    values[0]
}

fn main() {
    assert_eq!(first(&[7, 8]), 7);
    assert_eq!(first(&["a", "b"]), "a");
    assert_eq!(CALLS.load(Ordering::SeqCst), 2);
}
