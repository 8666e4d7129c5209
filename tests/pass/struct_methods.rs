use std::sync::atomic::{AtomicI32, Ordering};

use then_macro::then;

static LAST: AtomicI32 = AtomicI32::new(0);

fn remember(value: &i32) {
    LAST.store(*value, Ordering::SeqCst);
}

struct Counter {
    value: i32,
}

impl Counter {
    #[then(remember)]
    fn increment(&mut self) -> i32 {
        self.value += 1;
        self.value
    }

    #[then(remember)]
    fn get(&self) -> i32 {
        self.value
    }
}

fn main() {
    let mut counter = Counter { value: 0 };
    assert_eq!(counter.increment(), 1);
    assert_eq!(counter.increment(), 2);
    assert_eq!(LAST.load(Ordering::SeqCst), 2);
    assert_eq!(counter.get(), 2);
}
