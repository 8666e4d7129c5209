use then_macro::then;

mod audit {
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static CALLS: AtomicUsize = AtomicUsize::new(0);

    pub fn record(value: &u64) {
        let _ = value;
        CALLS.fetch_add(1, Ordering::SeqCst);
    }
}

#[then(audit::record)]
fn checksum(data: &[u8]) -> u64 {
    data.iter().map(|byte| u64::from(*byte)).sum()
}

fn main() {
    assert_eq!(checksum(&[1, 2, 3]), 6);
    assert_eq!(audit::CALLS.load(std::sync::atomic::Ordering::SeqCst), 1);
}
