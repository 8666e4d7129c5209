use then_macro::then;

fn record(value: &usize) {
    let _ = value;
}

#[then(record)]
async fn measure(payload: &str) -> usize {
    payload.len()
}

fn main() {
    let _future = measure("hello");
}
