use then_macro::then;

#[then(billing::audit::record)]
fn charge(total: u64) -> u64 {
    total
}

fn main() {}
