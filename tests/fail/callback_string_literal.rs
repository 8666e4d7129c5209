use then_macro::then;

#[then("audit")]
fn answer() -> u32 {
    41 + 1
}

fn main() {}
