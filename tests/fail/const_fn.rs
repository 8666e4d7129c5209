use then_macro::then;

fn audit(value: &u32) {
    let _ = value;
}

#[then(audit)]
const fn answer() -> u32 {
    42
}

fn main() {}
