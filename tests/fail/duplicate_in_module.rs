use then_macro::then_hooks;

#[then_hooks]
mod payments {
    pub fn audit(total: &u32) {
        let _ = total;
    }

    #[then(audit)]
    #[then(audit)]
    pub fn charge(amount: u32) -> u32 {
        amount + 2
    }
}

fn main() {}
