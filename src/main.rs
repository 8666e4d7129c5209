use then_macro::then;
use tracing::{info, warn};

#[derive(Debug)]
struct Receipt {
    order: u32,
    total_cents: u64,
}

/// Audit hook: records every successful charge.
fn record_charge(receipt: &Receipt) {
    info!(
        order = receipt.order,
        total_cents = receipt.total_cents,
        "charge completed"
    );
}

fn record_refund(outcome: &Result<Receipt, String>) {
    match outcome {
        Ok(receipt) => info!(order = receipt.order, "refund issued"),
        Err(reason) => warn!(%reason, "refund rejected"),
    }
}

#[then(record_charge)]
fn charge(order: u32, total_cents: u64) -> Receipt {
    Receipt { order, total_cents }
}

#[then(record_refund)]
fn refund(order: u32, total_cents: u64) -> Result<Receipt, String> {
    if total_cents == 0 {
        return Err(format!("order {order}: nothing to refund"));
    }
    Ok(Receipt { order, total_cents })
}

fn main() {
    tracing_subscriber::fmt::init();

    let receipt = charge(4511, 2_499);
    println!(
        "charged order {} for {} cents",
        receipt.order, receipt.total_cents
    );

    if let Ok(refunded) = refund(4511, 2_499) {
        println!("refunded order {}", refunded.order);
    }
    let _ = refund(4512, 0);
}
