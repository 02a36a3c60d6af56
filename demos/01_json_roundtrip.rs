/// json roundtrip - the request/response contract used by the sale wizard
use sale_amortization::{calculate_from_json, AmortizationCalculator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let calculator = AmortizationCalculator::default();

    let request = r#"{
        "totalAmount": 48500,
        "initialAmount": 4850,
        "reservationAmount": 500,
        "interestRate": 14.5,
        "numberOfPayments": 24,
        "firstPaymentDate": "2024-01-31",
        "includeDecimals": true
    }"#;

    println!("request:\n{}\n", request);
    println!("response:\n{}\n", calculate_from_json(&calculator, request)?);

    // rejected request: the initial payment covers the whole price
    let invalid = r#"{
        "totalAmount": 5000,
        "initialAmount": 5000,
        "interestRate": 12,
        "numberOfPayments": 12,
        "firstPaymentDate": "2024-01-15",
        "includeDecimals": true
    }"#;

    match calculate_from_json(&calculator, invalid) {
        Ok(json) => println!("unexpected schedule: {}", json),
        Err(e) => println!("rejected: {}", e),
    }

    Ok(())
}
