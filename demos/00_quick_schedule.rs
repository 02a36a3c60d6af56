/// quick schedule - finance a lot sale and print its installments
use sale_amortization::chrono::NaiveDate;
use sale_amortization::{calculate_schedule, Decimal, FinancingParameters, Money, Rate};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 10,000 lot, 1,000 down, 12% annual over 12 months
    let params = FinancingParameters::new(
        Money::from_major(10_000),
        Money::from_major(1_000),
        Rate::from_percentage(Decimal::from(12)),
        12,
        NaiveDate::from_ymd_opt(2024, 1, 15).ok_or("invalid date")?,
    );

    let schedule = calculate_schedule(&params)?;

    println!("financed: {}", schedule.financed_principal);
    for installment in &schedule {
        println!(
            "#{:>2}  {}  {:>10}",
            installment.sequence_number, installment.expected_payment_date, installment.coute_amount
        );
    }
    println!("total owed: {}", schedule.total_owed);
    println!("interest:   {}", schedule.total_interest);

    Ok(())
}
