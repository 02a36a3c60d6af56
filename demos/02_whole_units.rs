/// whole units - compare cent and whole-unit schedules for the same sale
use sale_amortization::chrono::NaiveDate;
use sale_amortization::{
    AmortizationCalculator, CalculatorConfig, Decimal, FinancingParameters, Money, Rate, Rounding,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = FinancingParameters::new(
        Money::from_major(125_000),
        Money::from_major(25_000),
        Rate::from_percentage(Decimal::new(95, 1)),
        60,
        NaiveDate::from_ymd_opt(2024, 2, 29).ok_or("invalid date")?,
    )
    .with_reservation(Money::from_major(2_000));

    let calculator = AmortizationCalculator::new(CalculatorConfig::default())?;
    let cents = calculator.calculate(&params)?;
    let whole = calculator.calculate(&params.clone().with_decimals(false))?;

    println!("with cents:  {} x {} + last {}", cents.len() - 1, cents.periodic_payment,
        cents.installments[cents.len() - 1].coute_amount);
    println!("whole units: {} x {} + last {}", whole.len() - 1, whole.periodic_payment,
        whole.installments[whole.len() - 1].coute_amount);
    println!("totals: {} vs {}", cents.total_owed, whole.total_owed);

    // banker's rounding for back-office reconciliation
    let even = AmortizationCalculator::new(CalculatorConfig::default().with_rounding(Rounding::HalfEven))?;
    println!("half-even total: {}", even.calculate(&params)?.total_owed);

    Ok(())
}
