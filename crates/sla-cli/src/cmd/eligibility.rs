use crate::output::print_json;
use anyhow::Context;
use clap::Args;
use sla_core::config::SlaConfig;
use sla_core::eligibility::{calculate_eligibility, EligibilityInput};
use std::path::Path;

#[derive(Args)]
pub struct EligibilityArgs {
    /// Gross monthly income
    #[arg(long)]
    pub income: f64,
    /// Existing monthly liabilities (cards, loans)
    #[arg(long, default_value = "0")]
    pub liabilities: f64,
    /// Requested loan amount
    #[arg(long)]
    pub loan: f64,
    /// Property value
    #[arg(long)]
    pub property_value: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: f64,
    /// Loan tenure in months
    #[arg(long)]
    pub tenure_months: u32,
}

pub fn run(root: &Path, args: EligibilityArgs, json: bool) -> anyhow::Result<()> {
    let config = SlaConfig::load_or_default(root).context("failed to load config")?;
    let input = EligibilityInput {
        monthly_income: args.income,
        monthly_liabilities: args.liabilities,
        loan_amount: args.loan,
        property_value: args.property_value,
        annual_rate_percent: args.rate,
        tenure_months: args.tenure_months,
    };
    let preview = calculate_eligibility(&input, &config.eligibility)?;

    if json {
        print_json(&preview)?;
        return Ok(());
    }

    let limits = &config.eligibility;
    println!("Monthly installment: {:.2}", preview.monthly_installment);
    println!(
        "DBR: {:.2}% (max {:.2}%) {}",
        preview.dbr_percent,
        limits.max_dbr_percent,
        pass_fail(preview.dbr_ok)
    );
    println!(
        "LTV: {:.2}% (max {:.2}%) {}",
        preview.ltv_percent,
        limits.max_ltv_percent,
        pass_fail(preview.ltv_ok)
    );
    println!("Max loan by LTV: {:.2}", preview.max_loan_by_ltv);
    println!(
        "Eligible: {}",
        if preview.eligible { "yes" } else { "no" }
    );
    Ok(())
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "exceeds limit"
    }
}
