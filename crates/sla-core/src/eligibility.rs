//! Client-side preview of mortgage eligibility.
//!
//! The backend owns the binding DBR/LTV decision; this mirrors it so forms can
//! show a figure while the applicant is still typing.

use crate::error::{Result, SlaError};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EligibilityLimits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityLimits {
    #[serde(default = "default_max_dbr")]
    pub max_dbr_percent: f64,
    #[serde(default = "default_max_ltv")]
    pub max_ltv_percent: f64,
}

fn default_max_dbr() -> f64 {
    50.0
}

fn default_max_ltv() -> f64 {
    80.0
}

impl Default for EligibilityLimits {
    fn default() -> Self {
        Self {
            max_dbr_percent: default_max_dbr(),
            max_ltv_percent: default_max_ltv(),
        }
    }
}

// ---------------------------------------------------------------------------
// Input / output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_liabilities: f64,
    pub loan_amount: f64,
    pub property_value: f64,
    /// Annual interest rate in percent, e.g. `4.5`.
    pub annual_rate_percent: f64,
    pub tenure_months: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityPreview {
    pub monthly_installment: f64,
    pub dbr_percent: f64,
    pub ltv_percent: f64,
    pub dbr_ok: bool,
    pub ltv_ok: bool,
    pub eligible: bool,
    pub max_loan_by_ltv: f64,
}

// ---------------------------------------------------------------------------
// calculate_eligibility
// ---------------------------------------------------------------------------

pub fn calculate_eligibility(
    input: &EligibilityInput,
    limits: &EligibilityLimits,
) -> Result<EligibilityPreview> {
    check_input(input)?;

    let installment = monthly_installment(
        input.loan_amount,
        input.annual_rate_percent,
        input.tenure_months,
    );
    let dbr_percent = (input.monthly_liabilities + installment) / input.monthly_income * 100.0;
    let ltv_percent = input.loan_amount * 100.0 / input.property_value;
    let dbr_ok = dbr_percent <= limits.max_dbr_percent;
    let ltv_ok = ltv_percent <= limits.max_ltv_percent;

    Ok(EligibilityPreview {
        monthly_installment: installment,
        dbr_percent,
        ltv_percent,
        dbr_ok,
        ltv_ok,
        eligible: dbr_ok && ltv_ok,
        max_loan_by_ltv: input.property_value * limits.max_ltv_percent / 100.0,
    })
}

/// Fixed-rate annuity payment. A zero rate spreads the principal evenly.
pub fn monthly_installment(principal: f64, annual_rate_percent: f64, tenure_months: u32) -> f64 {
    if tenure_months == 0 {
        return principal;
    }
    let n = f64::from(tenure_months);
    let r = annual_rate_percent / 1200.0;
    if r == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * r * growth / (growth - 1.0)
}

fn check_input(input: &EligibilityInput) -> Result<()> {
    let fields = [
        ("monthly_income", input.monthly_income),
        ("monthly_liabilities", input.monthly_liabilities),
        ("loan_amount", input.loan_amount),
        ("property_value", input.property_value),
        ("annual_rate_percent", input.annual_rate_percent),
    ];
    for (name, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(SlaError::InvalidInput(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }
    }
    if input.monthly_income == 0.0 {
        return Err(SlaError::InvalidInput(
            "monthly_income must be greater than 0".to_string(),
        ));
    }
    if input.property_value == 0.0 {
        return Err(SlaError::InvalidInput(
            "property_value must be greater than 0".to_string(),
        ));
    }
    if input.tenure_months == 0 {
        return Err(SlaError::InvalidInput(
            "tenure_months must be at least 1".to_string(),
        ));
    }
    Ok(())
}
