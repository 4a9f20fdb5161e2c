#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    pub down_payment_percent: f64,
    pub annual_rate_percent: f64,
    pub term_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationRow {
    pub installment_number: u32,
    pub payment: f64,
    pub interest_portion: f64,
    pub principal_portion: f64,
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanSummary {
    pub principal: f64,
    pub down_payment_amount: f64,
    pub financed_amount: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoanSchedule {
    pub summary: LoanSummary,
    pub rows: Vec<AmortizationRow>,
}
