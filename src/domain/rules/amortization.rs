use crate::domain::entities::loan::{AmortizationRow, LoanSchedule, LoanSummary, LoanTerms};

/// Fixed payment for `financed` over `term_months` at `monthly_rate`.
/// A zero rate degrades to straight-line repayment.
pub fn monthly_payment(financed: f64, monthly_rate: f64, term_months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return financed / f64::from(term_months);
    }
    let factor = (1.0 + monthly_rate).powf(f64::from(term_months));
    financed * (monthly_rate * factor) / (factor - 1.0)
}

/// Builds the full fixed-payment schedule. Returns `None` when the principal is
/// not strictly positive or the term is empty.
pub fn calculate_amortization(terms: &LoanTerms) -> Option<LoanSchedule> {
    if terms.principal.is_nan() || terms.principal <= 0.0 || terms.term_months == 0 {
        return None;
    }

    let down_payment_amount = terms.principal * terms.down_payment_percent / 100.0;
    let financed_amount = terms.principal - down_payment_amount;
    let monthly_rate = terms.annual_rate_percent / 100.0 / 12.0;
    let payment = monthly_payment(financed_amount, monthly_rate, terms.term_months);

    let mut balance = financed_amount;
    let mut total_interest = 0.0;
    let mut rows = Vec::with_capacity(terms.term_months as usize);

    for installment_number in 1..=terms.term_months {
        let interest_portion = balance * monthly_rate;
        let mut principal_portion = payment - interest_portion;
        // Last installment settles whatever drift is left.
        if principal_portion > balance || installment_number == terms.term_months {
            principal_portion = balance;
        }
        balance -= principal_portion;
        if balance < 0.0 {
            balance = 0.0;
        }
        total_interest += interest_portion;

        rows.push(AmortizationRow {
            installment_number,
            payment,
            interest_portion,
            principal_portion,
            remaining_balance: balance,
        });
    }

    Some(LoanSchedule {
        summary: LoanSummary {
            principal: terms.principal,
            down_payment_amount,
            financed_amount,
            monthly_payment: payment,
            total_interest,
        },
        rows,
    })
}
