use crate::config::QuotaParams;
use crate::domain::entities::loan::{LoanSchedule, LoanTerms};
use crate::domain::entities::product::ProductRecord;
use crate::domain::rules::amortization::calculate_amortization;
use crate::domain::rules::numeric::parse_price;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuotaService;

impl QuotaService {
    pub fn new() -> Self {
        Self
    }

    pub fn loan_terms(&self, product: &ProductRecord, params: &QuotaParams) -> LoanTerms {
        LoanTerms {
            principal: parse_price(&product.price),
            down_payment_percent: params.down_payment_percent,
            annual_rate_percent: params.annual_rate_percent,
            term_months: params.term_months,
        }
    }

    /// `None` means the product has no usable price and no quota applies.
    pub fn quote(&self, product: &ProductRecord, params: &QuotaParams) -> Option<LoanSchedule> {
        calculate_amortization(&self.loan_terms(product, params))
    }
}
