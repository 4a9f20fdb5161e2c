//! Inventory explorer core: tolerant ingestion of stock exports, filtering of
//! the resulting record set, and installment schedules for a product price.

pub mod config;
pub mod domain;
pub mod format;
pub mod infra;
pub mod usecase;

pub use crate::config::{QuotaParams, MAX_RESULTS};
pub use crate::domain::entities::filter::{CappedView, FilterOptions, FilterState, QueryResult};
pub use crate::domain::entities::loan::{AmortizationRow, LoanSchedule, LoanSummary, LoanTerms};
pub use crate::domain::entities::product::{warehouse_label, FieldMap, ProductRecord, SemanticField};
pub use crate::domain::entities::table::{RawRow, RawTable};
pub use crate::domain::rules::amortization::calculate_amortization;
pub use crate::domain::rules::normalizer::normalize_rows;
pub use crate::domain::rules::numeric::parse_price;
pub use crate::domain::rules::option_extractor::{extract_options, search_warehouse_options};
pub use crate::domain::rules::query_engine::{filter_records, run_query, total_stock};
pub use crate::domain::rules::schema_resolver::resolve_field_map;
pub use crate::usecase::catalog::Catalog;
