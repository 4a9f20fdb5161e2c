pub mod amortization;
pub mod normalizer;
pub mod numeric;
pub mod option_extractor;
pub mod query_engine;
pub mod schema_resolver;
