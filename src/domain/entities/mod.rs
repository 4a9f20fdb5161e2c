pub mod filter;
pub mod loan;
pub mod product;
pub mod table;
