pub mod inventory_service;
pub mod quota_service;
