//! Core data types for Autoquote

pub mod applicant;
pub mod quote;
pub mod quote_id;
