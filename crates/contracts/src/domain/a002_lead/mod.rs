pub mod aggregate;

pub use aggregate::LeadRecord;
