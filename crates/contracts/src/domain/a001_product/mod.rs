pub mod aggregate;

pub use aggregate::{ProductOption, ProductRecord, DETAIL_URL_PLACEHOLDER};
