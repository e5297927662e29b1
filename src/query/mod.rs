pub mod check;
pub mod executor;
pub mod naive;

pub use check::{verify_all, Mismatch};
pub use executor::QueryExecutor;
pub use naive::NaiveVerifier;
