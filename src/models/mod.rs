mod budget;
mod spending;
mod transaction;

pub use budget::Budget;
pub use spending::{CategorySpending, MonthlySpending};
pub use transaction::Transaction;

#[cfg(test)]
mod tests;
