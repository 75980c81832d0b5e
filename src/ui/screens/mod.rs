pub(crate) mod budgets;
pub(crate) mod dashboard;
pub(crate) mod settings;
pub(crate) mod transactions;
pub(crate) mod upload;
