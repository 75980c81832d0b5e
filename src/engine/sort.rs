use std::cmp::Ordering;

use crate::models::Transaction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SortKey {
    #[default]
    Date,
    Amount,
}

impl SortKey {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Date => Self::Amount,
            Self::Amount => Self::Date,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Amount => "amount",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub(crate) fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub(crate) fn arrow(self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// The chosen key, then transaction id. The id tie-break makes this a
/// total order, so descending is the exact reverse of ascending.
fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
    let by_key = match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Amount => a.amount.cmp(&b.amount),
    };
    by_key.then_with(|| a.id.cmp(&b.id))
}

pub(crate) fn sort_transactions(
    transactions: &mut [Transaction],
    key: SortKey,
    direction: SortDirection,
) {
    transactions.sort_by(|a, b| match direction {
        SortDirection::Asc => compare(a, b, key),
        SortDirection::Desc => compare(a, b, key).reverse(),
    });
}
