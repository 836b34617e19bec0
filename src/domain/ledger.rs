use serde::Serialize;

use super::{Amount, Entry, Kind};

/// Aggregated view of a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub income_total: Amount,
    pub expense_total: Amount,
    /// income_total - expense_total
    pub balance: Amount,
}

/// Sum the amounts of all entries of the given kind, in list order.
pub fn total_for_kind(kind: Kind, entries: &[Entry]) -> Amount {
    entries
        .iter()
        .filter(|entry| entry.kind == kind)
        .fold(0.0, |total, entry| total + entry.amount)
}

/// Compute income, expense and balance from scratch.
/// Always walks the full list so the result depends only on its contents.
pub fn compute_totals(entries: &[Entry]) -> Totals {
    let income_total = total_for_kind(Kind::Income, entries);
    let expense_total = total_for_kind(Kind::Expense, entries);

    Totals {
        income_total,
        expense_total,
        balance: income_total - expense_total,
    }
}
