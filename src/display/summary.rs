//! Spending summary display

use crate::reports::SpendingSummary;

/// One line per responsible party:
/// `You: R$ 100.00 / R$ 2000.00 (Remaining: R$ 1900.00)`
pub fn format_summary(summary: &SpendingSummary, symbol: &str) -> String {
    let mut output = String::new();

    for party in &summary.parties {
        output.push_str(&format!(
            "{}: {} / {} (Remaining: {})",
            party.responsible,
            party.total.format_with_symbol(symbol),
            party.limit.format_with_symbol(symbol),
            party.remaining.format_with_symbol(symbol),
        ));
        if party.is_over_limit() {
            output.push_str(" OVER LIMIT");
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Total: {} in {} purchase(s)\n",
        summary.total.format_with_symbol(symbol),
        summary.record_count
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PurchaseId, PurchaseRecord};

    fn record(id: i64, responsible: &str, cents: i64) -> PurchaseRecord {
        PurchaseRecord {
            id: PurchaseId::new(id),
            date: "2024-01-01".into(),
            responsible: responsible.into(),
            card: "Inter".into(),
            category: "Food".into(),
            description: "Item".into(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_summary_lines() {
        let summary = SpendingSummary::from_records(&[
            record(1, "You", 10_000),
            record(2, "Spouse", 160_000),
        ]);
        let output = format_summary(&summary, "R$");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "You: R$ 100.00 / R$ 2000.00 (Remaining: R$ 1900.00)"
        );
        assert_eq!(
            lines[1],
            "Spouse: R$ 1600.00 / R$ 1500.00 (Remaining: -R$ 100.00) OVER LIMIT"
        );
        assert_eq!(lines[2], "Total: R$ 1700.00 in 2 purchase(s)");
    }
}
