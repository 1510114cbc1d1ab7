//! Payment collection stage.

use rust_decimal::Decimal;

use super::percent_of;
use super::types::{CollectionSummary, RevenueBreakdown};
use crate::project::Payment;

/// Derives invoicing and collection totals.
#[must_use]
pub fn derive(payments: &[Payment], revenue: &RevenueBreakdown) -> CollectionSummary {
    let total_invoiced: Decimal = payments
        .iter()
        .filter(|p| p.status.is_invoiced())
        .map(|p| p.amount)
        .sum();
    let total_collected: Decimal = payments.iter().map(Payment::collected).sum();

    CollectionSummary {
        total_invoiced,
        total_collected,
        financial_completion_rate: percent_of(total_invoiced, revenue.net_revenue),
        pending_invoicing: revenue.net_revenue - total_invoiced,
        outstanding_receivables: total_invoiced - total_collected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::revenue;
    use crate::finance::tests::{payment, project};
    use crate::project::{PaymentStatus, PaymentType};
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_payments() {
        let project = project(dec!(100000), dec!(20));
        let revenue = revenue::derive(&project, &[]);

        let collection = derive(&[], &revenue);

        assert_eq!(collection.total_invoiced, dec!(0));
        assert_eq!(collection.total_collected, dec!(0));
        assert_eq!(collection.financial_completion_rate, dec!(0));
        assert_eq!(collection.pending_invoicing, dec!(100000));
        assert_eq!(collection.outstanding_receivables, dec!(0));
    }

    #[test]
    fn test_mixed_statuses() {
        let project = project(dec!(100000), dec!(20));
        let mut partial = payment(PaymentType::Contract, dec!(20000), PaymentStatus::PaidPartial);
        partial.paid_amount = Some(dec!(5000));
        let payments = vec![
            payment(PaymentType::Contract, dec!(10000), PaymentStatus::PaidFull),
            partial,
            payment(PaymentType::Contract, dec!(15000), PaymentStatus::Invoiced),
            payment(PaymentType::Contract, dec!(30000), PaymentStatus::Claimed),
            payment(PaymentType::Contract, dec!(25000), PaymentStatus::Due),
        ];
        let revenue = revenue::derive(&project, &payments);

        let collection = derive(&payments, &revenue);

        assert_eq!(collection.total_invoiced, dec!(45000));
        assert_eq!(collection.total_collected, dec!(15000));
        assert_eq!(collection.financial_completion_rate, dec!(45));
        assert_eq!(collection.pending_invoicing, dec!(55000));
        assert_eq!(collection.outstanding_receivables, dec!(30000));
    }

    #[test]
    fn test_partial_without_paid_amount_collects_nothing() {
        let project = project(dec!(1000), dec!(20));
        let payments = vec![payment(PaymentType::Contract, dec!(400), PaymentStatus::PaidPartial)];
        let revenue = revenue::derive(&project, &payments);

        let collection = derive(&payments, &revenue);

        assert_eq!(collection.total_invoiced, dec!(400));
        assert_eq!(collection.total_collected, dec!(0));
    }

    #[test]
    fn test_zero_revenue_guards_completion_rate() {
        let project = project(dec!(0), dec!(20));
        let payments = vec![payment(PaymentType::Contract, dec!(500), PaymentStatus::Invoiced)];
        let revenue = revenue::derive(&project, &payments);

        let collection = derive(&payments, &revenue);

        assert_eq!(collection.financial_completion_rate, dec!(0));
    }
}
