//! Document service combining normalization, totals, numbering, and payments.

use opsdesk_shared::types::Money;
use opsdesk_shared::{AppConfig, AppError, AppResult};
use rust_decimal::Decimal;
use tracing::debug;

use super::types::{DocumentDraft, DocumentSummary};
use crate::line_item::normalize_all;
use crate::numbering::{Sequence, format_id};
use crate::payment::{PaymentState, apply_payment};
use crate::totals::aggregate;

/// Document service for business logic.
pub struct DocumentService;

impl DocumentService {
    /// Computes the printable summary of a draft.
    ///
    /// Missing tax rate and currency fall back to the billing defaults in
    /// `config`. The cumulative `amount_paid` of an invoice is replayed as a
    /// single payment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for a non-positive or fractional
    /// sequence, a negative amount paid, or amounts that overflow, and
    /// `AppError::BusinessRule` when a quote or contract carries a payment.
    pub fn summarize(draft: &DocumentDraft, config: &AppConfig) -> AppResult<DocumentSummary> {
        let currency = draft.currency.unwrap_or(config.billing.currency);
        let tax_rate = draft.tax_rate.unwrap_or(config.billing.default_tax_rate);

        let sequence = Sequence::try_from(draft.sequence)?;
        let id = format_id(
            draft.kind.prefix(&config.numbering),
            draft.issued_on,
            sequence.get(),
        )?;

        let items = normalize_all(draft.items.iter().cloned());
        let totals = aggregate(&items, tax_rate, draft.discount)?;

        let payment = if draft.kind.accepts_payments() {
            Some(Self::replay_payments(totals.total, draft.amount_paid)?)
        } else if !draft.amount_paid.is_zero() {
            return Err(AppError::BusinessRule(format!(
                "a {} cannot record payments",
                draft.kind
            )));
        } else {
            None
        };

        debug!(%id, kind = %draft.kind, total = %totals.total, "summarized document");

        let money = |amount: Decimal| Money::new(amount, currency);
        Ok(DocumentSummary {
            id,
            kind: draft.kind,
            issued_on: draft.issued_on,
            flags: totals.flags(),
            subtotal: money(totals.subtotal),
            tax: money(totals.tax),
            discount: money(totals.discount),
            total: money(totals.total),
            amount_paid: payment.map(|p| money(p.amount_paid)),
            balance: payment.map(|p| money(p.balance())),
            status: payment.map(|p| p.status),
            items,
            totals,
        })
    }

    fn replay_payments(total: Decimal, amount_paid: Decimal) -> AppResult<PaymentState> {
        let state = PaymentState::new(total);
        if amount_paid.is_zero() {
            return Ok(state);
        }
        Ok(apply_payment(&state, amount_paid)?)
    }
}
