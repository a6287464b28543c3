//! Opsdesk document preview
//!
//! Reads a document draft (JSON) and prints the numbers the PDF renderer
//! would lay out.
//!
//! Usage: opsdesk-preview <draft.json> [--json]

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use opsdesk_core::document::{DocumentDraft, DocumentService, DocumentSummary};
use opsdesk_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "opsdesk_preview=info,opsdesk_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut path: Option<PathBuf> = None;
    let mut as_json = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => as_json = true,
            _ if path.is_none() => path = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument: {arg}"),
        }
    }
    let Some(path) = path else {
        bail!("usage: opsdesk-preview <draft.json> [--json]");
    };

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate()?;
    info!(
        currency = %config.billing.currency,
        default_tax_rate = %config.billing.default_tax_rate,
        "Configuration loaded"
    );

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let draft: DocumentDraft = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let summary = DocumentService::summarize(&draft, &config)
        .map_err(|err| anyhow::anyhow!("[{}] {err}", err.error_code()))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", Preview(&summary));
    }

    Ok(())
}

/// Plain-text layout of a summary.
struct Preview<'a>(&'a DocumentSummary);

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "{} {} ({})", summary.kind, summary.id, summary.issued_on)?;
        for item in &summary.items {
            write!(
                f,
                "  {:<32} {:>8} x {:>10} = {:>12}",
                item.description,
                item.quantity(),
                item.unit_price(),
                item.total()
            )?;
            match item.warning() {
                Some(warning) => writeln!(f, "  ! {warning}")?,
                None => writeln!(f)?,
            }
        }
        writeln!(f, "  Subtotal: {}", summary.subtotal)?;
        writeln!(f, "  Tax ({}): {}", summary.totals.tax_rate, summary.tax)?;
        writeln!(f, "  Discount: {}", summary.discount)?;
        writeln!(f, "  Total:    {}", summary.total)?;
        if let (Some(paid), Some(balance), Some(status)) =
            (summary.amount_paid, summary.balance, summary.status)
        {
            writeln!(f, "  Paid:     {paid}")?;
            writeln!(f, "  Balance:  {balance} ({status})")?;
        }
        for flag in &summary.flags {
            writeln!(f, "  warning: {flag:?}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsdesk_core::document::DocumentKind;

    fn invoice_json() -> &'static str {
        include_str!("../../../demos/invoice.json")
    }

    #[test]
    fn test_render_invoice() {
        let draft: DocumentDraft = serde_json::from_str(invoice_json()).unwrap();
        let summary = DocumentService::summarize(&draft, &AppConfig::default()).unwrap();
        let text = Preview(&summary).to_string();

        assert_eq!(summary.kind, DocumentKind::Invoice);
        assert!(text.starts_with("invoice INV-20260115-0012 (2026-01-15)"));
        assert!(text.contains("Total:    USD 98.00"));
        assert!(text.contains("Balance:  USD 58.00 (partial)"));
    }

    #[test]
    fn test_render_shows_warnings_without_payment_lines() {
        let json = r#"{
            "kind": "quote",
            "issued_on": "2026-01-15",
            "sequence": 1,
            "items": [{"id": "1", "description": "Credit", "quantity": "-1", "unit_price": "5"}]
        }"#;
        let draft: DocumentDraft = serde_json::from_str(json).unwrap();
        let summary = DocumentService::summarize(&draft, &AppConfig::default()).unwrap();
        let text = Preview(&summary).to_string();

        assert!(text.contains("! negative quantity"));
        assert!(text.contains("warning: NegativeTotal"));
        assert!(!text.contains("Balance"));
    }
}
