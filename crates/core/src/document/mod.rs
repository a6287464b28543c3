//! Per-document summaries for quotes, invoices, and contracts.
//!
//! This is the single entry point the editors and the PDF renderer call, so
//! no page recomputes tax or discount arithmetic on its own.

pub mod service;
pub mod types;

pub use service::DocumentService;
pub use types::{DocumentDraft, DocumentKind, DocumentSummary};
