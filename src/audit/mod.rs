//! Audit pipeline: selection, CSV snapshot, confirmation gate

pub mod confirm;
pub mod report;
pub mod selection;

pub use confirm::{Answer, gate_deletion, parse_answer};
pub use report::{AUDIT_CSV, write_audit_file, write_csv};
pub use selection::{eligible_components, select};
