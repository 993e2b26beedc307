use thiserror::Error;

use crate::error::AllowedIpsError;

/// Recoverable problems reported while building the allow-list
#[derive(Debug, Error)]
pub enum Warning {
    #[error("line {line}: failed to resolve hostname {domain}: {source}")]
    ResolutionFailed {
        line: usize,
        domain: String,
        #[source]
        source: AllowedIpsError,
    },

    #[error("line {line}: no DNS results for hostname {domain}")]
    NoResults { line: usize, domain: String },
}

/// Sink for warnings, handed explicitly to the pipeline
pub trait Diagnostics {
    fn warn(&mut self, warning: Warning);
}

/// Forwards every warning to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
    }
}

/// Collects warnings in memory
impl Diagnostics for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}
