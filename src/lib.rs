pub mod allowlist;
pub mod cli;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod net;
pub mod runtime;
