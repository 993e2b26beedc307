pub mod aggregate;
pub mod parser;
pub mod resolver;

// Re-export main types and functions
pub use aggregate::AddressSet;
pub use parser::{Classification, classify};
pub use resolver::{CommandResolver, DnsResolver};
