pub mod reader;

pub use reader::{Entry, EntryReader};
