pub mod selector;

pub use selector::{select, summarize, Showcase, ShowcaseSummary};
