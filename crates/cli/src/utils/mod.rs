pub mod filter;

pub use filter::TaskFilter;
