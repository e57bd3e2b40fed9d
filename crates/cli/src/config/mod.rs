pub mod locate;

pub use locate::{ConfigSearch, load_config};
