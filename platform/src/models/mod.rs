pub mod granularity;
pub use granularity::*;

pub mod market;
pub use market::*;

pub mod options;
pub use options::RuntimeOptions;

pub mod state;
pub use state::*;
