//! Account balance endpoints

mod top_up;

pub use top_up::top_up;
