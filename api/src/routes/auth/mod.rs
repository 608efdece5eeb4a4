//! Registration and login endpoints

mod login;
mod register;

pub use login::login;
pub use register::register;
