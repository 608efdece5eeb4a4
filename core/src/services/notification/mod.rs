//! Notification gateway contract and mail templates
//!
//! Sending is fire-and-forget from the domain's point of view: nothing is
//! stored, and how a message travels (HTTP mail API, mock) is an
//! infrastructure concern behind the [`Mailer`] trait.

mod templates;
mod traits;

pub use templates::{top_up_mail, welcome_mail};
pub use traits::{mask_email, Mailer};
