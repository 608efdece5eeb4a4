//! Canned mail templates for account events

use rust_decimal::Decimal;

/// Subject and body for the registration welcome mail
pub fn welcome_mail() -> (&'static str, String) {
    (
        "Registration Successful",
        "Thank you for registering with EquipRent!".to_string(),
    )
}

/// Subject and body for the top-up confirmation mail
pub fn top_up_mail(amount: Decimal) -> (&'static str, String) {
    (
        "Top-Up Successful",
        format!("Your account has been topped up successfully with ${}.", amount),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn top_up_mail_names_the_amount() {
        let (subject, body) = top_up_mail(dec!(25.50));
        assert_eq!(subject, "Top-Up Successful");
        assert!(body.contains("$25.50"));
    }
}
