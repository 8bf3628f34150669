//! Helpers for keeping personally identifiable data out of log output.

/// Mask an email address so log lines never carry a full address.
///
/// The first character of the local part is kept, the rest is replaced
/// with asterisks and the domain stays intact ("j***@example.com").
/// Strings without an `@` are masked entirely.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let head: String = local.chars().take(1).collect();
            format!("{}***@{}", head, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_local_part() {
        assert_eq!(mask_email("jane@example.com"), "j***@example.com");
    }

    #[test]
    fn test_keeps_domain_visible() {
        assert_eq!(mask_email("a@shop.example.org"), "a***@shop.example.org");
    }

    #[test]
    fn test_handles_multibyte_local_part() {
        assert_eq!(mask_email("ünal@example.com"), "ü***@example.com");
    }

    #[test]
    fn test_masks_non_email_entirely() {
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email(""), "***");
    }
}
