use std::sync::LazyLock;

use escolaryx_models::{contact::ContactSubmission, email_address::EmailAddress};

pub const SUBJECT: &str = "Verificación de correo electrónico";

pub static SENDER: LazyLock<EmailAddress> =
    LazyLock::new(|| "contacto@escolaryx.com".parse().unwrap());

pub static ANA: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "Ana".try_into().unwrap(),
    last_name: "Lopez".try_into().unwrap(),
    email: "ana@example.com".parse().unwrap(),
    message: "Hello, I need more info please.".try_into().unwrap(),
});

/// A submission whose fields contain markup.
pub static MALLORY: LazyLock<ContactSubmission> = LazyLock::new(|| ContactSubmission {
    name: "<b>Mallory</b>".try_into().unwrap(),
    last_name: "O'Brien & Co".try_into().unwrap(),
    email: "mallory@example.com".parse().unwrap(),
    message: "<script>alert('hi')</script> please call me".try_into().unwrap(),
});
