use escolaryx_models::{
    contact::{ContactLastName, ContactMessage, ContactName, ContactSubmission},
    email_address::EmailAddress,
};
use serde::{Deserialize, Serialize};

/// Raw contact form payload.
///
/// Every field is optional here so that missing fields are reported together
/// with the other violations instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactSubmission {
    /// First name of the submitter
    pub name: Option<String>,
    /// Last name of the submitter
    #[serde(alias = "lastName")]
    pub last_name: Option<String>,
    /// Email address the confirmation is sent to
    pub email: Option<String>,
    /// Content of the message
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFieldViolation {
    pub field: &'static str,
    pub constraint: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiAcknowledgment {
    pub message: &'static str,
}

impl TryFrom<ApiContactSubmission> for ContactSubmission {
    type Error = Vec<ApiFieldViolation>;

    fn try_from(value: ApiContactSubmission) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        let name = field(&mut violations, "name", value.name, |x| {
            ContactName::try_new(x).map_err(|_| length(ContactName::MIN_LEN, ContactName::MAX_LEN))
        });
        let last_name = field(&mut violations, "last_name", value.last_name, |x| {
            ContactLastName::try_new(x)
                .map_err(|_| length(ContactLastName::MIN_LEN, ContactLastName::MAX_LEN))
        });
        let email = field(&mut violations, "email", value.email, |x| {
            x.parse::<EmailAddress>()
                .ok()
                .filter(has_dotted_domain)
                .ok_or_else(|| ("email", "Value is not a valid email address".to_owned()))
        });
        let message = field(&mut violations, "message", value.message, |x| {
            ContactMessage::try_new(x)
                .map_err(|_| length(ContactMessage::MIN_LEN, ContactMessage::MAX_LEN))
        });

        match (name, last_name, email, message) {
            (Some(name), Some(last_name), Some(email), Some(message)) => Ok(Self {
                name,
                last_name,
                email,
                message,
            }),
            _ => Err(violations),
        }
    }
}

fn field<T>(
    violations: &mut Vec<ApiFieldViolation>,
    field: &'static str,
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, (&'static str, String)>,
) -> Option<T> {
    let Some(value) = value else {
        violations.push(ApiFieldViolation {
            field,
            constraint: "required",
            message: "Field required".into(),
        });
        return None;
    };

    parse(value)
        .map_err(|(constraint, message)| {
            violations.push(ApiFieldViolation {
                field,
                constraint,
                message,
            })
        })
        .ok()
}

/// Rejects single-label domains (`localhost`) and IP literals (`[127.0.0.1]`).
fn has_dotted_domain(address: &EmailAddress) -> bool {
    let domain = address.0.domain();
    !domain.starts_with('[') && domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

fn length(min: usize, max: usize) -> (&'static str, String) {
    (
        "length",
        format!("String should have between {min} and {max} characters"),
    )
}
