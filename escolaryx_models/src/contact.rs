use nutype::nutype;

use crate::email_address::EmailAddress;

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub last_name: ContactLastName,
    pub email: EmailAddress,
    pub message: ContactMessage,
}

impl ContactSubmission {
    /// `"<name> <last_name>"`, as used in the confirmation greeting.
    pub fn full_name(&self) -> String {
        format!("{} {}", *self.name, *self.last_name)
    }
}

#[nutype(
    validate(len_char_min = 2, len_char_max = 50),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactName(String);

impl ContactName {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 50;
}

#[nutype(
    validate(len_char_min = 2, len_char_max = 50),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactLastName(String);

impl ContactLastName {
    pub const MIN_LEN: usize = 2;
    pub const MAX_LEN: usize = 50;
}

#[nutype(
    validate(len_char_min = 10, len_char_max = 500),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub const MIN_LEN: usize = 10;
    pub const MAX_LEN: usize = 500;
}
