//! Length rules applied to a post draft before it is sent anywhere.
//!
//! Lengths are counted in characters. Both bounds are inclusive: a title of
//! exactly 10 or 150 characters is accepted, 9 and 151 are not.

pub const TITLE_MIN: usize = 10;
pub const TITLE_MAX: usize = 150;
pub const BODY_MIN: usize = 50;
pub const BODY_MAX: usize = 300;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_TOO_SHORT: &str = "Title must be at least 10 characters";
pub const TITLE_TOO_LONG: &str = "Title must not exceed 150 characters";
pub const BODY_REQUIRED: &str = "Body is required";
pub const BODY_TOO_SHORT: &str = "Body must be at least 50 characters";
pub const BODY_TOO_LONG: &str = "Body must not exceed 300 characters";

/// Per-field messages. `None` means the field passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub title: Option<&'static str>,
    pub body: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

pub fn validate_title(title: &str) -> Option<&'static str> {
    check_length(title, TITLE_MIN, TITLE_MAX, [TITLE_REQUIRED, TITLE_TOO_SHORT, TITLE_TOO_LONG])
}

pub fn validate_body(body: &str) -> Option<&'static str> {
    check_length(body, BODY_MIN, BODY_MAX, [BODY_REQUIRED, BODY_TOO_SHORT, BODY_TOO_LONG])
}

/// Validate both fields of a draft.
pub fn validate_post(title: &str, body: &str) -> ValidationErrors {
    ValidationErrors {
        title: validate_title(title),
        body: validate_body(body),
    }
}

/// Whether the create action must stay disabled for this draft.
pub fn is_create_disabled(title: &str, body: &str) -> bool {
    !validate_post(title, body).is_empty()
}

fn check_length(
    value: &str,
    min: usize,
    max: usize,
    [required, too_short, too_long]: [&'static str; 3],
) -> Option<&'static str> {
    if value.is_empty() {
        return Some(required);
    }
    let len = value.chars().count();
    if len < min {
        Some(too_short)
    } else if len > max {
        Some(too_long)
    } else {
        None
    }
}
