/// Contact fields that can carry a validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    FirstName,
    Phone,
    Email,
}

/// Everything the visitor has told us so far. Lives for one quiz run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuizAnswers {
    pub project_type: Option<String>,
    pub timeline: Option<String>,
    pub budget_range: Option<String>,
    pub zip_code: String,
    pub first_name: String,
    pub phone: String,
    pub email: String,
}

impl QuizAnswers {
    pub fn phone_digits(&self) -> String {
        phone_digits(&self.phone)
    }

    pub fn has_full_zip(&self) -> bool {
        self.zip_code.len() == ZIP_LEN
    }
}

pub const ZIP_LEN: usize = 5;
pub const PHONE_LEN: usize = 10;

pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Formats partial input as `(XXX) XXX-XXXX` while the user types.
pub fn format_phone(raw: &str) -> String {
    let digits: String = phone_digits(raw).chars().take(PHONE_LEN).collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

pub fn sanitize_zip(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(ZIP_LEN).collect()
}
