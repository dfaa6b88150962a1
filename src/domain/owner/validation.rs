use crate::domain::owner::model::OwnerReceive;
use crate::domain::view::BindingResult;

pub const OWNER_OBJECT: &str = "owner";
pub const TELEPHONE_MAX_DIGITS: usize = 10;

const NOT_EMPTY: &str = "NotEmpty";
const DIGITS: &str = "Digits";

impl OwnerReceive {
    /// Checks every field of the form. Blank values count as empty.
    pub fn validate(&self) -> BindingResult {
        let mut result = BindingResult::new(OWNER_OBJECT);

        let required = [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("address", &self.address),
            ("city", &self.city),
            ("telephone", &self.telephone),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                result.reject_value(field, NOT_EMPTY, "must not be empty");
            }
        }

        // Untrimmed: the value is stored as submitted.
        if !self.telephone.trim().is_empty() && !is_telephone(&self.telephone) {
            result.reject_value(
                "telephone",
                DIGITS,
                format!("numeric value out of bounds (<{} digits>.<0 digits> expected)", TELEPHONE_MAX_DIGITS),
            );
        }

        result
    }
}

fn is_telephone(value: &str) -> bool {
    value.len() <= TELEPHONE_MAX_DIGITS && value.chars().all(|c| c.is_ascii_digit())
}
