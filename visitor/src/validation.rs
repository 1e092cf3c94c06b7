/// Minimum name length the form asks for. The service does not enforce it.
pub const NAME_MIN_LEN: usize = 3;

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is required");
    }

    if name.chars().count() < NAME_MIN_LEN {
        return Err("name must be at least 3 characters long");
    }

    Ok(())
}

pub fn validate_reason(reason: &str, required: bool) -> Result<(), &'static str> {
    if required && reason.is_empty() {
        return Err("reason is required for new visitors");
    }

    Ok(())
}
