mod matching;
mod record;
mod validation;

pub use matching::{find_name, match_visitor, reason_required};
pub use record::VisitorRecord;
pub use validation::{NAME_MIN_LEN, validate_name, validate_reason};
