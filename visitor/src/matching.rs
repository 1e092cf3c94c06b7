use crate::VisitorRecord;

/// Index of the first name equal to `typed`, ignoring case.
///
/// Whitespace and diacritics are significant: `"alice "` and `"Alicé"` do not
/// match `"alice"`.
pub fn find_name<'a>(typed: &str, names: impl IntoIterator<Item = &'a str>) -> Option<usize> {
    let typed = typed.to_lowercase();
    names
        .into_iter()
        .position(|name| name.to_lowercase() == typed)
}

/// First visitor in `visitors` (in list order) whose name equals `typed`,
/// ignoring case.
pub fn match_visitor<'v>(typed: &str, visitors: &'v [VisitorRecord]) -> Option<&'v VisitorRecord> {
    find_name(typed, visitors.iter().map(|v| v.name.as_str())).map(|idx| &visitors[idx])
}

/// Returning visitors may leave the reason empty; everyone else must give one.
pub fn reason_required(matched: Option<&VisitorRecord>) -> bool {
    matched.is_none()
}
