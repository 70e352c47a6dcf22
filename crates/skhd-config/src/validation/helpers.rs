//! Shared helpers used by the domain validators.

/// Push an error unless `value` is `owner/package/command` with three
/// non-empty segments.
pub(crate) fn validate_identifier(errors: &mut Vec<String>, name: &str, value: &str) {
    let segments: Vec<&str> = value.split('/').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.trim().is_empty()) {
        errors.push(format!(
            "{name} = '{value}' is not of the form owner/package/command"
        ));
    }
}

/// Characters that split a generated binding line into mode, chord and
/// command.
pub(crate) const BINDING_DELIMITERS: [char; 3] = ['<', ':', ';'];

pub(crate) fn has_line_break(value: &str) -> bool {
    value.contains(['\n', '\r'])
}
