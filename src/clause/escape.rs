/// String escaping for Datalog (EDN) string literals
///
/// Escaping rules:
/// - Backslashes must be escaped as \\
/// - Double quotes must be escaped as \"
/// - Newlines, carriage returns and tabs use their escape sequences
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\") // Must be first!
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
