use std::fmt::Display;

// Renders an ordered error list under the caller's header, one message
// per line, in the order they were recorded.
pub fn render_error_report<E: Display>(header: &str, errors: &[E]) -> String {
    let mut report = String::from(header);

    for error in errors {
        report.push_str("\n\t");
        report.push_str(&error.to_string());
    }

    report
}
