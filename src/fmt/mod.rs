//! Positional placeholder substitution for failure messages.
//!
//! Templates use `%s` (display form), `%d` (numeric form), `%j` (JSON) and
//! `%%` (literal percent). Substitution is fully resolved before an error
//! is constructed, so callers never see an unformatted template.

use crate::value::Value;

/// Substitute `args` into `template`, consuming placeholders left to right.
///
/// A placeholder with no remaining argument is left verbatim, surplus
/// arguments are ignored, and a template with no placeholders is returned
/// unchanged.
///
/// # Example
///
/// ```rust
/// use precond::fmt::sprintf;
/// use precond::value::Value;
///
/// let msg = sprintf("expected %s but got %d", &["three".into(), 5.into()]);
/// assert_eq!(msg, "expected three but got 5");
/// ```
pub fn sprintf(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }

        match chars.peek() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(&spec) if matches!(spec, 's' | 'd' | 'j') => {
                if let Some(arg) = remaining.next() {
                    chars.next();
                    out.push_str(&substitute(spec, arg));
                } else {
                    // Out of arguments: leave the placeholder verbatim.
                    out.push('%');
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

fn substitute(spec: char, arg: &Value) -> String {
    match spec {
        's' => arg.to_string(),
        'd' => match arg.as_number() {
            Some(n) => Value::Number(n).to_string(),
            None => "NaN".to_string(),
        },
        'j' => arg.to_json().to_string(),
        _ => unreachable!("placeholder specifiers are filtered by the caller"),
    }
}
