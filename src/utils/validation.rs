//! Flattening of `validator` error trees into user-facing messages.

use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Collects one message per failed rule, prefixed with the quoted field path.
///
/// Nested structs contribute dotted paths (`"listing.title"`), list items an
/// index (`"items[0].name"`). Messages are sorted so the output does not
/// depend on hash map iteration order.
///
/// # Examples
///
/// ```ignore
/// // {"listing": {"price": -1}}
/// assert_eq!(
///     collect_messages(&errors),
///     vec!["\"listing.price\" must be greater than or equal to 0"]
/// );
/// ```
pub fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    walk(None, errors, &mut messages);
    messages.sort();
    messages
}

fn walk(prefix: Option<&str>, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(
                    field_errors
                        .iter()
                        .map(|e| format!("\"{path}\" {}", describe(e))),
                );
            }
            ValidationErrorsKind::Struct(inner) => walk(Some(&path), inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    walk(Some(&format!("{path}[{index}]")), inner, out);
                }
            }
        }
    }
}

fn describe(error: &ValidationError) -> String {
    match error.message.as_deref() {
        Some(message) => message.to_string(),
        None => format!("failed the '{}' check", error.code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Inner {
        #[validate(length(min = 1, message = "is not allowed to be empty"))]
        title: String,
        #[validate(range(min = 0.0))]
        price: f64,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(nested)]
        listing: Inner,
    }

    #[test]
    fn test_nested_paths_are_dotted() {
        let outer = Outer {
            listing: Inner {
                title: String::new(),
                price: 10.0,
            },
        };

        let messages = collect_messages(&outer.validate().unwrap_err());
        assert_eq!(messages, vec!["\"listing.title\" is not allowed to be empty"]);
    }

    #[test]
    fn test_missing_message_uses_code() {
        let outer = Outer {
            listing: Inner {
                title: "Cabin".to_string(),
                price: -1.0,
            },
        };

        let messages = collect_messages(&outer.validate().unwrap_err());
        assert_eq!(messages, vec!["\"listing.price\" failed the 'range' check"]);
    }

    #[test]
    fn test_messages_are_sorted() {
        let outer = Outer {
            listing: Inner {
                title: String::new(),
                price: -5.0,
            },
        };

        let messages = collect_messages(&outer.validate().unwrap_err());
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("\"listing.price\""));
        assert!(messages[1].starts_with("\"listing.title\""));
    }
}
