//! Marker substitution engine for blueprint skeletons.
//!
//! Skeletons are Rust source full of literal braces, so the engine only
//! treats the two-character `{{` sequence as special: `{{ name }}` is a
//! placeholder marker, everything else (including single `{` and `}`) passes
//! through untouched.
//!
//! # Error Handling
//!
//! The engine is fail-safe: a marker that cannot be resolved causes an error
//! rather than silently rendering a raw token into the output. Callers supply
//! a resolver that consults caller parameters first and the template's
//! defaults table second, so a well-formed template never fails to render.

use std::fmt;

/// Error type for skeleton rendering failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A `{{` was found without a matching `}}`.
    UnterminatedMarker {
        /// The position of the unterminated `{{`.
        position: usize,
    },
    /// An empty marker was found (e.g., `{{}}` or `{{ }}`).
    EmptyMarker {
        /// The position of the empty marker.
        position: usize,
    },
    /// A marker named a placeholder the resolver knows nothing about.
    UnknownPlaceholder {
        /// The placeholder name.
        name: String,
        /// The position of the marker.
        position: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnterminatedMarker { position } => {
                write!(f, "unterminated '{{{{' at position {} in skeleton", position)
            }
            RenderError::EmptyMarker { position } => {
                write!(f, "empty placeholder marker at position {} in skeleton", position)
            }
            RenderError::UnknownPlaceholder { name, position } => {
                write!(
                    f,
                    "unknown placeholder '{}' at position {} in skeleton",
                    name, position
                )
            }
        }
    }
}

impl std::error::Error for RenderError {}

/// Render a skeleton by substituting every `{{ name }}` marker.
///
/// # Arguments
///
/// * `skeleton` - The skeleton text containing `{{name}}` markers
/// * `resolve` - Resolver returning the substitution value for a placeholder
///   name, or `None` when the name is unknown
///
/// # Returns
///
/// * `Ok(String)` - The rendered text with all markers substituted
/// * `Err(RenderError)` - If a marker is malformed or unresolvable
pub fn render<F>(skeleton: &str, resolve: F) -> Result<String, RenderError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(skeleton.len());
    let mut rest = skeleton;
    let mut offset = 0;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let marker_pos = offset + start;
        let after = &rest[start + 2..];

        let end = match after.find("}}") {
            Some(end) => end,
            None => {
                return Err(RenderError::UnterminatedMarker {
                    position: marker_pos,
                });
            }
        };

        let name = after[..end].trim();
        if name.is_empty() {
            return Err(RenderError::EmptyMarker {
                position: marker_pos,
            });
        }

        match resolve(name) {
            Some(value) => out.push_str(&value),
            None => {
                return Err(RenderError::UnknownPlaceholder {
                    name: name.to_string(),
                    position: marker_pos,
                });
            }
        }

        let consumed = start + 2 + end + 2;
        offset += consumed;
        rest = &rest[consumed..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolver(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn simple_substitution() {
        let resolve = resolver(&[("name", "HelloWorld")]);
        let result = render("struct {{name}} {}", resolve).unwrap();
        assert_eq!(result, "struct HelloWorld {}");
    }

    #[test]
    fn no_markers_passes_through() {
        let resolve = resolver(&[]);
        let result = render("fn main() { println!(\"hi\"); }", resolve).unwrap();
        assert_eq!(result, "fn main() { println!(\"hi\"); }");
    }

    #[test]
    fn empty_skeleton() {
        let resolve = resolver(&[]);
        assert_eq!(render("", resolve).unwrap(), "");
    }

    #[test]
    fn single_braces_are_literal() {
        // Rust format strings and blocks survive untouched.
        let resolve = resolver(&[("n", "5")]);
        let result = render("format!(\"{}, call #{}\", a, {{n}})", resolve).unwrap();
        assert_eq!(result, "format!(\"{}, call #{}\", a, 5)");
    }

    #[test]
    fn whitespace_in_marker_is_trimmed() {
        let resolve = resolver(&[("greeting", "Hello")]);
        let result = render("{{ greeting }}!", resolve).unwrap();
        assert_eq!(result, "Hello!");
    }

    #[test]
    fn multiple_occurrences() {
        let resolve = resolver(&[("x", "X")]);
        let result = render("{{x}}-{{x}}-{{x}}", resolve).unwrap();
        assert_eq!(result, "X-X-X");
    }

    #[test]
    fn adjacent_markers() {
        let resolve = resolver(&[("a", "A"), ("b", "B")]);
        let result = render("{{a}}{{b}}", resolve).unwrap();
        assert_eq!(result, "AB");
    }

    #[test]
    fn marker_at_start_and_end() {
        let resolve = resolver(&[("x", "value")]);
        assert_eq!(render("{{x}} first", &resolve).unwrap(), "value first");
        assert_eq!(render("last {{x}}", &resolve).unwrap(), "last value");
        assert_eq!(render("{{x}}", &resolve).unwrap(), "value");
    }

    #[test]
    fn empty_value_substitution() {
        let resolve = resolver(&[("empty", "")]);
        let result = render("before{{empty}}after", resolve).unwrap();
        assert_eq!(result, "beforeafter");
    }

    #[test]
    fn multiline_values() {
        let resolve = resolver(&[("body", "line1\nline2")]);
        let result = render("start\n{{body}}\nend", resolve).unwrap();
        assert_eq!(result, "start\nline1\nline2\nend");
    }

    #[test]
    fn unterminated_marker_error() {
        let resolve = resolver(&[]);
        let err = render("struct {{name", resolve).unwrap_err();
        match err {
            RenderError::UnterminatedMarker { position } => assert_eq!(position, 7),
            _ => panic!("unexpected error: {:?}", err),
        }
    }

    #[test]
    fn empty_marker_error() {
        let resolve = resolver(&[]);
        let err = render("oops {{ }}", resolve).unwrap_err();
        match err {
            RenderError::EmptyMarker { position } => assert_eq!(position, 5),
            _ => panic!("unexpected error: {:?}", err),
        }
    }

    #[test]
    fn unknown_placeholder_error() {
        let resolve = resolver(&[("known", "v")]);
        let err = render("{{known}} {{mystery}}", resolve).unwrap_err();
        match err {
            RenderError::UnknownPlaceholder { name, position } => {
                assert_eq!(name, "mystery");
                assert_eq!(position, 10);
            }
            _ => panic!("unexpected error: {:?}", err),
        }
    }

    #[test]
    fn trailing_close_braces_are_literal() {
        let resolve = resolver(&[("name", "Faucet")]);
        let result = render("{{name}}}", resolve).unwrap();
        assert_eq!(result, "Faucet}");
    }

    #[test]
    fn error_display() {
        let err = RenderError::UnknownPlaceholder {
            name: "foo".to_string(),
            position: 10,
        };
        assert_eq!(
            err.to_string(),
            "unknown placeholder 'foo' at position 10 in skeleton"
        );

        let err = RenderError::UnterminatedMarker { position: 5 };
        assert_eq!(err.to_string(), "unterminated '{{' at position 5 in skeleton");
    }
}
