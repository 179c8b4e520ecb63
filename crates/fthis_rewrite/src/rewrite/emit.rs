//! Standard-syntax emission for classified shorthand.

use crate::options::RewriteOptions;

use super::form::{Body, Shorthand};
use super::rewrite_chars;

/// Append the standard-syntax form of `form` to `out`.
///
/// A preceding `async` recorded by the classifier is cut from `out` first.
/// Parameters and bodies are rewritten recursively, so nested shorthand is
/// expanded too.
pub fn emit(form: &Shorthand<'_>, options: &RewriteOptions, out: &mut String) {
    if let Some(at) = form.async_at {
        out.truncate(at);
    }

    let params = form
        .params
        .map(|p| rewrite_chars(p, options))
        .unwrap_or_default();
    let prefix = if form.is_async() { "async " } else { "" };

    let rhs = match form.body {
        Body::Block(body) => {
            let body = rewrite_chars(body, options);
            if form.is_generator {
                format!("{prefix}function* ({params}) {{{body}}}")
            } else {
                format!("{prefix}({params}) => {{{body}}}")
            }
        }
        Body::Expression(expr) => {
            let expr = rewrite_chars(expr, options);
            let expr = clean_expression(&expr);
            format!("{prefix}({params}) => {expr}")
        }
    };

    match form.name {
        Some(name) => {
            let name: String = name.iter().collect();
            out.push_str(&format!(
                "{} {name} = {rhs};",
                options.declaration_keyword
            ));
        }
        None => {
            out.push('(');
            out.push_str(&rhs);
            out.push(')');
        }
    }
}

/// Drop trailing semicolons (and whitespace around them) from an expression body.
fn clean_expression(expr: &str) -> &str {
    expr.trim_end().trim_end_matches(';').trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_semicolons_are_dropped() {
        assert_eq!(clean_expression("a + b ;; \n"), "a + b");
        assert_eq!(clean_expression("f(';')"), "f(';')");
    }
}
