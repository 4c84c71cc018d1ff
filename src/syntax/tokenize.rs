//! Turns raw specification strings into attribute lists.

use super::{split_escaped, ATTRIBUTE_SEPARATOR, VARIANT_SEPARATOR};

/// One variant occurrence: its attributes followed by the variant name.
///
/// The name is always the last element; an attribute list produced by
/// [`tokenize`] is never empty.
pub type AttrList = Vec<String>;

/// Tokenizes specification strings into attribute lists.
///
/// Every string is split into variants on `,` and every variant into tokens on
/// `:`. Empty tokens are dropped. A bare name inherits the attribute prefix of
/// the most recent attributed variant in the same string; each string starts
/// with an empty prefix, so nothing is inherited across strings.
///
/// # Example
/// ```rust
/// use kaleido::syntax::tokenize;
/// assert_eq!(
///     tokenize(["prod:v1,v2", "test:v3"]),
///     vec![
///         vec!["prod", "v1"],
///         vec!["prod", "v2"],
///         vec!["test", "v3"],
///     ]
/// );
/// ```
pub fn tokenize<I, S>(args: I) -> Vec<AttrList>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lists = Vec::new();

    for arg in args {
        let arg = arg.as_ref();
        tracing::debug!(arg, "tokenizing variant specification");

        let mut inherited: Vec<String> = Vec::new();
        for segment in split_escaped(arg, VARIANT_SEPARATOR) {
            let mut tokens: AttrList = split_escaped(&segment, ATTRIBUTE_SEPARATOR)
                .into_iter()
                .filter(|token| !token.is_empty())
                .collect();

            if tokens.len() == 1 && !inherited.is_empty() {
                let mut with_prefix = inherited.clone();
                with_prefix.append(&mut tokens);
                tokens = with_prefix;
            }
            if tokens.len() > 1 {
                inherited = tokens[..tokens.len() - 1].to_vec();
            }
            if tokens.is_empty() {
                continue;
            }
            lists.push(tokens);
        }
    }

    tracing::debug!(?lists, "tokenized attribute lists");
    lists
}
