//! Escape-aware splitting on a single-character separator.

use super::ESCAPE;

/// Splits `s` on every unescaped occurrence of `sep`.
///
/// A backslash directly followed by `sep` yields a literal `sep` inside the
/// current segment. Every other character, including a backslash that is not
/// followed by `sep`, is copied as is. The last segment is always emitted, so a
/// string containing `k` unescaped separators produces `k + 1` segments.
///
/// # Example
/// ```rust
/// use kaleido::syntax::split_escaped;
/// assert_eq!(split_escaped(r"a\,b,c", ','), vec!["a,b", "c"]);
/// assert_eq!(split_escaped("", ','), vec![""]);
/// ```
pub fn split_escaped(s: &str, sep: char) -> Vec<String> {
    tracing::trace!(input = s, %sep, "split_escaped");

    let mut parts = Vec::new();
    let mut buf = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ESCAPE && chars.peek() == Some(&sep) {
            chars.next();
            buf.push(sep);
        } else if c == sep {
            parts.push(std::mem::take(&mut buf));
        } else {
            buf.push(c);
        }
    }
    parts.push(buf);

    tracing::trace!(?parts, "split_escaped done");
    parts
}

/// Escapes every literal `sep` in `segment` so that [`split_escaped`] reads it
/// back as part of the segment.
pub fn escape_segment(segment: &str, sep: char) -> String {
    let mut out = String::with_capacity(segment.len());
    for c in segment.chars() {
        if c == sep {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Joins segments with `sep`, escaping separators inside each segment.
///
/// This is the inverse of [`split_escaped`]: joining the result of a split
/// reproduces the original string.
pub fn join_escaped<S: AsRef<str>>(segments: &[S], sep: char) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push_str(&escape_segment(segment.as_ref(), sep));
    }
    out
}
