// src/util/sanitize.rs
use regex::Regex;

/// Strip contiguous `<script>...</script>` blocks from HTML.
///
/// This is a single best-effort regex for a classroom context, not a security
/// boundary: it does not parse HTML and leaves event-handler attributes,
/// inline styles, and every other active-content vector untouched. A real
/// deployment must replace it with a structural HTML sanitizer.
///
/// Matching is case-insensitive and spans newlines.
///
/// # Examples
///
/// ```
/// use tabforge::util::sanitize::strip_script_blocks;
///
/// assert_eq!(strip_script_blocks("<script>x</script><p>y</p>"), "<p>y</p>");
/// assert_eq!(strip_script_blocks("<p>no script</p>"), "<p>no script</p>");
/// ```
pub fn strip_script_blocks(html: &str) -> String {
    let script_re = Regex::new(r"(?is)<script\b.*?</script>").unwrap();
    script_re.replace_all(html, "").into_owned()
}
