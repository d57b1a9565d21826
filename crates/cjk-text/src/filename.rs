//! Filename sanitization

/// Common CJK ideographs kept in filenames (U+4E00 ..= U+9FA5)
const CJK_IDEOGRAPHS: std::ops::RangeInclusive<char> = '\u{4e00}'..='\u{9fa5}';

/// Replace every character that is not an ASCII letter, ASCII digit or CJK
/// ideograph with `_`
///
/// Each rejected character becomes exactly one underscore, so the output has
/// the same number of characters as the input. Already sanitized input is
/// returned unchanged.
///
/// # Examples
/// ```
/// use cjk_text::sanitize_filename_component;
/// assert_eq!(sanitize_filename_component("陈总 (Mr. Chen)"), "陈总__Mr__Chen_");
/// ```
pub fn sanitize_filename_component(name: &str) -> String {
    name.chars()
        .map(|c| if is_kept(c) { c } else { '_' })
        .collect()
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || CJK_IDEOGRAPHS.contains(&c)
}
