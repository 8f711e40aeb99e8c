//! Input text preparation

/// Concatenate all lines with no separator
///
/// Lines end at `\n`, with one trailing `\r` stripped. A final line without
/// a terminator is kept. An instruction broken across a line boundary is
/// therefore still recognized after joining.
pub fn join_lines(text: &str) -> String {
    let mut joined = String::with_capacity(text.len());
    for line in text.lines() {
        joined.push_str(line);
    }
    joined
}
