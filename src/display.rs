//! Small text helpers shared by both games' displays.

/// Join items as a sentence list: `"a"`, `"a and b"`, `"a, b, and c"`.
///
/// ```
/// use parlor_games::display::join_words;
///
/// assert_eq!(join_words(&["1", "2", "3"], "or"), "1, 2, or 3");
/// assert_eq!(join_words(&["Ace of Heart", "K of Club"], "and"), "Ace of Heart and K of Club");
/// ```
pub fn join_words<T: AsRef<str>>(items: &[T], word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), word, second.as_ref()),
        [init @ .., last] => {
            let mut out = init
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(", {} {}", word, last.as_ref()));
            out
        }
    }
}

/// Draw `msg` inside an ASCII box.
pub fn boxed(msg: &str) -> String {
    let width = msg.chars().count() + 2;
    let horizontal = format!("+{}+", "-".repeat(width));
    let vertical = format!("|{}|", " ".repeat(width));

    [
        horizontal.clone(),
        vertical.clone(),
        format!("| {msg} |"),
        vertical,
        horizontal,
    ]
    .join("\n")
}

/// Horizontal rule between turns.
pub const SEPARATOR: &str = "=========================";
