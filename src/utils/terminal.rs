//! Terminal output sanitization
//!
//! Record text comes from a remote API and ends up painted into the TUI and printed by
//! `exec`. Escape sequences embedded in a title or summary could move the cursor, recolor
//! the screen or retitle the terminal window, so records are passed through
//! [`strip_ansi_codes`] before they enter the record cache.

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strips ANSI escape sequences and stray control characters from a string
///
/// Handles CSI sequences (`ESC [ ... final-byte`), OSC sequences (`ESC ] ... BEL` or
/// `ESC ] ... ESC \`) and two-byte escapes. Tab, newline and carriage return survive.
///
/// # Examples
///
/// ```
/// use portfolio_shell::utils::terminal::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[32mRust\x1b[0m"), "Rust");
/// assert_eq!(strip_ansi_codes("\x1b]0;pwned\x07title"), "title");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            match chars.next() {
                // CSI: parameters until a byte in @..~
                Some('[') => {
                    for next_ch in chars.by_ref() {
                        if ('@'..='~').contains(&next_ch) {
                            break;
                        }
                    }
                }
                // OSC: terminated by BEL or ST (ESC \)
                Some(']') => {
                    while let Some(next_ch) = chars.next() {
                        if next_ch == BEL {
                            break;
                        }
                        if next_ch == ESC && chars.peek() == Some(&'\\') {
                            chars.next();
                            break;
                        }
                    }
                }
                // Two-byte escape or dangling ESC
                _ => {}
            }
            continue;
        }

        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }

        result.push(ch);
    }

    result
}
