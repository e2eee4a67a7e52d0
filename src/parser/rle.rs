//! Run-length codec for board rows and move sequences
//!
//! The collection format compresses repeated symbols as `<digits><symbol>`
//! and marks board-row boundaries with `|`, e.g. `"3#@2$"` is `"###@$$"`
//! and `"4#|#2-#|4#"` is a three-row board. Move sequences use the same
//! repetition shorthand but have no row concept.

/// Upper bound on a single run length. No real board row or move
/// sequence comes close; counts beyond this are clamped so an absurd
/// digit string cannot overflow the count or balloon the output.
const MAX_RUN: usize = 1 << 16;

/// Decode run-length encoded text.
///
/// `<digits><symbol>` expands to the symbol repeated that many times
/// (clamped to [`MAX_RUN`]) and `|` becomes a real newline. Text without
/// digits or `|` is returned unchanged, so decoding is idempotent on
/// already-decoded input.
pub fn decode(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut run: usize = 0;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            run = run.saturating_mul(10).saturating_add(digit as usize);
            continue;
        }

        let symbol = if ch == '|' { '\n' } else { ch };
        for _ in 0..run.clamp(1, MAX_RUN) {
            decoded.push(symbol);
        }
        run = 0;
    }

    // A dangling count with no symbol after it carries no data.
    decoded
}

/// Encode text into run-length form.
///
/// Runs of two or more identical symbols become `<count><symbol>`;
/// newlines are written as `|`.
pub fn encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let mut count = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            count += 1;
        }

        if count > 1 {
            encoded.push_str(&count.to_string());
        }
        encoded.push(if ch == '\n' { '|' } else { ch });
    }

    encoded
}

/// True if the text contains a digit and is therefore a decode candidate.
pub fn is_encoded(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_board_row() {
        assert_eq!(decode("3#@2$"), "###@$$");
    }

    #[test]
    fn test_decode_multi_row_board() {
        assert_eq!(decode("4#|#2-#|4#"), "####\n#--#\n####");
    }

    #[test]
    fn test_decode_moves() {
        assert_eq!(decode("3lU2rd"), "lllUrrd");
    }

    #[test]
    fn test_decode_multi_digit_count() {
        assert_eq!(decode("12#"), "############");
    }

    #[test]
    fn test_decode_idempotent_on_plain_text() {
        let plain = "##@ $.##";
        assert_eq!(decode(plain), plain);
        assert_eq!(decode(&decode(plain)), plain);
    }

    #[test]
    fn test_decode_preserves_history_marker() {
        assert_eq!(decode("2l*3R"), "ll*RRR");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_overlong_run_count_is_clamped() {
        // More digits than usize can hold; the count saturates and the
        // expansion is clamped instead of panicking.
        let decoded = decode("99999999999999999999#");
        assert_eq!(decoded.len(), MAX_RUN);
        assert!(decoded.chars().all(|c| c == '#'));
    }

    #[test]
    fn test_encode_basic() {
        assert_eq!(encode("###@$$"), "3#@2$");
        assert_eq!(encode("lllUrrd"), "3lU2rd");
    }

    #[test]
    fn test_encode_newline_as_row_separator() {
        assert_eq!(encode("####\n#  #\n####"), "4#|#2 #|4#");
    }

    #[test]
    fn test_round_trip() {
        for text in ["####\n#@$.#\n####", "lllUUrrrrdD", "# #", "*", ""] {
            assert_eq!(decode(&encode(text)), text, "round trip of {text:?}");
        }
    }

    #[test]
    fn test_is_encoded() {
        assert!(is_encoded("3#@2$"));
        assert!(!is_encoded("###@$$"));
        assert!(!is_encoded(""));
    }
}
