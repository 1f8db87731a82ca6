/// Collapse whitespace runs to single spaces and capitalize each word:
/// first character title-cased, the rest lower-cased.
pub fn capwords(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let Some(first) = word.chars().next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    push_titlecase(first, &mut out);
    // Lower-case the whole word so a final sigma sees the letters before it.
    out.extend(word.to_lowercase().chars().skip(first.to_lowercase().count()));
    out
}

/// Title case of a single character.
///
/// Differs from upper case for the Latin digraphs, Georgian, Greek letters
/// with iota subscript, and characters whose upper case expands to several
/// characters (`ß` becomes `Ss`).
fn push_titlecase(first: char, out: &mut String) {
    let single = match first {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => first,
        '\u{1F80}'..='\u{1FAF}' => char::from_u32(u32::from(first) | 0x8).unwrap_or(first),
        '\u{1FB3}' | '\u{1FBC}' => '\u{1FBC}',
        '\u{1FC3}' | '\u{1FCC}' => '\u{1FCC}',
        '\u{1FF3}' | '\u{1FFC}' => '\u{1FFC}',
        '\u{0149}' => {
            out.extend(first.to_uppercase());
            return;
        }
        _ => {
            let greek = ('\u{1F00}'..='\u{1FFF}').contains(&first);
            let mut upper = first.to_uppercase();
            out.extend(upper.next());
            for tail in upper {
                if greek && tail == '\u{0399}' {
                    out.push('\u{0345}');
                } else {
                    out.extend(tail.to_lowercase());
                }
            }
            return;
        }
    };
    out.push(single);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capwords("BELL HELICOPTER TEXTRON"), "Bell Helicopter Textron");
        assert_eq!(capwords("mcDONNELL-douglas"), "Mcdonnell-douglas");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(capwords("  UNITED   STATES\tNAVY  "), "United States Navy");
        assert_eq!(capwords("   "), "");
    }

    #[test]
    fn handles_non_ascii_letters() {
        assert_eq!(capwords("ÉCOLE NATIONALE"), "École Nationale");
    }

    #[test]
    fn first_letter_takes_title_case() {
        assert_eq!(capwords("ßTRASSE ﬁSH"), "Sstrasse Fish");
        assert_eq!(capwords("\u{01C4}UKA \u{01C6}UKA"), "\u{01C5}uka \u{01C5}uka");
        assert_eq!(capwords("\u{1FB3}"), "\u{1FBC}");
        assert_eq!(capwords("\u{1FB2}"), "\u{1FBA}\u{0345}");
        assert_eq!(capwords("\u{0149}"), "\u{02BC}N");
    }

    #[test]
    fn word_final_sigma_is_lowered_in_context() {
        assert_eq!(capwords("ΟΔΟΣ ΑΣ"), "Οδος Ας");
    }
}
