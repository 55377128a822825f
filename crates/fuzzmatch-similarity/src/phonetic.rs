//! Soundex phonetic coding.

use crate::text::guarded;

const CODE_LEN: usize = 4;
const EMPTY_CODE: &str = "0000";

fn consonant_class(ch: char) -> Option<char> {
    match ch {
        'b' | 'f' | 'p' | 'v' => Some('1'),
        'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => Some('2'),
        'd' | 't' => Some('3'),
        'l' => Some('4'),
        'm' | 'n' => Some('5'),
        'r' => Some('6'),
        _ => None,
    }
}

/// Four-character Soundex code: the first letter followed by three digits.
///
/// Only ASCII letters take part. Adjacent letters of the same class collapse
/// into one digit; vowels and h/w/y carry no digit and separate repeats.
/// Input without letters codes to `"0000"`.
pub fn soundex_code(raw: &str) -> String {
    let letters: Vec<char> = raw
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    let Some(first) = letters.first() else {
        return EMPTY_CODE.to_string();
    };

    let mut code = String::with_capacity(CODE_LEN);
    code.push(first.to_ascii_uppercase());
    let mut previous = consonant_class(*first);

    for ch in &letters[1..] {
        if code.len() >= CODE_LEN {
            break;
        }
        match consonant_class(*ch) {
            Some(digit) if Some(digit) != previous => {
                code.push(digit);
                previous = Some(digit);
            }
            Some(_) => {}
            None => previous = None,
        }
    }

    while code.len() < CODE_LEN {
        code.push('0');
    }
    code
}

/// Fraction of the four Soundex code positions that agree.
pub fn soundex(a: &str, b: &str) -> f64 {
    guarded(a, b, |a, b| {
        let code_a = soundex_code(a);
        let code_b = soundex_code(b);
        let equal = code_a
            .chars()
            .zip(code_b.chars())
            .filter(|(x, y)| x == y)
            .count();
        equal as f64 / CODE_LEN as f64
    })
}
