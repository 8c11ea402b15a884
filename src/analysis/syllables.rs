//! Deterministic syllable estimation.
//!
//! Counts vowel groups (`y` is a vowel except word-initially) after dropping
//! endings that are usually silent:
//!
//! - a final `e`, unless the word ends in consonant + `le` or in `ee`
//! - `es`, unless it follows `s`, `x`, `z`, `c`, `g`, `ch` or `sh`
//! - `ed`, unless it follows `t` or `d`
//!
//! Words of three letters or fewer are one syllable. Any non-empty word has
//! at least one.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate the number of syllables in `word`.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    match letters.len() {
        0 => return 0,
        1..=3 => return 1,
        _ => {}
    }

    let stem = silent_suffix_stem(&letters);

    let mut count = 0;
    let mut prev_vowel = false;
    for (i, &c) in stem.iter().enumerate() {
        let vowel = is_vowel(c) && !(c == 'y' && i == 0);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }
    count.max(1)
}

fn silent_suffix_stem(letters: &[char]) -> &[char] {
    let n = letters.len();
    let last = letters[n - 1];
    let penult = letters[n - 2];
    let before = letters[n - 3];

    match (penult, last) {
        ('e', 's') => {
            let keeps = matches!(before, 's' | 'x' | 'z' | 'c' | 'g')
                || (before == 'h' && n >= 4 && matches!(letters[n - 4], 'c' | 's'));
            if keeps { letters } else { &letters[..n - 2] }
        }
        ('e', 'd') => {
            if matches!(before, 't' | 'd') {
                letters
            } else {
                &letters[..n - 2]
            }
        }
        ('l', 'e') if !is_vowel(before) => letters,
        ('e', 'e') => letters,
        (_, 'e') => &letters[..n - 1],
        _ => letters,
    }
}
