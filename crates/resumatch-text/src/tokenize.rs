//! Rule-based English tokenizer

const CLITICS: &[&str] = &[
    "n't", "'s", "'re", "'ll", "'ve", "'m", "'d", "n’t", "’s", "’re", "’ll", "’ve", "’m", "’d",
];

/// Split text into surface tokens.
///
/// Whitespace separates chunks; leading and trailing punctuation becomes
/// one token per character, clitics are split off the end of a word, and
/// hyphens or slashes between two letters split a compound.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }
    tokens
}

fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    let Some(start) = chunk.find(|c: char| c.is_alphanumeric()) else {
        out.extend(chunk.chars().map(String::from));
        return;
    };
    let end = chunk
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(chunk.len());

    out.extend(chunk[..start].chars().map(String::from));

    let core = &chunk[start..end];
    let (stem, clitic) = split_clitic(core);
    split_infixes(stem, out);
    if let Some(clitic) = clitic {
        out.push(clitic.to_string());
    }

    out.extend(chunk[end..].chars().map(String::from));
}

fn split_clitic(word: &str) -> (&str, Option<&str>) {
    for clitic in CLITICS {
        if word.len() <= clitic.len() {
            continue;
        }
        let at = word.len() - clitic.len();
        if let Some(tail) = word.get(at..) {
            if tail.eq_ignore_ascii_case(clitic) {
                return (&word[..at], Some(tail));
            }
        }
    }
    (word, None)
}

fn split_infixes(word: &str, out: &mut Vec<String>) {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut piece_start = 0;

    for k in 1..chars.len().saturating_sub(1) {
        let (i, c) = chars[k];
        if (c == '-' || c == '/') && chars[k - 1].1.is_alphabetic() && chars[k + 1].1.is_alphabetic()
        {
            if piece_start < i {
                out.push(word[piece_start..i].to_string());
            }
            out.push(c.to_string());
            piece_start = i + c.len_utf8();
        }
    }

    if piece_start < word.len() {
        out.push(word[piece_start..].to_string());
    }
}
