//! Lookup-then-rules English lemmatizer

use crate::model::ModelError;
use std::collections::{HashMap, HashSet};

/// Endings after which a dropped `e` is restored (`managing` -> `manage`)
const E_RESTORE: &[&str] = &[
    "at", "iz", "yz", "ur", "bl", "pl", "tl", "dl", "ag", "uc", "rc", "rg", "iv", "ov", "ac",
    "ic", "os", "rv", "lv",
];

/// Irregular forms plus the set of known lemmas.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    exceptions: HashMap<String, String>,
    known: HashSet<String>,
}

impl Lexicon {
    /// Parse `form<TAB>lemma` lines; a bare word is a known lemma.
    /// Blank lines and `#` comments are skipped.
    pub fn parse(source: &str) -> Result<Self, ModelError> {
        let mut lexicon = Self::default();

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
            let invalid = |reason: &str| ModelError::InvalidLexicon {
                line: idx + 1,
                reason: reason.to_string(),
            };
            if fields.iter().any(|f| !is_word(f)) {
                return Err(invalid("entries must be single alphabetic words"));
            }
            match fields.as_slice() {
                [lemma] => {
                    lexicon.known.insert(lemma.to_lowercase());
                }
                [form, lemma] => {
                    let lemma = lemma.to_lowercase();
                    lexicon.exceptions.insert(form.to_lowercase(), lemma.clone());
                    lexicon.known.insert(lemma);
                }
                _ => return Err(invalid("expected `form<TAB>lemma` or a bare lemma")),
            }
        }

        lexicon.check_cycles()?;
        Ok(lexicon)
    }

    /// Entries from `other` take precedence. Fails when the combined
    /// exceptions map a form back onto itself through other forms.
    pub fn merge(&mut self, other: Lexicon) -> Result<(), ModelError> {
        self.exceptions.extend(other.exceptions);
        self.known.extend(other.known);
        self.check_cycles()
    }

    /// Exception chains must end: `went -> go -> went` would never reach
    /// a fixed point. A form mapped to itself is fine.
    fn check_cycles(&self) -> Result<(), ModelError> {
        let mut forms: Vec<&String> = self.exceptions.keys().collect();
        forms.sort();

        for form in forms {
            let mut seen = HashSet::new();
            let mut current = form;
            while let Some(next) = self.exceptions.get(current) {
                if next == current {
                    break;
                }
                if !seen.insert(current) {
                    return Err(ModelError::LexiconCycle {
                        word: form.clone(),
                    });
                }
                current = next;
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.exceptions.len() + self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Base form of a lower-cased word.
    ///
    /// Suffix rules shorten the word, an exception lands on a known lemma
    /// and exception chains are acyclic, so reducing until nothing changes
    /// terminates and makes the result a fixed point.
    pub fn lemmatize(&self, word: &str) -> String {
        let mut current = word.to_string();
        loop {
            let next = self.reduce(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn reduce(&self, word: &str) -> String {
        if let Some(lemma) = self.exceptions.get(word) {
            return lemma.clone();
        }
        if self.known.contains(word) || !word.chars().all(char::is_alphabetic) {
            return word.to_string();
        }
        let len = word.chars().count();
        if len <= 3 {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies").filter(|_| len > 4) {
            return format!("{stem}y");
        }
        if let Some(stem) = word.strip_suffix("ied").filter(|_| len > 4) {
            return format!("{stem}y");
        }
        if let Some(stem) = word.strip_suffix("sses") {
            return format!("{stem}ss");
        }
        if ["ches", "shes", "xes", "zes"].iter().any(|s| word.ends_with(s)) {
            let without_es = &word[..word.len() - 2];
            let without_s = &word[..word.len() - 1];
            return self.pick(&[without_es.to_string(), without_s.to_string()]);
        }
        if word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
            return word[..word.len() - 1].to_string();
        }
        if word.ends_with("eed") {
            return word.to_string();
        }
        let stem = if len >= 5 {
            word.strip_suffix("ing").or_else(|| word.strip_suffix("ed"))
        } else {
            word.strip_suffix("ed")
        };
        match stem {
            Some(base) if base.chars().count() >= 3 && has_vowel(base) => self.verb_base(base),
            _ => word.to_string(),
        }
    }

    fn verb_base(&self, base: &str) -> String {
        let restored = format!("{base}e");
        let undoubled = undouble(base);

        let mut candidates = vec![base.to_string(), restored.clone()];
        candidates.extend(undoubled.clone());
        if let Some(hit) = candidates.iter().find(|c| self.known.contains(c.as_str())) {
            return hit.clone();
        }

        if let Some(single) = undoubled {
            single
        } else if E_RESTORE.iter().any(|end| base.ends_with(end)) {
            restored
        } else {
            base.to_string()
        }
    }

    fn pick(&self, candidates: &[String]) -> String {
        candidates
            .iter()
            .find(|c| self.known.contains(c.as_str()))
            .unwrap_or(&candidates[0])
            .clone()
    }
}

fn is_word(field: &str) -> bool {
    !field.is_empty() && field.chars().all(char::is_alphabetic)
}

fn has_vowel(word: &str) -> bool {
    word.chars().any(|c| "aeiouy".contains(c))
}

/// `stopp` -> `stop`; `ll`, `ss`, `zz` and `ff` stay doubled
fn undouble(base: &str) -> Option<String> {
    let mut rev = base.chars().rev();
    let (last, prev) = (rev.next()?, rev.next()?);
    if last == prev && !"aeiouylszf".contains(last) {
        Some(base[..base.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}
