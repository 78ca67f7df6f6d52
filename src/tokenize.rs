/// Sentence tokenization seam. The layout pipeline only needs an ordered
/// sequence of sentences; anything able to produce one can drive it.
pub trait SentenceSplitter {
    /// Split free narrative text into sentences, in input order. An empty
    /// result is the caller's empty-input condition; the splitter itself
    /// never errors.
    fn split_into_sentences(&self, text: &str) -> Vec<String>;
}

/// Conservative rule-based splitter. A sentence ends at `.`, `!` or `?`
/// (plus any run of terminators and closing quotes) when followed by
/// whitespace, with a guard for common abbreviations. Everything in the
/// input ends up in exactly one sentence; nothing is rewritten.
#[derive(Debug, Default, Clone, Copy)]
pub struct RuleSplitter;

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "etc", "vs", "e.g", "i.e",
];

impl SentenceSplitter for RuleSplitter {
    fn split_into_sentences(&self, text: &str) -> Vec<String> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences: Vec<String> = Vec::new();
        let mut start = 0usize;

        let mut i = 0usize;
        while i < chars.len() {
            let (pos, ch) = chars[i];
            if !matches!(ch, '.' | '!' | '?') {
                i += 1;
                continue;
            }

            // swallow terminator runs ("...", "?!") and trailing quotes
            let mut j = i;
            while j + 1 < chars.len() && matches!(chars[j + 1].1, '.' | '!' | '?') {
                j += 1;
            }
            while j + 1 < chars.len()
                && matches!(chars[j + 1].1, '"' | '\'' | ')' | '\u{201d}' | '\u{2019}')
            {
                j += 1;
            }

            let end = chars.get(j + 1).map(|&(p, _)| p).unwrap_or(text.len());
            let followed_by_space = chars
                .get(j + 1)
                .map(|&(_, c)| c.is_whitespace())
                .unwrap_or(true);
            let abbreviation = ch == '.' && j == i && ends_with_abbreviation(&text[start..pos]);

            if followed_by_space && !abbreviation {
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = end;
            }

            i = j + 1;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }

        sentences
    }
}

fn ends_with_abbreviation(prefix: &str) -> bool {
    let last_word = prefix
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    ABBREVIATIONS
        .iter()
        .any(|abbr| last_word.eq_ignore_ascii_case(abbr))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<String> {
        RuleSplitter.split_into_sentences(text)
    }

    #[test]
    fn splits_plain_sentences() {
        assert_eq!(
            split("I persevered. Each obstacle became an opportunity. Now I help others."),
            vec![
                "I persevered.",
                "Each obstacle became an opportunity.",
                "Now I help others."
            ]
        );
    }

    #[test]
    fn keeps_terminator_runs_together() {
        assert_eq!(
            split("Really?! I had no idea... It was true."),
            vec!["Really?!", "I had no idea...", "It was true."]
        );
    }

    #[test]
    fn closing_quotes_stay_with_their_sentence() {
        assert_eq!(
            split("They said \"you can't.\" I proved them wrong."),
            vec!["They said \"you can't.\"", "I proved them wrong."]
        );
    }

    #[test]
    fn abbreviations_do_not_split() {
        assert_eq!(
            split("I met Dr. Okafor in Lagos. She changed my life."),
            vec!["I met Dr. Okafor in Lagos.", "She changed my life."]
        );
    }

    #[test]
    fn decimal_points_do_not_split() {
        assert_eq!(
            split("Wages rose 3.5 percent that year. Nobody noticed."),
            vec!["Wages rose 3.5 percent that year.", "Nobody noticed."]
        );
    }

    #[test]
    fn empty_and_blank_input_produce_no_sentences() {
        assert!(split("").is_empty());
        assert!(split("   \n ").is_empty());
    }

    #[test]
    fn unterminated_tail_is_kept() {
        assert_eq!(
            split("It ended quietly. No final punctuation"),
            vec!["It ended quietly.", "No final punctuation"]
        );
    }
}
