use once_cell::sync::Lazy;
use regex::Regex;

/// URL-like tokens: http/https schemes and bare www hosts
static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"http\S+|www\S+|https\S+").unwrap());

/// @mentions (whole token) and literal # markers (hashtag text survives)
static MENTION_OR_HASH_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+|#").unwrap());

/// Anything that is neither a word character nor whitespace
static NON_WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Runs of digits
static DIGIT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Clean a raw tweet before classification, matching how the model's
/// training data was prepared. The steps are order-sensitive: lowercase,
/// drop URLs, drop mentions and hash markers, drop punctuation, drop
/// digits, trim. Interior whitespace is deliberately left alone.
///
/// Total and idempotent: never fails, and a second pass is a no-op.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let no_urls = URL_PATTERN.replace_all(&lowered, "");
    let no_mentions = MENTION_OR_HASH_PATTERN.replace_all(&no_urls, "");
    let no_punctuation = NON_WORD_PATTERN.replace_all(&no_mentions, "");
    let no_digits = DIGIT_PATTERN.replace_all(&no_punctuation, "");

    no_digits.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  Hello World  "), "hello world");
    }

    #[test]
    fn test_strips_urls() {
        let cleaned = normalize("check http://x.co now");
        assert!(!cleaned.contains("http"));
        assert!(!cleaned.contains("co"));
        assert_eq!(cleaned, "check  now");

        assert_eq!(normalize("see www.example.com please"), "see  please");
        assert_eq!(normalize("https://a.b/c?d=1 first"), "first");
    }

    #[test]
    fn test_strips_mentions_but_keeps_hashtag_text() {
        assert_eq!(normalize("@alice hi"), "hi");
        // The # marker goes, the tag text stays
        assert_eq!(normalize("loving #rustlang"), "loving rustlang");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("wow!!! really?!"), "wow really");
    }

    #[test]
    fn test_strips_all_digits() {
        let cleaned = normalize("room 101 at 9am, gate B42");
        assert!(!cleaned.chars().any(|c| c.is_ascii_digit()));
        assert_eq!(cleaned, "room  at am gate b");
    }

    #[test]
    fn test_interior_whitespace_survives() {
        // No whitespace collapsing: removals can leave double spaces
        assert_eq!(normalize("a  b"), "a  b");
        assert_eq!(normalize("a @b c"), "a  c");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "Check out https://t.co/abc123 @friend #Winning!!! 42",
            "  already clean text  ",
            "",
            "@a @b ## 99 bottles!!!",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_total_on_empty_and_symbols() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! 123 @only #"), "");
    }
}
