//! Text normalization for keyword matching

use std::collections::HashSet;

/// Lowercase and fold French diacritics to ASCII.
///
/// Combining marks (U+0300..=U+036F) are dropped, so decomposed input such as
/// `e` followed by U+0301 folds the same way as a precomposed `é`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        match ch {
            'à' | 'â' | 'ä' | 'á' => out.push('a'),
            'ç' => out.push('c'),
            'é' | 'è' | 'ê' | 'ë' => out.push('e'),
            'î' | 'ï' | 'í' => out.push('i'),
            'ô' | 'ö' | 'ó' => out.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => out.push('u'),
            'ÿ' => out.push('y'),
            'œ' => out.push_str("oe"),
            'æ' => out.push_str("ae"),
            '\u{0300}'..='\u{036F}' => {}
            other => out.push(other),
        }
    }
    out
}

/// Normalized words of a text; anything not alphanumeric separates words
pub fn tokenize(text: &str) -> HashSet<String> {
    normalize(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Risque & Tolérance"), "risque & tolerance");
        assert_eq!(normalize("CŒUR"), "coeur");
        assert_eq!(normalize("Volatilité à court terme"), "volatilite a court terme");
    }

    #[test]
    fn test_decomposed_accents() {
        assert_eq!(normalize("tole\u{301}rance"), "tolerance");
        assert_eq!(normalize("Volatilite\u{301} a\u{300} court terme"), "volatilite a court terme");
        assert!(tokenize("Quelle tole\u{301}rance ?").contains("tolerance"));
    }

    #[test]
    fn test_tokenize_splits_apostrophes() {
        let tokens = tokenize("Quel est l'horizon d'un ETF ?");
        assert!(tokens.contains("horizon"));
        assert!(tokens.contains("etf"));
        assert!(tokens.contains("l"));
        assert!(!tokens.contains("?"));
        assert!(!tokens.contains(""));
    }
}
