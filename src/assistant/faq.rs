//! FAQ knowledge base
//!
//! A question matches an entry when every word of one of the entry's keyword
//! sets appears among the question's normalized words. Entries are tried in
//! declaration order; the first match wins. Unmatched questions get
//! [`FALLBACK_ANSWER`].

use std::collections::{BTreeSet, HashSet};

use super::normalize::tokenize;

/// Answer given when no entry matches
pub const FALLBACK_ANSWER: &str = "Pour l’instant, je réponds avec une base pédagogique fixe : horizon, rôle du cash, diversification, risque. Plus tard, ce composant pourra être relié à une API d’IA côté serveur pour un traitement plus fin de ta situation.";

/// Words that must all be present in a question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new(words: &[&str]) -> Self {
        Self(words.iter().flat_map(|w| tokenize(w)).collect())
    }

    pub fn matches(&self, tokens: &HashSet<String>) -> bool {
        !self.0.is_empty() && self.0.iter().all(|w| tokens.contains(w))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    /// Topic label, also offered as a clickable tag
    pub label: String,
    pub keywords: Vec<KeywordSet>,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(label: &str, keywords: &[&[&str]], answer: &str) -> Self {
        Self {
            label: label.to_string(),
            keywords: keywords.iter().map(|set| KeywordSet::new(set)).collect(),
            answer: answer.to_string(),
        }
    }

    fn matches(&self, tokens: &HashSet<String>) -> bool {
        self.keywords.iter().any(|set| set.matches(tokens))
    }
}

/// Reply to a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply<'a> {
    pub text: &'a str,
    /// Label of the matched entry; `None` for the fallback
    pub topic: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct FaqBase {
    entries: Vec<FaqEntry>,
    fallback: String,
}

impl FaqBase {
    pub fn new(entries: Vec<FaqEntry>, fallback: impl Into<String>) -> Self {
        Self {
            entries,
            fallback: fallback.into(),
        }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    /// Topic labels in declaration order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Entry for an exact topic label
    pub fn lookup(&self, label: &str) -> Option<&FaqEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn answer(&self, question: &str) -> Reply<'_> {
        let tokens = tokenize(question);
        match self.entries.iter().find(|e| e.matches(&tokens)) {
            Some(entry) => Reply {
                text: &entry.answer,
                topic: Some(&entry.label),
            },
            None => Reply {
                text: &self.fallback,
                topic: None,
            },
        }
    }
}

impl Default for FaqBase {
    fn default() -> Self {
        let entries = vec![
            FaqEntry::new(
                "Livret vs ETF long terme",
                &[&["livret"], &["livrets"], &["long", "terme"]],
                "Un livret protège le capital nominal et reste liquide, mais son rendement est limité, surtout après inflation. Un ETF actions diversifié accepte la volatilité pour viser une rémunération supérieure sur un horizon long (8–15 ans). La question centrale : de quel argent parle-t-on et pour quel horizon ?",
            ),
            FaqEntry::new(
                "Place de la crypto",
                &[&["crypto"], &["cryptos"], &["cryptomonnaie"], &["cryptomonnaies"], &["bitcoin"]],
                "Dans notre approche, la crypto est traitée comme une poche expérimentale, jamais au cœur d'un patrimoine. Taille limitée, argent dont on peut se passer, horizon long, et surtout aucune confusion entre volatilité spectaculaire et stratégie d'investissement.",
            ),
            FaqEntry::new(
                "Horizon de placement",
                &[&["horizon"], &["duree"], &["combien", "temps"]],
                "Plus l'horizon est long, plus il est raisonnable d'accepter la volatilité à court terme. En dessous de 3–5 ans, il est délicat de s'exposer fortement aux actions. Au-delà de 8–10 ans, un portefeuille diversifié peut absorber plus de variations.",
            ),
            FaqEntry::new(
                "ETF monde",
                &[&["etf"], &["etfs"], &["msci", "world"], &["tracker"]],
                "Un ETF monde permet de s'exposer à plusieurs centaines d'entreprises internationales via une seule ligne. C'est un outil simple pour travailler la diversification géographique et sectorielle, sans choisir des titres individuellement.",
            ),
            FaqEntry::new(
                "Risque & tolérance",
                &[&["risque"], &["risques"], &["tolerance"], &["volatilite"]],
                "Il y a le risque \"sur le papier\" (volatilité des prix) et le risque réel de vendre au mauvais moment car on n'avait pas l'horizon ou la tolérance. Un bon point de départ : ne pas exposer en actifs volatils l'argent dont on a besoin à court terme.",
            ),
        ];
        Self::new(entries, FALLBACK_ANSWER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_labels() {
        let faq = FaqBase::default();
        let labels: Vec<_> = faq.labels().collect();
        assert_eq!(
            labels,
            [
                "Livret vs ETF long terme",
                "Place de la crypto",
                "Horizon de placement",
                "ETF monde",
                "Risque & tolérance",
            ]
        );
    }

    #[test]
    fn test_keyword_match() {
        let faq = FaqBase::default();
        assert_eq!(faq.answer("Que penser du Bitcoin ?").topic, Some("Place de la crypto"));
        assert_eq!(faq.answer("Un ETF, c'est quoi ?").topic, Some("ETF monde"));
        assert_eq!(faq.answer("Quelle TOLÉRANCE au risque ?").topic, Some("Risque & tolérance"));
        assert_eq!(faq.answer("placer sur le long terme").topic, Some("Livret vs ETF long terme"));
    }

    #[test]
    fn test_decomposed_question_matches() {
        let faq = FaqBase::default();
        assert_eq!(faq.answer("Ma tole\u{301}rance ?").topic, Some("Risque & tolérance"));
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let faq = FaqBase::default();
        assert_eq!(
            faq.answer("livret ou etf ?").topic,
            Some("Livret vs ETF long terme")
        );
    }

    #[test]
    fn test_whole_words_only() {
        let faq = FaqBase::default();
        // "placement" must not select the crypto entry through "place"
        assert_eq!(faq.answer("Horizon de placement ?").topic, Some("Horizon de placement"));
        assert_eq!(faq.answer("terme").topic, None);
    }

    #[test]
    fn test_fallback() {
        let faq = FaqBase::default();
        let reply = faq.answer("Bonjour");
        assert_eq!(reply.topic, None);
        assert_eq!(reply.text, FALLBACK_ANSWER);
        assert_eq!(faq.answer("   ").text, FALLBACK_ANSWER);
    }

    #[test]
    fn test_lookup() {
        let faq = FaqBase::default();
        let entry = faq.lookup("ETF monde").unwrap();
        assert!(entry.answer.starts_with("Un ETF monde"));
        assert!(faq.lookup("etf monde").is_none());
    }

    #[test]
    fn test_empty_keyword_set_never_matches() {
        let faq = FaqBase::new(vec![FaqEntry::new("vide", &[&["?"]], "x")], "fallback");
        assert_eq!(faq.answer("?").text, "fallback");
    }
}
