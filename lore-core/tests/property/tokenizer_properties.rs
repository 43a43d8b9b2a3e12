use lore_core::clamp_unit;
use lore_core::tokenizer::{jaccard, token_set, tokenize};
use proptest::prelude::*;

proptest! {
    #[test]
    fn clamp_unit_always_lands_in_range(x in proptest::num::f64::ANY) {
        let clamped = clamp_unit(x);
        prop_assert!((0.0..=1.0).contains(&clamped));
    }

    #[test]
    fn tokens_are_lowercase_and_nonempty(text in ".{0,80}") {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    #[test]
    fn jaccard_is_symmetric_and_bounded(a in "[a-z ]{0,40}", b in "[a-z ]{0,40}") {
        let (sa, sb) = (token_set(&a), token_set(&b));
        let ab = jaccard(&sa, &sb);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, jaccard(&sb, &sa));
        if !sa.is_empty() {
            prop_assert_eq!(jaccard(&sa, &sa), 1.0);
        }
    }

    #[test]
    fn non_ascii_words_tokenize_whole(words in prop::collection::vec("[a-zA-Zà-öø-ÿÀ-ÖØ-Þ]{1,10}", 1..6)) {
        let text = words.join(" ");
        let expected: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        prop_assert_eq!(tokenize(&text), expected);
    }
}
