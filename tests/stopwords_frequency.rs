//! Stopword repository, filter, and frequency ranking tests.

use std::collections::HashSet;
use std::thread;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use polyglot_wordfreq::engine::{count, filter_tokens};
use polyglot_wordfreq::{
    filter, normalize, rank, tokenize, FrequencyEntry, LanguageCode, StopwordRepository,
};

// ==================== Helpers ====================

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ==================== Stopword Repository Tests ====================

#[test]
fn test_repository_non_empty_except_bodo() {
    let repo = StopwordRepository::global();
    for lang in LanguageCode::ALL {
        if lang == LanguageCode::Bodo {
            continue;
        }
        assert!(!repo.is_empty(lang), "{} should have stopwords", lang);
    }
    assert!(repo.get(LanguageCode::Bodo).is_some());
}

#[test]
fn test_repository_known_members() {
    let repo = StopwordRepository::global();
    assert!(repo.contains(LanguageCode::English, "the"));
    assert!(repo.contains(LanguageCode::Hindi, "और"));
    assert!(repo.contains(LanguageCode::Assamese, "আৰু"));
    assert!(repo.contains(LanguageCode::Manipuri, "ꯑꯁꯤ"));
    assert!(!repo.contains(LanguageCode::English, "science"));
}

#[test]
fn test_repository_lookup_is_case_sensitive() {
    let repo = StopwordRepository::global();
    assert!(repo.contains(LanguageCode::English, "the"));
    assert!(!repo.contains(LanguageCode::English, "The"));
}

#[test]
fn test_repository_words_are_nfc() {
    // YYA (U+09DF) is a composition exclusion and is stored decomposed.
    let repo = StopwordRepository::global();
    assert!(repo.contains(LanguageCode::Assamese, &normalize("\u{09B9}\u{09DF}")));
    assert!(repo
        .sorted_words(LanguageCode::Assamese)
        .iter()
        .all(|w| !w.contains('\u{09DF}')));
}

#[test]
fn test_repository_with_extra() {
    let repo = StopwordRepository::builtin()
        .with_extra(LanguageCode::Bodo, ["आरो", "  ", "बे"])
        .with_extra(LanguageCode::English, ["data"]);
    assert_eq!(repo.len(LanguageCode::Bodo), 2);
    assert!(repo.contains(LanguageCode::Bodo, "आरो"));
    assert!(repo.contains(LanguageCode::English, "data"));
    assert!(repo.contains(LanguageCode::English, "the"));
    // The shared repository is unaffected.
    assert!(!StopwordRepository::global().contains(LanguageCode::English, "data"));
}

#[test]
fn test_repository_sorted_words() {
    let repo = StopwordRepository::empty().with_extra(LanguageCode::English, ["b", "c", "a"]);
    assert_eq!(repo.sorted_words(LanguageCode::English), vec!["a", "b", "c"]);
    assert!(repo.sorted_words(LanguageCode::Hindi).is_empty());
}

#[test]
fn test_global_repository_concurrent_first_access() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| StopwordRepository::global() as *const _ as usize))
        .collect();
    let addrs: HashSet<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(addrs.len(), 1, "all threads must see one repository");
}

// ==================== Filter Tests ====================

#[test]
fn test_filter_english_stopwords() {
    let text = "This is a test of the stopword removal function";
    let tokens = tokenize(&normalize(text), LanguageCode::English);
    let filtered = filter(&tokens, LanguageCode::English);

    for stop in ["is", "a", "of", "the"] {
        assert!(!filtered.iter().any(|t| t == stop), "{} not removed", stop);
    }
    for kept in ["test", "stopword", "removal", "function"] {
        assert!(filtered.iter().any(|t| t == kept), "{} missing", kept);
    }
}

#[test]
fn test_filter_empty_for_every_language() {
    for lang in LanguageCode::ALL {
        assert!(filter(&[], lang).is_empty());
    }
}

#[test]
fn test_filter_length_rule_without_stopwords() {
    // Bodo has no stopwords; only the length rule applies.
    let tokens = strings(&["क", "कि", "ab", "x", "और"]);
    let filtered = filter(&tokens, LanguageCode::Bodo);
    assert_eq!(filtered, strings(&["कि", "ab", "और"]));
}

#[test]
fn test_filter_preserves_order_and_duplicates() {
    let tokens = strings(&["data", "the", "science", "data", "a", "data"]);
    let filtered = filter(&tokens, LanguageCode::English);
    assert_eq!(filtered, strings(&["data", "science", "data", "data"]));
}

#[test]
fn test_filter_hindi_stopwords() {
    let tokens = tokenize(
        &normalize("डेटा विज्ञान भविष्य है और यह हमें बेहतर समझने में मदद करता है।"),
        LanguageCode::Hindi,
    );
    let filtered = filter(&tokens, LanguageCode::Hindi);
    for stop in ["है", "और", "यह", "में", "करता"] {
        assert!(!filtered.iter().any(|t| t == stop), "{} not removed", stop);
    }
    assert_eq!(filtered[..3], strings(&["डेटा", "विज्ञान", "भविष्य"])[..]);
}

#[test]
fn test_filter_tokens_custom_threshold() {
    let tokens = strings(&["ab", "abc", "abcd"]);
    assert_eq!(filter_tokens(&tokens, None, 3), strings(&["abc", "abcd"]));
    let stop: HashSet<String> = strings(&["abc"]).into_iter().collect();
    assert_eq!(filter_tokens(&tokens, Some(&stop), 1), strings(&["ab", "abcd"]));
}

#[test]
fn test_filter_counts_characters_not_bytes() {
    // Two Devanagari code points are six UTF-8 bytes.
    let tokens = strings(&["कि", "ड"]);
    assert_eq!(filter_tokens(&tokens, None, 2), strings(&["कि"]));
}

// ==================== Frequency Tests ====================

#[test]
fn test_rank_basic() {
    let tokens = strings(&["apple", "banana", "apple", "cherry", "banana", "apple"]);
    let ranked = rank(&tokens, 3);
    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0], ("apple", 3));
    assert_eq!(ranked[1], ("banana", 2));
    assert_eq!(ranked[2], ("cherry", 1));
}

#[test]
fn test_rank_empty() {
    assert!(rank(&[], 5).is_empty());
    assert!(rank(&[], 0).is_empty());
}

#[test]
fn test_rank_ties_keep_first_occurrence_order() {
    let tokens = strings(&["zeta", "alpha", "mid", "alpha", "zeta", "mid", "omega"]);
    let ranked = rank(&tokens, 10);
    assert_eq!(
        ranked,
        vec![
            FrequencyEntry::new("zeta", 2),
            FrequencyEntry::new("alpha", 2),
            FrequencyEntry::new("mid", 2),
            FrequencyEntry::new("omega", 1),
        ]
    );
}

#[test]
fn test_rank_truncates_to_top_n() {
    let tokens = strings(&["a1", "b2", "c3", "a1"]);
    let ranked = rank(&tokens, 2);
    assert_eq!(ranked, vec![FrequencyEntry::new("a1", 2), FrequencyEntry::new("b2", 1)]);
    assert!(rank(&tokens, 0).is_empty());
}

#[test]
fn test_rank_fewer_distinct_than_top_n() {
    let tokens = strings(&["one", "two", "one"]);
    assert_eq!(rank(&tokens, 50).len(), 2);
}

#[test]
fn test_count_first_occurrence_order() {
    let tokens = strings(&["b", "a", "b", "c"]);
    let counts = count(&tokens);
    assert_eq!(
        counts,
        vec![
            FrequencyEntry::new("b", 2),
            FrequencyEntry::new("a", 1),
            FrequencyEntry::new("c", 1),
        ]
    );
}

#[test]
fn test_rank_counts_sum_to_token_count() {
    let vocabulary = ["डेटा", "data", "বিজ্ঞান", "ꯑꯁꯤ", "science", "x"];
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let len = rng.gen_range(0..200);
        let tokens: Vec<String> = (0..len)
            .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())].to_string())
            .collect();
        let distinct = tokens.iter().collect::<HashSet<_>>().len();
        let ranked = rank(&tokens, distinct);
        let total: usize = ranked.iter().map(|e| e.count).sum();
        assert_eq!(total, tokens.len());
        assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
