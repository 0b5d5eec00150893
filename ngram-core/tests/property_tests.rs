use ngram_core::model::NGramEngine;
use ngram_core::{EngineConfig, MatchMode};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
	fn arb_document()(
		words in proptest::collection::vec(
			prop::sample::select(vec!["a", "good", "Good", "puzzle", "puzzle,", "is", "fun!", "puzzles"]),
			0..40
		)
	) -> String {
		words.join(" ")
	}
}

fn arb_match_mode() -> impl Strategy<Value = MatchMode> {
	prop_oneof![Just(MatchMode::Exact), Just(MatchMode::Substring)]
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(300))]

	#[test]
	fn test_frequency_sum_equals_window_count(
		text in arb_document(),
		max_length in 1usize..6,
		match_mode in arb_match_mode()
	) {
		let engine = NGramEngine::new(EngineConfig { match_mode, ..Default::default() });
		let analysis = engine.process_document(&text, max_length);
		let tokens = analysis.token_count();

		for length in 1..=max_length {
			let windows = (tokens + 1).saturating_sub(length);
			let segment = analysis.segment(length).unwrap();
			prop_assert_eq!(segment.total_frequency(), windows);
			prop_assert!(segment.len() <= windows);
		}
	}

	#[test]
	fn test_substring_mode_never_has_more_entries(
		text in arb_document(),
		max_length in 1usize..4
	) {
		let exact = NGramEngine::default().process_document(&text, max_length);
		let legacy = NGramEngine::new(EngineConfig { match_mode: MatchMode::Substring, ..Default::default() })
			.process_document(&text, max_length);

		for length in 1..=max_length {
			prop_assert!(legacy.segment(length).unwrap().len() <= exact.segment(length).unwrap().len());
		}
	}

	#[test]
	fn test_sorted_keys_are_ordered(text in arb_document(), max_length in 1usize..5) {
		let grouped = NGramEngine::default().process_document(&text, max_length).grouped(true);
		for ngrams in grouped.values() {
			let keys: Vec<&String> = ngrams.keys().collect();
			prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
		}
	}

	#[test]
	fn test_processing_is_idempotent(text in arb_document(), max_length in 1usize..5) {
		let engine = NGramEngine::default();
		let first = engine.process_document(&text, max_length).grouped(false);
		let second = engine.process_document(&text, max_length).grouped(false);
		prop_assert_eq!(first, second);
	}

	#[test]
	fn test_entries_are_lowercase_and_clean(text in arb_document()) {
		let analysis = NGramEngine::default().process_document(&text, 2);
		for length in 1..=2 {
			for ngram in analysis.segment(length).unwrap().iter() {
				prop_assert!(ngram.word().chars().all(|c| c.is_ascii_lowercase() || c == ' '));
				prop_assert!(ngram.frequency() >= 1);
			}
		}
	}
}
