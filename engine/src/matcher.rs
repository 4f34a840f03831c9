//! Keyword-weighted fuzzy matching.
//!
//! Theme packages name their assets inconsistently (`Gruvbox-Dark-BL`,
//! `gruvbox_dark_hard`, `Gruvbox Material Dark`...), so a style is resolved by
//! scoring every candidate against a keyword list and keeping the best one.
//!
//! Per candidate and keyword, only the first rule that applies contributes:
//!
//! | Rule                                   | Points            |
//! |----------------------------------------|-------------------|
//! | candidate equals keyword               | 1000              |
//! | candidate starts with keyword          | 500               |
//! | candidate contains keyword             | 300               |
//! | candidate contains every keyword token | 200 per token     |
//! | otherwise                              | 50 per token hit  |
//!
//! Comparisons are case-insensitive. Candidates longer than
//! [`LENGTH_PENALTY_THRESHOLD`] lose [`LENGTH_PENALTY_PER_CHAR`] points per
//! extra byte, which favours short, specific names.

pub const EXACT_SCORE: i64 = 1000;
pub const PREFIX_SCORE: i64 = 500;
pub const CONTAINS_SCORE: i64 = 300;
pub const ALL_TOKENS_SCORE: i64 = 200;
pub const TOKEN_HIT_SCORE: i64 = 50;
pub const LENGTH_PENALTY_THRESHOLD: usize = 30;
pub const LENGTH_PENALTY_PER_CHAR: i64 = 2;

/// Split a keyword on space, hyphen, underscore and tab, dropping empty tokens.
pub fn split_tokens(keyword: &str) -> Vec<&str> {
    keyword
        .split([' ', '-', '_', '\t'])
        .filter(|t| !t.is_empty())
        .collect()
}

fn keyword_score(candidate: &str, keyword: &str) -> i64 {
    if candidate == keyword {
        return EXACT_SCORE;
    }
    if candidate.starts_with(keyword) {
        return PREFIX_SCORE;
    }
    if candidate.contains(keyword) {
        return CONTAINS_SCORE;
    }

    let tokens = split_tokens(keyword);
    if tokens.iter().all(|t| candidate.contains(t)) {
        ALL_TOKENS_SCORE * tokens.len() as i64
    } else {
        let hits = tokens.iter().filter(|t| candidate.contains(*t)).count();
        TOKEN_HIT_SCORE * hits as i64
    }
}

/// Total score of one candidate against all keywords, length penalty included.
pub fn score<S: AsRef<str>>(candidate: &str, keywords: &[S]) -> i64 {
    let candidate = candidate.to_lowercase();

    let mut total: i64 = keywords
        .iter()
        .map(|k| keyword_score(&candidate, &k.as_ref().to_lowercase()))
        .sum();

    if candidate.len() > LENGTH_PENALTY_THRESHOLD {
        total -= (candidate.len() - LENGTH_PENALTY_THRESHOLD) as i64 * LENGTH_PENALTY_PER_CHAR;
    }
    total
}

/// Best-scoring candidate and its score, or `None` if nothing scores above zero.
///
/// Ties keep the earliest candidate.
pub fn best_match_scored<S: AsRef<str>, K: AsRef<str>>(
    candidates: &[S],
    keywords: &[K],
) -> Option<(String, i64)> {
    let mut best: Option<(&str, i64)> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let candidate_score = score(candidate, keywords);
        let leader_score = best.map_or(0, |(_, s)| s);
        if candidate_score > leader_score {
            best = Some((candidate, candidate_score));
        }
    }

    best.map(|(name, s)| (name.to_string(), s))
}

/// Best-scoring candidate, or an empty string when no candidate scores above zero.
pub fn best_match<S: AsRef<str>, K: AsRef<str>>(candidates: &[S], keywords: &[K]) -> String {
    best_match_scored(candidates, keywords)
        .map(|(name, _)| name)
        .unwrap_or_default()
}
