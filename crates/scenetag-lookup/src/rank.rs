use std::cmp::Ordering;

use scenetag_core::LookupCandidate;
use strsim::normalized_levenshtein;

/// Similarity of a candidate title to the query, in `0.0..=1.0`.
#[must_use]
pub fn title_similarity(query: &str, title: &str) -> f64 {
    let normalize = |s: &str| {
        s.chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    };
    normalized_levenshtein(&normalize(query), &normalize(title))
}

/// Orders candidates by similarity to `query`, best first. Ties go to the
/// more recent date, and dated candidates come before undated ones.
#[must_use]
pub fn rank_candidates(query: &str, candidates: Vec<LookupCandidate>) -> Vec<(LookupCandidate, f64)> {
    let mut scored: Vec<(LookupCandidate, f64)> = candidates
        .into_iter()
        .map(|c| {
            let score = title_similarity(query, &c.title);
            (c, score)
        })
        .collect();

    scored.sort_by(|(a, sa), (b, sb)| {
        sb.total_cmp(sa).then_with(|| match (&a.date, &b.date) {
            (Some(da), Some(db)) => db.cmp(da),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
    });
    scored
}

/// The best candidate scoring at least `min_score`.
#[must_use]
pub fn best_match(
    query: &str,
    candidates: Vec<LookupCandidate>,
    min_score: f64,
) -> Option<LookupCandidate> {
    rank_candidates(query, candidates)
        .into_iter()
        .next()
        .filter(|(_, score)| *score >= min_score)
        .map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, date: Option<&str>) -> LookupCandidate {
        LookupCandidate::new(title, date.map(str::to_string))
    }

    #[test]
    fn exact_titles_score_one() {
        assert!((title_similarity("Black Dog", "black  dog") - 1.0).abs() < f64::EPSILON);
        assert!((title_similarity("Ocean's Eleven", "Oceans Eleven") - 1.0).abs() < f64::EPSILON);
        assert!(title_similarity("Black Dog", "Dog Day Afternoon") < 0.5);
    }

    #[test]
    fn ranking_prefers_similarity_then_recency() {
        let ranked = rank_candidates(
            "Black Dog",
            vec![
                candidate("Black Dogs Barking", Some("2010-01-01")),
                candidate("Black Dog", None),
                candidate("Black Dog", Some("1998-03-20")),
                candidate("Black Dog", Some("2024-06-20")),
            ],
        );
        let order: Vec<_> = ranked
            .iter()
            .map(|(c, _)| (c.title.as_str(), c.year()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Black Dog", Some(2024)),
                ("Black Dog", Some(1998)),
                ("Black Dog", None),
                ("Black Dogs Barking", Some(2010)),
            ]
        );
    }

    #[test]
    fn best_match_respects_threshold() {
        let candidates = vec![candidate("Completely Different", Some("2001-01-01"))];
        assert_eq!(best_match("Black Dog", candidates, 0.6), None);

        let candidates = vec![
            candidate("Avatar", Some("2009-12-15")),
            candidate("Avatar: The Way of Water", Some("2022-12-14")),
        ];
        let best = best_match("Avatar The Way of Water", candidates, 0.6).unwrap();
        assert_eq!(best.year(), Some(2022));
    }

    #[test]
    fn no_candidates() {
        assert!(rank_candidates("x", Vec::new()).is_empty());
        assert_eq!(best_match("x", Vec::new(), 0.0), None);
    }
}
