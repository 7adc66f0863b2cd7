//! Match scoring — pluggable, trait-based scorer that measures a CV against
//! a job description.
//!
//! Default: `KeywordMatchScorer` over the rule annotator (pure-Rust, fast,
//! deterministic, fully testable). `AppState` holds an `Arc<dyn MatchScorer>`,
//! so alternative backends drop in without touching handler code.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::annotate::Annotator;
use crate::errors::AppError;
use crate::matching::keywords::{extract_keywords, KeywordSets};

/// Full match report returned to callers. `score` is the percentage of the
/// job description's important keywords covered by the CV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub score: f64,
    pub matched_important_keywords: BTreeSet<String>,
    pub matched_less_important_keywords: BTreeSet<String>,
    pub missed_important_keywords: BTreeSet<String>,
    pub missed_less_important_keywords: BTreeSet<String>,
}

/// The match scorer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(&self, cv_text: &str, job_description: &str) -> Result<MatchReport, AppError>;
}

/// Keyword-overlap scorer: annotate both texts, extract keyword tiers,
/// intersect.
pub struct KeywordMatchScorer {
    annotator: Arc<dyn Annotator>,
}

impl KeywordMatchScorer {
    pub fn new(annotator: Arc<dyn Annotator>) -> Self {
        Self { annotator }
    }
}

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(&self, cv_text: &str, job_description: &str) -> Result<MatchReport, AppError> {
        let cv = extract_keywords(&self.annotator.annotate(cv_text)?);
        let jd = extract_keywords(&self.annotator.annotate(job_description)?);
        Ok(compute_match(&cv, &jd))
    }
}

/// Core set arithmetic. The denominator is the JD's important-keyword count
/// only: the score measures job-requirement coverage, so extra CV keywords
/// neither inflate nor deflate it.
pub fn compute_match(cv: &KeywordSets, jd: &KeywordSets) -> MatchReport {
    let matched_important: BTreeSet<String> = cv
        .important
        .intersection(&jd.important)
        .cloned()
        .collect();

    let score = if jd.important.is_empty() {
        0.0
    } else {
        round2(matched_important.len() as f64 / jd.important.len() as f64 * 100.0)
    };

    let matched_less_important = cv
        .less_important
        .intersection(&jd.less_important)
        .cloned()
        .collect();
    let missed_important = &jd.important - &cv.important;
    let missed_less_important = &jd.less_important - &cv.less_important;

    MatchReport {
        score,
        matched_important_keywords: matched_important,
        matched_less_important_keywords: matched_less_important,
        missed_important_keywords: missed_important,
        missed_less_important_keywords: missed_less_important,
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{AnnotateError, RuleAnnotator};
    use crate::annotate::types::AnnotatedText;

    fn sets(important: &[&str], less_important: &[&str]) -> KeywordSets {
        KeywordSets {
            important: important.iter().map(|s| s.to_string()).collect(),
            less_important: less_important.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn default_scorer() -> KeywordMatchScorer {
        KeywordMatchScorer::new(Arc::new(RuleAnnotator::default()))
    }

    #[test]
    fn test_score_is_jd_coverage() {
        let cv = sets(&["rust", "tokio"], &[]);
        let jd = sets(&["rust", "tokio", "kafka", "redis"], &[]);
        let report = compute_match(&cv, &jd);
        assert_eq!(report.score, 50.0);
        assert_eq!(report.matched_important_keywords.len(), 2);
        assert_eq!(report.missed_important_keywords.len(), 2);
    }

    #[test]
    fn test_extra_cv_keywords_do_not_change_score() {
        let jd = sets(&["rust"], &[]);
        let lean = compute_match(&sets(&["rust"], &[]), &jd);
        let padded = compute_match(&sets(&["rust", "go", "java", "scala"], &[]), &jd);
        assert_eq!(lean.score, padded.score);
    }

    #[test]
    fn test_empty_jd_scores_zero() {
        let report = compute_match(&sets(&["rust"], &["fast code"]), &sets(&[], &[]));
        assert_eq!(report.score, 0.0);
        assert!(report.matched_important_keywords.is_empty());
        assert!(report.missed_important_keywords.is_empty());
    }

    #[test]
    fn test_score_rounds_to_two_decimals() {
        let cv = sets(&["a"], &[]);
        let jd = sets(&["a", "b", "c"], &[]);
        // 1/3 of 100 rounds to 33.33
        assert_eq!(compute_match(&cv, &jd).score, 33.33);
    }

    #[test]
    fn test_missed_is_set_difference_of_matched() {
        let cv = sets(&["rust", "grpc"], &[]);
        let jd = sets(&["rust", "kafka"], &[]);
        let report = compute_match(&cv, &jd);

        let union: BTreeSet<_> = report
            .matched_important_keywords
            .union(&report.missed_important_keywords)
            .cloned()
            .collect();
        assert_eq!(union, jd.important);
        assert!(report
            .matched_important_keywords
            .is_disjoint(&report.missed_important_keywords));
    }

    #[test]
    fn test_less_important_overlap_and_misses() {
        let cv = sets(&[], &["python developer", "side projects"]);
        let jd = sets(&[], &["python developer", "agile teams"]);
        let report = compute_match(&cv, &jd);
        assert!(report
            .matched_less_important_keywords
            .contains("python developer"));
        assert!(report.missed_less_important_keywords.contains("agile teams"));
        assert!(!report
            .missed_less_important_keywords
            .contains("python developer"));
    }

    #[tokio::test]
    async fn test_identical_text_scores_100() {
        let text = "Senior Rust engineer with Kubernetes and Kafka experience.";
        let report = default_scorer().score(text, text).await.unwrap();
        assert_eq!(report.score, 100.0);
        assert!(report.missed_important_keywords.is_empty());
        assert!(report.missed_less_important_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_both_empty_yields_all_empty_report() {
        let report = default_scorer().score("", "").await.unwrap();
        assert_eq!(report.score, 0.0);
        assert!(report.matched_important_keywords.is_empty());
        assert!(report.matched_less_important_keywords.is_empty());
        assert!(report.missed_important_keywords.is_empty());
        assert!(report.missed_less_important_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_cv_versus_jd_scenario() {
        let report = default_scorer()
            .score(
                "John Smith is a Python developer.",
                "We need a Python developer.",
            )
            .await
            .unwrap();

        assert_eq!(report.score, 100.0);
        assert!(report.matched_important_keywords.contains("python"));
        assert!(report.matched_important_keywords.contains("developer"));
        assert!(report
            .matched_less_important_keywords
            .contains("python developer"));
        // The CV-only name never shows up as a JD miss.
        assert!(!report.missed_important_keywords.contains("john smith"));
    }

    #[tokio::test]
    async fn test_scoring_is_deterministic() {
        let scorer = default_scorer();
        let cv = "Built Rust services on AWS. Led Terraform rollouts.";
        let jd = "We want Rust and Terraform experience on AWS.";
        let first = scorer.score(cv, jd).await.unwrap();
        let second = scorer.score(cv, jd).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_annotator_failure_propagates() {
        struct FailingAnnotator;
        impl Annotator for FailingAnnotator {
            fn annotate(&self, _text: &str) -> Result<AnnotatedText, AnnotateError> {
                Err(AnnotateError::Failed("model unavailable".to_string()))
            }
        }

        let scorer = KeywordMatchScorer::new(Arc::new(FailingAnnotator));
        let err = scorer.score("cv", "jd").await.unwrap_err();
        assert!(matches!(err, AppError::Annotation(_)));
    }
}
