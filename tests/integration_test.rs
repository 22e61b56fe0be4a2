// Integration tests for creditmem
use async_trait::async_trait;
use creditmem_core::{
    ApplicationRecord, Error, FeatureTransformer, QueryVector, Result, RetrievalSummary,
    RetrievedCase, SimilarityEngine, VectorIndex,
};
use creditmem_index::{IndexConfig, QdrantIndex};
use creditmem_report::ReportGenerator;
use creditmem_transform::{FieldEncoder, FittedTransformer, TransformSchema};
use serde_json::{json, Value};
use std::collections::HashMap;

/// In-memory stand-in for the remote index: cosine similarity over stored
/// vectors, ranked descending, like the real service.
struct InMemoryIndex {
    points: Vec<(Vec<f32>, Value)>,
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl VectorIndex for InMemoryIndex {
    async fn search(
        &self,
        _collection: &str,
        vector: &QueryVector,
        limit: usize,
    ) -> Result<Vec<RetrievedCase>> {
        let mut scored: Vec<RetrievedCase> = self
            .points
            .iter()
            .map(|(stored, payload)| {
                RetrievedCase::new(cosine(vector.as_slice(), stored), payload.clone())
            })
            .collect();
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(limit);
        Ok(scored)
    }
}

fn fitted_schema() -> TransformSchema {
    let mut fields = HashMap::new();
    fields.insert(
        "monthly_income".to_string(),
        FieldEncoder::Numeric {
            mean: 5000.0,
            std_dev: 1500.0,
        },
    );
    fields.insert(
        "loan_amount_requested".to_string(),
        FieldEncoder::Numeric {
            mean: 20000.0,
            std_dev: 8000.0,
        },
    );
    fields.insert(
        "loan_tenure_months".to_string(),
        FieldEncoder::Numeric {
            mean: 36.0,
            std_dev: 12.0,
        },
    );
    fields.insert(
        "cibil_score".to_string(),
        FieldEncoder::Numeric {
            mean: 650.0,
            std_dev: 100.0,
        },
    );
    fields.insert(
        "purpose_of_loan".to_string(),
        FieldEncoder::Categorical {
            categories: vec![
                "Business".to_string(),
                "Education".to_string(),
                "Home Renovation".to_string(),
                "Medical".to_string(),
            ],
        },
    );
    TransformSchema::new(fields)
}

fn application() -> ApplicationRecord {
    ApplicationRecord {
        monthly_income: 5400.0,
        loan_amount_requested: 18000.0,
        loan_tenure_months: 36,
        cibil_score: 720,
        purpose_of_loan: "Education".to_string(),
    }
}

/// Populate the fake index by vectorizing historical records through the
/// same transformer the engine will use, like the real ingestion did.
fn seeded_index(transformer: &FittedTransformer) -> InMemoryIndex {
    let history = vec![
        (5300.0, 17500.0, 36, 715, "Education", "Repaid", 0),
        (5600.0, 19000.0, 36, 730, "Education", "Repaid", 0),
        (5100.0, 18500.0, 24, 705, "Education", "Repaid", 0),
        (5500.0, 18000.0, 48, 690, "Education", "Defaulted", 1),
        (5200.0, 17000.0, 36, 710, "Education", "In Progress", 0),
        (9500.0, 60000.0, 120, 810, "Business", "Repaid", 0),
    ];

    let points = history
        .into_iter()
        .map(|(income, amount, tenure, score, purpose, outcome, fraud)| {
            let record = ApplicationRecord {
                monthly_income: income,
                loan_amount_requested: amount,
                loan_tenure_months: tenure,
                cibil_score: score,
                purpose_of_loan: purpose.to_string(),
            };
            let vector = transformer.transform(&record).unwrap().into_inner();
            let payload = json!({
                "monthly_income": income,
                "loan_outcome": outcome,
                "fraud_flag": fraud,
            });
            (vector, payload)
        })
        .collect();

    InMemoryIndex { points }
}

#[tokio::test]
async fn test_end_to_end_retrieval_and_aggregation() {
    let transformer = FittedTransformer::new(fitted_schema()).unwrap();
    let index = seeded_index(&transformer);
    let engine = SimilarityEngine::new(transformer, index, "credit_decision_memory");

    let summary = engine.find_similar(&application(), 5).await.unwrap();

    assert_eq!(summary.total_cases, 5);
    let bucket_sum = summary.repaid_pct + summary.defaulted_pct + summary.in_progress_pct;
    assert!((bucket_sum - 100.0).abs() < 1e-9);
    assert_eq!(summary.fraud_cases, 1.0);
    assert!(summary.fraud_cases <= summary.total_cases as f64);

    // Ranking comes from the index; the first case should be the most
    // similar education loan, not the large business loan.
    assert_eq!(
        summary.cases[0].payload.get("loan_outcome").unwrap(),
        &json!("Repaid")
    );
    let min = summary
        .cases
        .iter()
        .map(|c| f64::from(c.score))
        .fold(f64::INFINITY, f64::min);
    let max = summary
        .cases
        .iter()
        .map(|c| f64::from(c.score))
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(summary.avg_similarity >= min && summary.avg_similarity <= max);
}

#[tokio::test]
async fn test_identical_requests_are_idempotent() {
    let transformer = FittedTransformer::new(fitted_schema()).unwrap();
    let index = seeded_index(&transformer);
    let engine = SimilarityEngine::new(transformer, index, "credit_decision_memory");

    let first = engine.find_similar(&application(), 5).await.unwrap();
    let second = engine.find_similar(&application(), 5).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_index_yields_empty_summary_and_low_confidence_report() {
    let transformer = FittedTransformer::new(fitted_schema()).unwrap();
    let index = InMemoryIndex { points: Vec::new() };
    let engine = SimilarityEngine::new(transformer, index, "credit_decision_memory");

    let summary = engine.find_similar(&application(), 10).await.unwrap();
    assert_eq!(summary, RetrievalSummary::empty());

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.md");
    ReportGenerator::new()
        .generate(&out, &application(), &summary, None)
        .unwrap();

    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.contains("no historical loan cases"));
}

#[tokio::test]
async fn test_report_rendering_from_live_summary() {
    let transformer = FittedTransformer::new(fitted_schema()).unwrap();
    let index = seeded_index(&transformer);
    let engine = SimilarityEngine::new(transformer, index, "credit_decision_memory");

    let record = application();
    let summary = engine.find_similar(&record, 5).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("decision_report.md");
    let chart = dir.path().join("missing_chart.png");
    ReportGenerator::new()
        .generate(&out, &record, &summary, Some(&chart))
        .unwrap();

    let doc = std::fs::read_to_string(&out).unwrap();
    assert!(doc.contains("retrieved **5** historical loan cases"));
    assert!(doc.contains("| Repaid |"));
    // Chart file does not exist, so no chart section.
    assert!(!doc.contains("Outcome Distribution Visualization"));
}

#[tokio::test]
async fn test_artifact_loaded_from_disk_drives_the_engine() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = dir.path().join("vector_preprocessor.json");
    std::fs::write(&artifact, serde_json::to_string(&fitted_schema()).unwrap()).unwrap();

    let transformer = FittedTransformer::load(&artifact).unwrap();
    let index = seeded_index(&transformer);
    let engine = SimilarityEngine::new(transformer, index, "credit_decision_memory");

    let summary = engine.find_similar(&application(), 3).await.unwrap();
    assert_eq!(summary.total_cases, 3);
}

#[tokio::test]
async fn test_unreachable_remote_index_surfaces_service_error() {
    let transformer = FittedTransformer::new(fitted_schema()).unwrap();
    let config = IndexConfig::new("http://192.0.2.1:6333")
        .with_timeout(std::time::Duration::from_millis(200));
    let index = QdrantIndex::new(config).unwrap();
    let engine = SimilarityEngine::new(transformer, index, "credit_decision_memory");

    let err = engine.find_similar(&application(), 10).await.unwrap_err();
    assert!(matches!(err, Error::RetrievalService(_)));
}
