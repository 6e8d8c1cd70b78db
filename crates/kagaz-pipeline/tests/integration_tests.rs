//! End-to-end batch scenarios over tempdirs with mock capabilities

use kagaz_document::{ExtractionConfig, MockDocxEngine, MockPdfEngine, TextExtractor};
use kagaz_domain::{CompletionError, IdentityRecord};
use kagaz_llm::MockModel;
use kagaz_ocr::MockOcr;
use kagaz_pipeline::{RecordPipeline, RecordPipelineConfig, TextPipeline};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn text_pipeline() -> TextPipeline<MockPdfEngine, MockDocxEngine, MockOcr> {
    TextPipeline::new(TextExtractor::new(
        MockPdfEngine::new(),
        MockDocxEngine::new(),
        MockOcr::echo(),
        ExtractionConfig::default(),
    ))
}

fn record_pipeline(model: MockModel, keys: usize) -> RecordPipeline<MockModel> {
    let credentials = (1..=keys).map(|i| format!("key-{i}")).collect();
    RecordPipeline::new(model, credentials, RecordPipelineConfig::no_throttle()).unwrap()
}

fn dirs() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

// ─── Text pipeline ───

#[test]
fn scenario_a_txt_file_is_copied_verbatim() {
    let (input, output) = dirs();
    write(input.path(), "card.txt", "Name: Asha Patil\nGender: Female\n");

    let stats = text_pipeline().run(input.path(), output.path()).unwrap();

    assert_eq!(stats.total, 1);
    assert_eq!(stats.successful, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(
        fs::read_to_string(output.path().join("card.txt")).unwrap(),
        "Name: Asha Patil\nGender: Female\n"
    );
}

#[test]
fn unsupported_extensions_are_skipped_without_errors() {
    let (input, output) = dirs();
    write(input.path(), "card.txt", "supported");
    write(input.path(), "notes.md", "not supported");
    write(input.path(), "data.csv", "also,not,supported");

    let stats = text_pipeline().run(input.path(), output.path()).unwrap();

    // Eligible count excludes the skipped files, and nothing errored.
    assert_eq!(stats.total, 1);
    assert_eq!(stats.successful, 1);
    assert!(stats.errors.is_empty());
    assert!(!output.path().join("notes.txt").exists());
}

#[test]
fn empty_extraction_still_writes_an_artifact() {
    let (input, output) = dirs();
    // The echo mock OCRs the bytes; an empty image gives empty text.
    write(input.path(), "blank.png", "");

    let stats = text_pipeline().run(input.path(), output.path()).unwrap();

    assert_eq!(stats.successful, 1);
    let artifact = output.path().join("blank.txt");
    assert!(artifact.exists());
    assert_eq!(fs::read_to_string(artifact).unwrap(), "");
}

#[test]
fn artifact_names_derive_from_source_base_names() {
    let (input, output) = dirs();
    write(input.path(), "Asha.Patil.scan.jpg", "scan body");

    text_pipeline().run(input.path(), output.path()).unwrap();

    assert!(output.path().join("Asha.Patil.scan.txt").exists());
}

// ─── Record pipeline ───

const VALID_FENCED: &str = "```json {\"aadhar_number\":\"1234 5678 9012\",\"name\":\"A\",\"date_of_birth\":\"01/01/1990\",\"gender\":\"Male\"} ```";

#[tokio::test]
async fn scenario_b_fenced_response_sanitizes_and_validates() {
    let (input, output) = dirs();
    write(input.path(), "card.txt", "extracted card text");

    let mut pipeline = record_pipeline(MockModel::new(VALID_FENCED), 2);
    let stats = pipeline.run(input.path(), output.path()).await.unwrap();

    assert_eq!(stats.successful, 1);
    assert_eq!(stats.failed, 0);

    let body = fs::read_to_string(output.path().join("card.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["aadhar_number"], "1234 5678 9012");
    assert_eq!(value["gender"], "Male");
    // Pretty-printed with 2-space indentation.
    assert!(body.contains("\n  \"aadhar_number\""));

    // The artifact is a readable typed record.
    let record: IdentityRecord = serde_json::from_str(&body).unwrap();
    assert_eq!(record.date_of_birth.as_deref(), Some("01/01/1990"));
    assert!(record.address.is_none());
}

#[tokio::test]
async fn scenario_c_prose_response_records_invalid_json() {
    let (input, output) = dirs();
    write(input.path(), "card.txt", "text");

    let model = MockModel::new("I'm sorry, I couldn't find any identity data in this text.");
    let mut pipeline = record_pipeline(model, 2);
    let stats = pipeline.run(input.path(), output.path()).await.unwrap();

    assert_eq!(stats.successful, 0);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.errors, vec!["Invalid JSON from card.txt"]);
    assert!(!output.path().join("card.json").exists());
}

#[tokio::test]
async fn scenario_d_exhausted_credentials_record_ai_failure() {
    let (input, output) = dirs();
    write(input.path(), "card.txt", "text");

    let model = MockModel::new("unused");
    for _ in 0..3 {
        model.push_err(CompletionError::RateLimited("quota exceeded".into()));
    }
    let mut pipeline = record_pipeline(model.clone(), 3);
    let stats = pipeline.run(input.path(), output.path()).await.unwrap();

    assert_eq!(stats.failed, 1);
    assert_eq!(stats.errors, vec!["AI failed to process card.txt"]);
    assert!(!output.path().join("card.json").exists());
    // Every credential was tried exactly once.
    assert_eq!(
        model.credentials_seen(),
        vec!["key-1", "key-2", "key-3"]
    );
}

#[tokio::test]
async fn schema_violation_records_invalid_data_structure() {
    let (input, output) = dirs();
    write(input.path(), "card.txt", "text");

    // Parses fine, but address is a list.
    let model = MockModel::new(
        r#"{"aadhar_number":null,"name":null,"date_of_birth":null,"gender":null,"address":["MG Road"]}"#,
    );
    let mut pipeline = record_pipeline(model, 2);
    let stats = pipeline.run(input.path(), output.path()).await.unwrap();

    assert_eq!(stats.errors, vec!["Invalid data structure from card.txt"]);
    assert!(!output.path().join("card.json").exists());
}

#[tokio::test]
async fn batch_continues_past_failures() {
    let (input, output) = dirs();
    write(input.path(), "a.txt", "first");
    write(input.path(), "b.txt", "second");
    write(input.path(), "c.txt", "third");

    // a → prose (invalid JSON), b and c → valid records.
    let model = MockModel::new(VALID_FENCED);
    model.push_ok("no json here at all");
    let mut pipeline = record_pipeline(model, 2);
    let stats = pipeline.run(input.path(), output.path()).await.unwrap();

    assert_eq!(stats.total, 3);
    assert_eq!(stats.successful, 2);
    assert_eq!(stats.failed, 1);
    assert!(!output.path().join("a.json").exists());
    assert!(output.path().join("b.json").exists());
    assert!(output.path().join("c.json").exists());
}

#[tokio::test]
async fn non_ascii_is_preserved_unescaped() {
    let (input, output) = dirs();
    write(input.path(), "card.txt", "text");

    let model = MockModel::new(
        r#"{"aadhar_number":null,"name":"आशा पाटील","date_of_birth":null,"gender":"Female"}"#,
    );
    let mut pipeline = record_pipeline(model, 1);
    pipeline.run(input.path(), output.path()).await.unwrap();

    let body = fs::read_to_string(output.path().join("card.json")).unwrap();
    assert!(body.contains("आशा पाटील"));
    assert!(!body.contains("\\u"));
}

#[tokio::test]
async fn rotation_cursor_persists_across_items() {
    let (input, output) = dirs();
    write(input.path(), "a.txt", "first");
    write(input.path(), "b.txt", "second");

    // Item a: rate-limited on key-1, succeeds on key-2.
    // Item b: must start on key-2, not reset to key-1.
    let model = MockModel::new(VALID_FENCED);
    model.push_err(CompletionError::RateLimited("quota".into()));
    let mut pipeline = record_pipeline(model.clone(), 2);
    pipeline.run(input.path(), output.path()).await.unwrap();

    assert_eq!(model.credentials_seen(), vec!["key-1", "key-2", "key-2"]);
}

#[test]
fn empty_credential_list_refuses_to_start() {
    let result = RecordPipeline::new(
        MockModel::default(),
        Vec::new(),
        RecordPipelineConfig::no_throttle(),
    );
    assert!(result.is_err());
}

#[tokio::test]
async fn only_txt_artifacts_are_considered() {
    let (input, output) = dirs();
    write(input.path(), "card.txt", "text");
    write(input.path(), "stray.json", "{}");

    let mut pipeline = record_pipeline(MockModel::new(VALID_FENCED), 1);
    let stats = pipeline.run(input.path(), output.path()).await.unwrap();

    assert_eq!(stats.total, 1);
}
