/// Router-level tests exercising the HTTP surface end to end
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use biotools_core::Config;
use biotools_server::{router, AppState};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

const BOUNDARY: &str = "biotools-test-boundary";

fn app() -> Router {
    router(AppState::new(Config::default())).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn multipart_upload(uri: &str, filename: &str, content: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_root_and_health() {
    let (status, info) = send(app(), Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(info["message"], "Biotools API");
    assert!(info["features"].as_array().unwrap().len() >= 6);

    let (status, health) = send(app(), Request::get("/health").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], biotools_core::VERSION);
}

#[tokio::test]
async fn test_reverse_complement() {
    let request = post_json(
        "/sequence/reverse-complement",
        json!({"sequence": "ATCGATCG", "sequence_id": "demo"}),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "CGATCGAT");
    assert_eq!(body["original_sequence"], "ATCGATCG");
    assert_eq!(body["sequence_type"], "dna");
    assert_eq!(body["sequence_id"], "demo");
}

#[tokio::test]
async fn test_translate_reports_metadata() {
    let request = post_json("/sequence/translate", json!({"sequence": "ATGGCCTAAG"}));
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "MA*");
    assert_eq!(body["sequence_type"], "protein");
    assert_eq!(body["metadata"]["trailing_bases_dropped"], 1);
}

#[tokio::test]
async fn test_case_conversion_keeps_everything() {
    let request = post_json("/sequence/case/lower", json!({"sequence": "AtG-123"}));
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "atg-123");
}

#[tokio::test]
async fn test_transcribe_declared_rna_is_bad_request() {
    let request = post_json(
        "/sequence/transcribe",
        json!({"sequence": "AUCG", "sequence_type": "rna"}),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "validation_error");
    assert!(body["detail"].as_str().unwrap().starts_with("Validation error: "));
}

#[tokio::test]
async fn test_unknown_sequence_type_is_bad_request() {
    let request = post_json(
        "/sequence/stats",
        json!({"sequence": "ATCG", "sequence_type": "plasmid"}),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_input");
}

#[tokio::test]
async fn test_null_sequence_type_means_auto() {
    let request = post_json(
        "/sequence/reverse-complement",
        json!({"sequence": "ATCG", "sequence_type": null}),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "CGAT");
    assert_eq!(body["sequence_type"], "dna");

    let request = post_json(
        "/fasta/stats",
        json!({"fasta_content": ">p1\nMKV\n", "sequence_type": null}),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["sequence_type"], "protein");
}

#[tokio::test]
async fn test_sequence_type_is_case_insensitive() {
    let request = post_json(
        "/sequence/transcribe",
        json!({"sequence": "ATCG", "sequence_type": "DNA"}),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "AUCG");

    let request = post_json(
        "/fasta/translate",
        json!({"fasta_content": ">r1\nAUGGCC\n", "sequence_type": "Rna"}),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["result"], "MA");
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/sequence/reverse-complement")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"sequence\": "))
        .unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_stats_endpoint() {
    let request = post_json("/sequence/stats", json!({"sequence": "ATCG"}));
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["length"], 4);
    assert_eq!(body["gc_content"], 50.0);
    assert_eq!(body["molecular_weight"], 1253.8);
    assert_eq!(body["composition"]["A"], 1);
}

#[tokio::test]
async fn test_localized_error_detail() {
    let request = Request::builder()
        .method("POST")
        .uri("/sequence/transcribe")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9,en;q=0.8")
        .body(Body::from(json!({"sequence": "MKV"}).to_string()))
        .unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("验证错误: "));
}

#[tokio::test]
async fn test_fasta_batch_isolates_failures() {
    let request = post_json(
        "/fasta/reverse-complement",
        json!({
            "fasta_content": ">s1\nATCG\n>s2\nXYZQ\n>s3\nGGCC\n",
            "sequence_type": "dna"
        }),
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 3);
    assert_eq!(body["success_count"], 2);
    assert_eq!(body["error_count"], 1);
    assert_eq!(body["results"][0]["result"], "CGAT");
    assert_eq!(body["results"][1]["sequence_id"], "s3");
    assert_eq!(body["errors"][0]["sequence_id"], "s2");
}

#[tokio::test]
async fn test_fasta_parse_error_is_bad_request() {
    let request = post_json("/fasta/stats", json!({"fasta_content": "ATCG\n>s1\nATCG\n"}));
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "parse_error");
}

#[tokio::test]
async fn test_fasta_record_limit() {
    let mut config = Config::default();
    config.batch.max_records = 1;
    let app = router(AppState::new(config)).unwrap();

    let request = post_json("/fasta/transcribe", json!({"fasta_content": ">a\nAT\n>b\nGC\n"}));
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "invalid_input");
}

#[tokio::test]
async fn test_upload_stats() {
    let request = multipart_upload("/fasta/upload/stats", "reads.fa", b">r1\nGGCC\n>r2\nMKV\n");
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_count"], 2);
    assert_eq!(body["results"][0]["gc_content"], 100.0);
    assert_eq!(body["results"][1]["sequence_type"], "protein");
}

#[tokio::test]
async fn test_upload_reverse_complement() {
    let request = multipart_upload(
        "/fasta/upload/reverse-complement",
        "reads.FASTA",
        b">r1\nAACG\n",
    );
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"][0]["result"], "CGTT");
}

#[tokio::test]
async fn test_upload_wrong_extension_is_bad_request() {
    let request = multipart_upload("/fasta/upload/stats", "reads.txt", b">r1\nACGT\n");
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "unsupported_file_type");
}

#[tokio::test]
async fn test_upload_invalid_utf8_is_bad_request() {
    let request = multipart_upload("/fasta/upload/stats", "reads.fasta", &[b'>', 0xff, 0xfe, b'\n']);
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "file_encoding_error");
}
