use crate::server::error::{ApiError, ApiJson, Lang};
use crate::server::models::{ApiInfo, FastaInput, Health, SequenceInput};
use crate::server::upload::read_fasta_upload;
use crate::server::AppState;
use crate::i18n::{Language, Message};
use axum::{
    extract::{Multipart, State},
    Json,
};
use biotools_bio::{
    calculate_stats, parse_fasta_str, stats_batch, transform, transform_batch, BatchResult,
    Sequence, StatsResult, TransformResult,
};
use biotools_core::{BiotoolsError, DeclaredType, Operation, VERSION};
use tracing::{debug, info};

type ApiResult<T> = Result<Json<T>, ApiError>;

pub async fn root(Lang(lang): Lang) -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "Biotools API",
        description: lang.text(Message::ApiDescription),
        version: VERSION,
        docs: "/",
        features: Operation::ALL
            .iter()
            .map(|op| op.description())
            .chain(std::iter::once("Sequence statistics"))
            .chain(std::iter::once("FASTA batch processing"))
            .collect(),
    })
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        version: VERSION,
    })
}

fn transform_single(input: SequenceInput, operation: Operation, lang: Language) -> ApiResult<TransformResult> {
    debug!(operation = %operation, length = input.sequence.len(), "Single sequence request");
    transform(&input.sequence, input.sequence_type, operation)
        .map(|result| Json(result.with_id(input.sequence_id)))
        .map_err(|e| ApiError::from_engine(e, lang))
}

pub async fn reverse_complement(
    Lang(lang): Lang,
    ApiJson(input): ApiJson<SequenceInput>,
) -> ApiResult<TransformResult> {
    transform_single(input, Operation::ReverseComplement, lang)
}

pub async fn transcribe(
    Lang(lang): Lang,
    ApiJson(input): ApiJson<SequenceInput>,
) -> ApiResult<TransformResult> {
    transform_single(input, Operation::Transcribe, lang)
}

pub async fn reverse_transcribe(
    Lang(lang): Lang,
    ApiJson(input): ApiJson<SequenceInput>,
) -> ApiResult<TransformResult> {
    transform_single(input, Operation::ReverseTranscribe, lang)
}

pub async fn translate(
    Lang(lang): Lang,
    ApiJson(input): ApiJson<SequenceInput>,
) -> ApiResult<TransformResult> {
    transform_single(input, Operation::Translate, lang)
}

pub async fn uppercase(
    Lang(lang): Lang,
    ApiJson(input): ApiJson<SequenceInput>,
) -> ApiResult<TransformResult> {
    transform_single(input, Operation::Uppercase, lang)
}

pub async fn lowercase(
    Lang(lang): Lang,
    ApiJson(input): ApiJson<SequenceInput>,
) -> ApiResult<TransformResult> {
    transform_single(input, Operation::Lowercase, lang)
}

pub async fn stats(ApiJson(input): ApiJson<SequenceInput>) -> Json<StatsResult> {
    Json(calculate_stats(&input.sequence, input.sequence_type).with_id(input.sequence_id))
}

/// Parse FASTA text and enforce the configured record limit
fn parse_records(state: &AppState, content: &str) -> Result<Vec<Sequence>, BiotoolsError> {
    let records = parse_fasta_str(content)?;
    let limit = state.config.batch.max_records;
    if records.len() > limit {
        return Err(BiotoolsError::InvalidInput(format!(
            "FASTA input has {} records, the limit is {}",
            records.len(),
            limit
        )));
    }
    Ok(records)
}

fn transform_fasta(
    state: &AppState,
    content: &str,
    declared: DeclaredType,
    operation: Operation,
    lang: Language,
) -> ApiResult<BatchResult<TransformResult>> {
    let records = parse_records(state, content).map_err(|e| ApiError::from_engine(e, lang))?;
    Ok(Json(transform_batch(&records, declared, operation)))
}

fn stats_fasta(
    state: &AppState,
    content: &str,
    declared: DeclaredType,
    lang: Language,
) -> ApiResult<BatchResult<StatsResult>> {
    let records = parse_records(state, content).map_err(|e| ApiError::from_engine(e, lang))?;
    Ok(Json(stats_batch(&records, declared)))
}

pub async fn fasta_reverse_complement(
    State(state): State<AppState>,
    Lang(lang): Lang,
    ApiJson(input): ApiJson<FastaInput>,
) -> ApiResult<BatchResult<TransformResult>> {
    transform_fasta(
        &state,
        &input.fasta_content,
        input.sequence_type,
        Operation::ReverseComplement,
        lang,
    )
}

pub async fn fasta_transcribe(
    State(state): State<AppState>,
    Lang(lang): Lang,
    ApiJson(input): ApiJson<FastaInput>,
) -> ApiResult<BatchResult<TransformResult>> {
    transform_fasta(
        &state,
        &input.fasta_content,
        input.sequence_type,
        Operation::Transcribe,
        lang,
    )
}

pub async fn fasta_translate(
    State(state): State<AppState>,
    Lang(lang): Lang,
    ApiJson(input): ApiJson<FastaInput>,
) -> ApiResult<BatchResult<TransformResult>> {
    transform_fasta(
        &state,
        &input.fasta_content,
        input.sequence_type,
        Operation::Translate,
        lang,
    )
}

pub async fn fasta_stats(
    State(state): State<AppState>,
    Lang(lang): Lang,
    ApiJson(input): ApiJson<FastaInput>,
) -> ApiResult<BatchResult<StatsResult>> {
    stats_fasta(&state, &input.fasta_content, input.sequence_type, lang)
}

pub async fn upload_reverse_complement(
    State(state): State<AppState>,
    Lang(lang): Lang,
    multipart: Multipart,
) -> ApiResult<BatchResult<TransformResult>> {
    let upload = read_fasta_upload(multipart)
        .await
        .map_err(|e| ApiError::from_upload(e, lang))?;
    info!(filename = %upload.filename, "Processing uploaded FASTA");

    transform_fasta(
        &state,
        &upload.content,
        upload.sequence_type,
        Operation::ReverseComplement,
        lang,
    )
}

pub async fn upload_stats(
    State(state): State<AppState>,
    Lang(lang): Lang,
    multipart: Multipart,
) -> ApiResult<BatchResult<StatsResult>> {
    let upload = read_fasta_upload(multipart)
        .await
        .map_err(|e| ApiError::from_upload(e, lang))?;
    info!(filename = %upload.filename, "Processing uploaded FASTA");

    stats_fasta(&state, &upload.content, upload.sequence_type, lang)
}
