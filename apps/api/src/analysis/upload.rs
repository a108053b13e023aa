//! Upload gate for the analyze-resume endpoint: at most one file per request,
//! an allow-list of extensions, and a transport-level size cap.

use axum::extract::Multipart;

use crate::errors::AppError;
use crate::extraction::FileKind;

/// Hard cap on the request body, enforced by the router's `DefaultBodyLimit`
/// before any application code runs.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// A fully buffered upload. The whole file is held in memory — a deliberate
/// simplicity trade-off that bounds concurrency by available memory.
pub struct UploadedFile {
    pub name: String,
    pub kind: FileKind,
    pub bytes: Vec<u8>,
}

/// What a multipart analyze-resume request carried.
pub struct AnalyzeInput {
    pub file: Option<UploadedFile>,
    pub resume_text: Option<String>,
}

/// Walks the multipart fields, collecting the `file` part (if any) and a
/// `resumeText` part (if any). The extension is checked against the allow-list
/// before the field body is buffered.
pub async fn read_multipart(mut multipart: Multipart) -> Result<AnalyzeInput, AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut resume_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("file") => {
                if file.is_some() {
                    return Err(AppError::Validation(
                        "Only one file may be uploaded per request".to_string(),
                    ));
                }
                let name = field.file_name().unwrap_or_default().to_string();
                let kind = FileKind::from_filename(&name).ok_or_else(|| {
                    AppError::Validation(format!(
                        "Invalid file type: '{name}'. Allowed: .pdf, .docx, .txt"
                    ))
                })?;
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| {
                        AppError::Validation(format!("Failed to read uploaded file: {e}"))
                    })?
                    .to_vec();
                file = Some(UploadedFile { name, kind, bytes });
            }
            Some("resumeText") => {
                let text = field.text().await.map_err(|e| {
                    AppError::Validation(format!("Failed to read resumeText field: {e}"))
                })?;
                resume_text = Some(text);
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    Ok(AnalyzeInput { file, resume_text })
}
