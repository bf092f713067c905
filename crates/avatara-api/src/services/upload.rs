//! Multipart extraction for the generate endpoint.

use axum::extract::Multipart;

use avatara_core::AppError;

/// The image attachment of a generate request.
pub struct ImagePart {
    pub data: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

/// Raw fields of a generate request. Presence checks happen in the handler
/// so missing-image and missing-style produce their distinct errors.
pub struct GenerateFields {
    pub image: Option<ImagePart>,
    pub style: Option<String>,
}

/// Extract the `image` file field and the `style` text field from a
/// multipart form. Exactly one image attachment is accepted; a second one
/// fails the request.
pub async fn extract_generate_fields(
    mut multipart: Multipart,
) -> Result<GenerateFields, AppError> {
    let mut image: Option<ImagePart> = None;
    let mut style: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "image" => {
                if image.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple image fields are not allowed; send exactly one field named 'image'"
                            .to_string(),
                    ));
                }

                let filename = field
                    .file_name()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read image data: {}", e))
                })?;

                image = Some(ImagePart {
                    data: data.to_vec(),
                    filename,
                    content_type,
                });
            }
            "style" => {
                let text = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read style field: {}", e))
                })?;
                style = Some(text);
            }
            // Unknown fields are ignored, matching lenient form handling.
            _ => {}
        }
    }

    Ok(GenerateFields { image, style })
}
