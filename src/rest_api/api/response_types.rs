use poem_openapi::{payload::Json, ApiResponse, Object};

#[derive(ApiResponse, Debug)]
pub enum SanitizeResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<Vec<SanitizedSmiles>>),
}

#[derive(ApiResponse, Debug)]
pub enum StandardizeResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<Vec<StandardizedSmiles>>),
}

#[derive(Object, Debug)]
pub struct SanitizedSmiles {
    #[oai(skip_serializing_if_is_none)]
    pub smiles: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub canonical_smiles: Option<String>,
    pub changed: bool,
    /// One of sanitized, no_input, parse_failure or standardization_failure
    pub status: String,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

#[derive(Object, Debug)]
pub struct StandardizedSmiles {
    #[oai(skip_serializing_if_is_none)]
    pub smiles: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}
