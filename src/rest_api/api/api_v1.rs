use crate::rest_api::api::{v1_sanitize, v1_standardize, SanitizeResponse, StandardizeResponse};
use crate::rest_api::models::Smiles;

use poem_openapi::{payload::Json, OpenApi};

#[derive(Default)]
pub struct ApiV1 {}

#[OpenApi]
impl ApiV1 {
    #[oai(path = "/v1/sanitize", method = "post")]
    /// Standardize a list of SMILES and report whether standardization changed each structure
    pub async fn v1_sanitize(&self, smiles_vec: Json<Vec<Smiles>>) -> SanitizeResponse {
        v1_sanitize(smiles_vec).await
    }

    #[oai(path = "/v1/standardize", method = "post")]
    /// Pass a list of SMILES through cleanup and canonicalization routines
    pub async fn v1_standardize(&self, smiles_vec: Json<Vec<Smiles>>) -> StandardizeResponse {
        v1_standardize(smiles_vec).await
    }
}
