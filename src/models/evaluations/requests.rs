use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvaluationRequest {
    pub pole: String,
    pub module: String,
    pub contexte: Option<String>,
    pub items_ids: Vec<i64>,
}

/// Sparse patch for `POST /api/modifier-evaluation`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEvaluationRequest {
    pub evaluation_id: i64,
    pub module: Option<String>,
    pub contexte: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttribuerEvaluationRequest {
    pub evaluation_id: i64,
    pub classe: Option<String>,
    pub utilisateur_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetirerAttributionRequest {
    pub attribution_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AjouterItemsRequest {
    pub evaluation_id: i64,
    pub items_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetirerItemRequest {
    pub evaluation_id: i64,
    pub item_id: i64,
}
