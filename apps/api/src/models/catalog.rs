use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A row of `degree_plans`. `plan_structure` holds the nested year/term template.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DegreePlanRow {
    pub id: i32,
    pub name: String,
    pub catalog_year: Option<String>,
    pub plan_structure: Option<Value>,
}

/// A retrievable passage of catalog text from `knowledge_chunks`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct KnowledgeChunkRow {
    pub content: String,
    pub source: Option<String>,
    pub title: Option<String>,
}
