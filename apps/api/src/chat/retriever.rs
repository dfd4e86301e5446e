//! Catalog knowledge retrieval.
//!
//! Swappable behind `Retriever`; the default ranks `knowledge_chunks` with
//! PostgreSQL full-text search.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::catalog::KnowledgeChunkRow;

#[async_trait]
pub trait Retriever: Send + Sync {
    /// Up to `top_k` chunks relevant to `question`, best first.
    async fn retrieve(&self, question: &str, top_k: i64)
        -> Result<Vec<KnowledgeChunkRow>, AppError>;
}

pub struct PgFullTextRetriever {
    pool: PgPool,
}

impl PgFullTextRetriever {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Retriever for PgFullTextRetriever {
    async fn retrieve(
        &self,
        question: &str,
        top_k: i64,
    ) -> Result<Vec<KnowledgeChunkRow>, AppError> {
        let rows = sqlx::query_as::<_, KnowledgeChunkRow>(
            r#"
            SELECT content, source, title
            FROM knowledge_chunks
            WHERE to_tsvector('english', content) @@ plainto_tsquery('english', $1)
            ORDER BY ts_rank(to_tsvector('english', content), plainto_tsquery('english', $1)) DESC,
                     id
            LIMIT $2
            "#,
        )
        .bind(question)
        .bind(top_k)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// Fixed-result retriever for tests.
#[cfg(test)]
pub struct StaticRetriever(pub Vec<KnowledgeChunkRow>);

#[cfg(test)]
#[async_trait]
impl Retriever for StaticRetriever {
    async fn retrieve(
        &self,
        _question: &str,
        top_k: i64,
    ) -> Result<Vec<KnowledgeChunkRow>, AppError> {
        let take = usize::try_from(top_k).unwrap_or(0);
        Ok(self.0.iter().take(take).cloned().collect())
    }
}
