//! Degree-plan lookup.
//!
//! `AppState` carries the planner with an `Arc<dyn PlanRepository>`, so handlers and
//! tests never depend on PostgreSQL directly.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::catalog::DegreePlanRow;

#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// All plans whose name contains `pattern` (case-sensitive), oldest first.
    async fn find_by_name_pattern(&self, pattern: &str) -> Result<Vec<DegreePlanRow>, AppError>;
}

pub struct PgPlanRepository {
    pool: PgPool,
}

impl PgPlanRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    async fn find_by_name_pattern(&self, pattern: &str) -> Result<Vec<DegreePlanRow>, AppError> {
        let rows = sqlx::query_as::<_, DegreePlanRow>(
            "SELECT id, name, catalog_year, plan_structure FROM degree_plans \
             WHERE name LIKE '%' || $1 || '%' ORDER BY id",
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

/// In-memory repository for tests.
#[cfg(test)]
pub struct InMemoryPlanRepository(pub Vec<DegreePlanRow>);

#[cfg(test)]
#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn find_by_name_pattern(&self, pattern: &str) -> Result<Vec<DegreePlanRow>, AppError> {
        Ok(self
            .0
            .iter()
            .filter(|row| row.name.contains(pattern))
            .cloned()
            .collect())
    }
}
