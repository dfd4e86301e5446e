//! Orchestration: plan lookup, then resolve and pack.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::student::StudentProfile;
use crate::planner::packer::{pack, SemesterBucket};
use crate::planner::repository::PlanRepository;
use crate::planner::requirement::CompletedCourses;
use crate::planner::resolver::resolve;
use crate::planner::template::{DegreePlanTemplate, PlannerError};

pub const DEFAULT_CREDIT_CEILING: f64 = 15.0;
pub const NO_PLAN_FOUND: &str = "No degree plan found in database.";

/// Output of the pure planning core.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSchedule {
    pub missing_count: usize,
    pub schedule: Vec<SemesterBucket>,
}

/// Resolves outstanding requirements and packs them into semesters.
pub fn build_schedule(
    completed: &CompletedCourses,
    template: &DegreePlanTemplate,
    ceiling: f64,
) -> GeneratedSchedule {
    let missing = resolve(completed, template);
    let missing_count = missing.len();
    GeneratedSchedule {
        missing_count,
        schedule: pack(missing, ceiling),
    }
}

/// Result record returned to clients.
#[derive(Debug, Serialize)]
pub struct PlanResult {
    pub status: &'static str,
    pub student: StudentProfile,
    pub missing_count: usize,
    pub recommended_schedule: Vec<SemesterBucket>,
    pub raw_plan: Value,
}

#[derive(Debug)]
pub enum PlanOutcome {
    Generated(PlanResult),
    NotFound,
}

#[derive(Clone)]
pub struct DegreePlannerService {
    plans: Arc<dyn PlanRepository>,
    credit_ceiling: f64,
    default_plan_pattern: String,
}

impl DegreePlannerService {
    pub fn new(
        plans: Arc<dyn PlanRepository>,
        credit_ceiling: f64,
        default_plan_pattern: impl Into<String>,
    ) -> Self {
        Self {
            plans,
            credit_ceiling,
            default_plan_pattern: default_plan_pattern.into(),
        }
    }

    /// Generates a schedule for `profile` against the first plan whose name
    /// contains `plan_pattern` (or the configured default pattern).
    pub async fn generate_plan(
        &self,
        profile: StudentProfile,
        plan_pattern: Option<&str>,
    ) -> Result<PlanOutcome, AppError> {
        let pattern = plan_pattern.unwrap_or(&self.default_plan_pattern);
        let mut matches = self.plans.find_by_name_pattern(pattern).await?;

        if matches.len() > 1 {
            let names: Vec<_> = matches.iter().map(|p| p.name.as_str()).collect();
            warn!(
                "Plan pattern '{pattern}' is ambiguous ({}); using '{}'",
                names.join(", "),
                names[0]
            );
        }
        if matches.is_empty() {
            info!("No degree plan matches pattern '{pattern}'");
            return Ok(PlanOutcome::NotFound);
        }
        let plan = matches.swap_remove(0);

        let structure = plan.plan_structure.ok_or_else(|| {
            PlannerError::MalformedTemplate(format!("plan '{}' has no structure", plan.name))
        })?;
        let template = DegreePlanTemplate::from_json(structure)?;

        let completed = profile.completed_courses();
        if completed.is_empty() {
            debug!("Profile has no recorded courses; every requirement is outstanding");
        }
        let generated = build_schedule(&completed, &template, self.credit_ceiling);

        for (index, bucket) in generated.schedule.iter().enumerate() {
            debug!(
                semester = index + 1,
                courses = bucket.entries().len(),
                credits = bucket.total_credits(),
                "Packed semester"
            );
        }
        info!(
            plan = %plan.name,
            completed = completed.len(),
            missing = generated.missing_count,
            semesters = generated.schedule.len(),
            credits = generated.schedule.iter().map(SemesterBucket::total_credits).sum::<f64>(),
            "Generated degree plan"
        );

        Ok(PlanOutcome::Generated(PlanResult {
            status: "success",
            student: profile,
            missing_count: generated.missing_count,
            recommended_schedule: generated.schedule,
            raw_plan: template.into_raw(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::DegreePlanRow;
    use crate::models::student::CourseGrade;
    use crate::planner::repository::InMemoryPlanRepository;
    use serde_json::json;

    fn freshman_fall() -> Value {
        json!({
            "Freshman": {
                "Fall": [
                    {"course": "CSCI 111", "credits": 3},
                    {"course": "MATH 120 or MATH 121", "credits": 3},
                    {"course": "WRIT 100", "credits": 3}
                ]
            }
        })
    }

    fn plan(id: i32, name: &str, structure: Option<Value>) -> DegreePlanRow {
        DegreePlanRow {
            id,
            name: name.to_string(),
            catalog_year: Some("2024-2025".to_string()),
            plan_structure: structure,
        }
    }

    fn profile_with(codes: &[&str]) -> StudentProfile {
        StudentProfile {
            taken_courses: codes
                .iter()
                .map(|c| CourseGrade {
                    course_code: c.to_string(),
                    grade: "A".to_string(),
                    semester: None,
                    credits: 3.0,
                })
                .collect(),
            ..StudentProfile::default()
        }
    }

    fn service(rows: Vec<DegreePlanRow>) -> DegreePlannerService {
        DegreePlannerService::new(
            Arc::new(InMemoryPlanRepository(rows)),
            DEFAULT_CREDIT_CEILING,
            "BSCS",
        )
    }

    #[test]
    fn test_build_schedule_freshman_scenario() {
        let template = DegreePlanTemplate::from_json(freshman_fall()).unwrap();
        let completed: CompletedCourses = ["MATH 121"].iter().collect();
        let generated = build_schedule(&completed, &template, 15.0);

        assert_eq!(generated.missing_count, 2);
        assert_eq!(
            serde_json::to_value(&generated.schedule).unwrap(),
            json!([[{"course": "CSCI 111", "credits": 3}, {"course": "WRIT 100", "credits": 3}]])
        );
    }

    #[test]
    fn test_uppercase_or_label_stays_missing() {
        let template = DegreePlanTemplate::from_json(json!({
            "Freshman": {"Fall": [{"course": "MATH 120 OR MATH 121"}]}
        }))
        .unwrap();
        let completed: CompletedCourses = ["MATH 120"].iter().collect();
        let generated = build_schedule(&completed, &template, 15.0);
        assert_eq!(generated.missing_count, 1);
    }

    #[test]
    fn test_build_schedule_is_deterministic() {
        let template = DegreePlanTemplate::from_json(freshman_fall()).unwrap();
        let completed: CompletedCourses = ["WRIT 100"].iter().collect();
        let first = build_schedule(&completed, &template, 5.0);
        let second = build_schedule(&completed, &template, 5.0);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.schedule).unwrap(),
            serde_json::to_string(&second.schedule).unwrap()
        );
    }

    #[tokio::test]
    async fn test_generate_plan_echoes_profile_and_plan() {
        let svc = service(vec![plan(1, "BSCS 2024-2025", Some(freshman_fall()))]);
        let profile = profile_with(&["MATH 121"]);

        let outcome = svc.generate_plan(profile.clone(), None).await.unwrap();
        let PlanOutcome::Generated(result) = outcome else {
            panic!("expected a generated plan");
        };
        assert_eq!(result.status, "success");
        assert_eq!(result.student, profile);
        assert_eq!(result.missing_count, 2);
        assert_eq!(result.recommended_schedule.len(), 1);
        assert_eq!(result.recommended_schedule[0].total_credits(), 6.0);
        assert_eq!(result.raw_plan, freshman_fall());
    }

    #[tokio::test]
    async fn test_generate_plan_not_found() {
        let svc = service(vec![plan(1, "BA English 2024-2025", Some(freshman_fall()))]);
        let outcome = svc.generate_plan(StudentProfile::default(), None).await.unwrap();
        assert!(matches!(outcome, PlanOutcome::NotFound));
    }

    #[tokio::test]
    async fn test_first_partial_match_wins() {
        let other = json!({"Freshman": {"Fall": [{"course": "CSCI 999"}]}});
        let svc = service(vec![
            plan(1, "BSCS 2023-2024", Some(other)),
            plan(2, "BSCS 2024-2025", Some(freshman_fall())),
        ]);
        let PlanOutcome::Generated(result) =
            svc.generate_plan(StudentProfile::default(), None).await.unwrap()
        else {
            panic!("expected a generated plan");
        };
        assert_eq!(result.missing_count, 1);
    }

    #[tokio::test]
    async fn test_explicit_pattern_overrides_default() {
        let svc = service(vec![
            plan(1, "BSCS 2024-2025", Some(freshman_fall())),
            plan(2, "BSEE 2024-2025", Some(json!({}))),
        ]);
        let PlanOutcome::Generated(result) = svc
            .generate_plan(StudentProfile::default(), Some("BSEE"))
            .await
            .unwrap()
        else {
            panic!("expected a generated plan");
        };
        assert_eq!(result.missing_count, 0);
        assert!(result.recommended_schedule.is_empty());
    }

    #[tokio::test]
    async fn test_plan_without_structure_is_malformed() {
        let svc = service(vec![plan(1, "BSCS 2024-2025", None)]);
        let err = svc
            .generate_plan(StudentProfile::default(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Planner(_)));
    }
}
