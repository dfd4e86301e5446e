use serde::{Deserialize, Serialize};

use crate::planner::requirement::CompletedCourses;

fn default_course_credits() -> f64 {
    3.0
}

/// One course line from a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    pub course_code: String,
    pub grade: String,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default = "default_course_credits")]
    pub credits: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    pub student_name: Option<String>,
    pub major: String,
    pub catalog_year: String,
    pub gpa: f64,
    pub taken_courses: Vec<CourseGrade>,
    pub credits_earned: f64,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            student_name: None,
            major: "Computer Science".to_string(),
            catalog_year: "2024-2025".to_string(),
            gpa: 0.0,
            taken_courses: Vec::new(),
            credits_earned: 0.0,
        }
    }
}

impl StudentProfile {
    /// Every recorded course code, regardless of grade.
    pub fn completed_courses(&self) -> CompletedCourses {
        self.taken_courses.iter().map(|c| &c.course_code).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::requirement::CourseRef;

    #[test]
    fn test_empty_body_uses_defaults() {
        let profile: StudentProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, StudentProfile::default());
        assert_eq!(profile.major, "Computer Science");
    }

    #[test]
    fn test_course_credits_default() {
        let course: CourseGrade =
            serde_json::from_str(r#"{"course_code": "CSCI 111", "grade": "A"}"#).unwrap();
        assert_eq!(course.credits, 3.0);
        assert_eq!(course.semester, None);
    }

    #[test]
    fn test_failed_and_withdrawn_courses_still_count() {
        let profile: StudentProfile = serde_json::from_str(
            r#"{"taken_courses": [
                {"course_code": "csci 111", "grade": "F"},
                {"course_code": "MATH 261", "grade": "W"}
            ]}"#,
        )
        .unwrap();
        let completed = profile.completed_courses();
        assert!(completed.contains(&CourseRef::new("CSCI 111")));
        assert!(completed.contains(&CourseRef::new("MATH 261")));
    }
}
