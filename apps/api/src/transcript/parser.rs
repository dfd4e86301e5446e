//! Transcript text → `StudentProfile`.
//!
//! Course lines look like `CSCI 111  Computer Science I   3.00   A`: a known
//! department, a three-digit number, a title, credits with two decimals, and a
//! letter grade. Anything else in the text is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::student::{CourseGrade, StudentProfile};

static COURSE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(CSCI|MATH|WRIT|BISC|CHEM|PHYS|ECON|PSY|SOC|Fine Arts|Humanities)\s+(\d{3})\s+.*?\s+(\d+\.\d{2})\s+([A-Z][+-]?)",
    )
    .expect("static regex is valid")
});

static CUMULATIVE_GPA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Cumulative GPA\s*:\s*(\d+\.\d+)").expect("static regex is valid")
});

pub fn parse_transcript_text(text: &str) -> StudentProfile {
    let taken_courses: Vec<CourseGrade> = COURSE_LINE
        .captures_iter(text)
        .filter_map(|caps| {
            let credits = caps[3].parse::<f64>().ok()?;
            Some(CourseGrade {
                course_code: format!("{} {}", &caps[1], &caps[2]),
                grade: caps[4].to_string(),
                semester: None,
                credits,
            })
        })
        .collect();

    let gpa = CUMULATIVE_GPA
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(0.0);

    let credits_earned = taken_courses.iter().map(|c| c.credits).sum();

    StudentProfile {
        gpa,
        taken_courses,
        credits_earned,
        ..StudentProfile::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSCRIPT: &str = "\
UNIVERSITY OF MISSISSIPPI - UNOFFICIAL TRANSCRIPT
Fall 2023
CSCI 111  Computer Science I   3.00   A
MATH 261  Unified Calculus I   3.00   B+
WRIT 100  Writing Seminar   3.00   A-
Spring 2024
CSCI 112  Computer Science II   4.00   B
HIST 130  World History   3.00   A
Cumulative GPA: 3.56
";

    #[test]
    fn test_extracts_known_department_courses() {
        let profile = parse_transcript_text(TRANSCRIPT);
        let codes: Vec<_> = profile
            .taken_courses
            .iter()
            .map(|c| c.course_code.as_str())
            .collect();
        assert_eq!(codes, vec!["CSCI 111", "MATH 261", "WRIT 100", "CSCI 112"]);
    }

    #[test]
    fn test_grades_and_credits() {
        let profile = parse_transcript_text(TRANSCRIPT);
        assert_eq!(profile.taken_courses[1].grade, "B+");
        assert_eq!(profile.taken_courses[2].grade, "A-");
        assert_eq!(profile.taken_courses[3].credits, 4.0);
        assert!((profile.credits_earned - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_cumulative_gpa() {
        let profile = parse_transcript_text(TRANSCRIPT);
        assert!((profile.gpa - 3.56).abs() < 1e-9);
    }

    #[test]
    fn test_unrecognized_text_gives_default_profile() {
        let profile = parse_transcript_text("nothing useful here");
        assert_eq!(profile, StudentProfile::default());
    }
}
