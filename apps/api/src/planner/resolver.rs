//! Requirement Resolver: which template entries are still outstanding.
//!
//! Elective categories are always reported as missing. There is no way to tie a
//! free-form category to a specific completed course, so the resolver demands it.
//! Prerequisite chains are not checked.

use tracing::debug;

use crate::planner::requirement::{CompletedCourses, RequirementKind};
use crate::planner::template::{DegreePlanTemplate, RequirementEntry};

/// Returns the unsatisfied entries of `template`, in template traversal order.
pub fn resolve(
    completed: &CompletedCourses,
    template: &DegreePlanTemplate,
) -> Vec<RequirementEntry> {
    template
        .entries()
        .iter()
        .filter(|entry| {
            if let RequirementKind::ElectiveCategory(category) = &entry.kind {
                debug!(seq = entry.seq, %category, "elective category is always outstanding");
                return true;
            }
            let satisfied = entry.kind.is_satisfied_by(completed);
            debug!(
                seq = entry.seq,
                year = %entry.year,
                term = %entry.term,
                label = %entry.label,
                satisfied,
                "classified requirement"
            );
            !satisfied
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template() -> DegreePlanTemplate {
        DegreePlanTemplate::from_json(json!({
            "freshman": {
                "fall": [
                    {"course": "CSCI 111", "credits": 3},
                    {"course": "MATH 120 or MATH 121", "credits": 3},
                    {"course": "WRIT 100", "credits": 3}
                ],
                "spring": [
                    {"course": "CSCI 112", "credits": 3},
                    {"course": "Fine Arts Elective", "credits": 3}
                ]
            },
            "sophomore": {
                "fall": [
                    {"course": "CSCI 211", "credits": 3},
                    {"course": "BISC 160 or CHEM 105", "credits": 4}
                ]
            }
        }))
        .unwrap()
    }

    fn labels(entries: &[RequirementEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.label.as_str()).collect()
    }

    #[test]
    fn test_single_disjunction_and_elective_rules() {
        let completed: CompletedCourses = ["MATH 121", "csci 111"].iter().collect();
        let missing = resolve(&completed, &template());
        assert_eq!(
            labels(&missing),
            vec![
                "WRIT 100",
                "CSCI 112",
                "Fine Arts Elective",
                "CSCI 211",
                "BISC 160 or CHEM 105"
            ]
        );
    }

    #[test]
    fn test_satisfied_and_missing_partition_the_template() {
        let template = template();
        let completed: CompletedCourses =
            ["CSCI 112", "CHEM 105", "WRIT 100", "Fine Arts Elective"].iter().collect();
        let missing = resolve(&completed, &template);

        let missing_seqs: Vec<_> = missing.iter().map(|e| e.seq).collect();
        let satisfied: Vec<_> = template
            .entries()
            .iter()
            .filter(|e| !missing_seqs.contains(&e.seq))
            .map(|e| e.label.as_str())
            .collect();
        assert_eq!(satisfied, vec!["WRIT 100", "CSCI 112", "BISC 160 or CHEM 105"]);
        assert_eq!(
            labels(&missing),
            vec!["CSCI 111", "MATH 120 or MATH 121", "Fine Arts Elective", "CSCI 211"]
        );
        assert_eq!(satisfied.len() + missing.len(), template.entries().len());
    }

    #[test]
    fn test_disjunction_separator_case() {
        let template = DegreePlanTemplate::from_json(json!({
            "freshman": {
                "fall": [
                    {"course": "MATH 120 OR MATH 121", "credits": 3},
                    {"course": "csci 111 or Csci 112", "credits": 3},
                    {"course": "PHYS 211 Or PHYS 212", "credits": 4}
                ]
            }
        }))
        .unwrap();
        let completed: CompletedCourses = ["MATH 120", "CSCI 112", "PHYS 211"].iter().collect();
        let missing = resolve(&completed, &template);
        assert_eq!(
            labels(&missing),
            vec!["MATH 120 OR MATH 121", "PHYS 211 Or PHYS 212"]
        );
    }

    #[test]
    fn test_missing_preserves_traversal_order() {
        let missing = resolve(&CompletedCourses::default(), &template());
        assert!(missing.windows(2).all(|w| w[0].seq < w[1].seq));
        assert_eq!(missing.len(), 7);
    }

    #[test]
    fn test_elective_missing_even_with_same_named_course() {
        let completed: CompletedCourses = ["Fine Arts Elective"].iter().collect();
        let missing = resolve(&completed, &template());
        assert!(labels(&missing).contains(&"Fine Arts Elective"));
    }

    #[test]
    fn test_everything_completed_leaves_only_electives() {
        let completed: CompletedCourses = [
            "CSCI 111", "MATH 120", "WRIT 100", "CSCI 112", "CSCI 211", "BISC 160",
        ]
        .iter()
        .collect();
        let missing = resolve(&completed, &template());
        assert_eq!(labels(&missing), vec!["Fine Arts Elective"]);
    }
}
