//! Demo recommendation data.
//!
//! Shown when the recommendation endpoint is unreachable so the course panel
//! never goes blank. The banner marks it as demo data; a later successful
//! fetch replaces it.

use crate::models::course::CourseRecommendation;

/// The demo course set and the skills it covers.
pub fn demo_recommendations() -> (Vec<CourseRecommendation>, Vec<String>) {
    let courses = vec![
        CourseRecommendation {
            course_name: "React - The Complete Guide".to_string(),
            platform: "Udemy".to_string(),
            duration: "40.5 hours".to_string(),
            link: "https://www.udemy.com/course/react-the-complete-guide-incl-hooks-react-router-redux/"
                .to_string(),
            educator: "Maximilian Schwarzmüller".to_string(),
            skill_covered: "React, Hooks, Redux".to_string(),
            difficulty_level: "All Levels".to_string(),
            rating: "4.7/5".to_string(),
        },
        CourseRecommendation {
            course_name: "Complete SQL Bootcamp".to_string(),
            platform: "Udemy".to_string(),
            duration: "9 hours".to_string(),
            link: "https://www.udemy.com/course/the-complete-sql-bootcamp/".to_string(),
            educator: "Jose Portilla".to_string(),
            skill_covered: "SQL, PostgreSQL".to_string(),
            difficulty_level: "Beginner to Advanced".to_string(),
            rating: "4.6/5".to_string(),
        },
    ];
    let covered = vec!["React".to_string(), "SQL".to_string()];
    (courses, covered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_set_is_nonempty_and_fully_populated() {
        let (courses, covered) = demo_recommendations();
        assert!(!courses.is_empty());
        assert_eq!(covered.len(), 2);
        for course in &courses {
            assert!(!course.course_name.is_empty());
            assert!(!course.link.is_empty());
            assert!(!course.skill_covered.is_empty());
        }
    }
}
