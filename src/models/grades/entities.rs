use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

// 成绩实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub value: f64,
    pub date: Option<chrono::DateTime<chrono::Utc>>,
}

/// 成绩取值范围（闭区间）
///
/// 管理员录入、修改、教师录入与批量导入共用同一范围。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeRange {
    pub min: f64,
    pub max: f64,
}

impl Default for GradeRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10.0,
        }
    }
}

impl GradeRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn from_config() -> Self {
        let grading = &AppConfig::get().grading;
        Self::new(grading.min_value, grading.max_value)
    }

    /// NaN 与无穷值均视为越界
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

impl std::fmt::Display for GradeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_bounds_are_inclusive() {
        let range = GradeRange::default();
        assert!(range.contains(0.0));
        assert!(range.contains(10.0));
        assert!(range.contains(7.25));
        assert!(!range.contains(-0.01));
        assert!(!range.contains(10.5));
        assert!(!range.contains(f64::NAN));
        assert!(!range.contains(f64::INFINITY));
    }

    #[test]
    fn test_range_display() {
        assert_eq!(GradeRange::default().to_string(), "0-10");
    }
}
