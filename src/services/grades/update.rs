use tracing::{debug, info};

use super::GradeService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::grades::{requests::UpdateGradeRequest, responses::GradeDto};

pub async fn update_grade(
    service: &GradeService,
    grade_id: i64,
    update_data: UpdateGradeRequest,
) -> Result<GradeDto> {
    let not_found =
        || SchoolSystemError::grade_not_found(format!("Grade with ID {grade_id} not found"));

    let existing = service
        .grades
        .find_by_id(grade_id)
        .await?
        .ok_or_else(not_found)?;

    let value = update_data
        .value
        .ok_or_else(|| SchoolSystemError::invalid_value("Grade value is required"))?;

    if !service.range.contains(value) {
        return Err(SchoolSystemError::invalid_value(format!(
            "Invalid grade value {value}. Must be {}.",
            service.range
        )));
    }

    // 分值未变化时不写库
    if existing.value == value {
        debug!("Grade {} unchanged, skipping write", grade_id);
        return Ok(GradeDto::from(existing));
    }

    let grade = service
        .grades
        .update_value(grade_id, value)
        .await?
        .ok_or_else(not_found)?;

    info!("Updated grade {} to {}", grade_id, value);
    Ok(GradeDto::from(grade))
}
