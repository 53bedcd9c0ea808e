use super::GradeService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::grades::responses::GradeDto;

pub async fn get_grade(service: &GradeService, grade_id: i64) -> Result<GradeDto> {
    service
        .grades
        .find_by_id(grade_id)
        .await?
        .map(GradeDto::from)
        .ok_or_else(|| {
            SchoolSystemError::grade_not_found(format!("Grade with ID {grade_id} not found"))
        })
}

pub async fn list_grades(service: &GradeService) -> Result<Vec<GradeDto>> {
    let grades = service.grades.find_all().await?;
    Ok(grades.into_iter().map(GradeDto::from).collect())
}
