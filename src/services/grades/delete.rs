use tracing::info;

use super::GradeService;
use crate::errors::{Result, SchoolSystemError};

pub async fn delete_grade(service: &GradeService, grade_id: i64) -> Result<()> {
    if !service.grades.delete(grade_id).await? {
        return Err(SchoolSystemError::grade_not_found(format!(
            "Grade with ID {grade_id} not found"
        )));
    }

    info!("Deleted grade {}", grade_id);
    Ok(())
}
