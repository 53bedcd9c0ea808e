use super::CourseService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::courses::responses::CourseDto;

pub async fn get_course(service: &CourseService, course_id: i64) -> Result<CourseDto> {
    service
        .courses
        .find_by_id(course_id)
        .await?
        .map(CourseDto::from)
        .ok_or_else(|| {
            SchoolSystemError::course_not_found(format!("Course with ID {course_id} not found"))
        })
}

pub async fn list_courses(service: &CourseService) -> Result<Vec<CourseDto>> {
    let courses = service.courses.find_all().await?;
    Ok(courses.into_iter().map(CourseDto::from).collect())
}
