mod create_project;
mod delete_project;
mod get_projects;
mod get_single_project;
mod update_project;

pub use create_project::{CreateProjectError, CreateProjectRequest, CreateProjectUseCase};
pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};
