mod handler;
mod model;

pub use handler::{
    create_project, delete_project, get_project, list_projects, project_report, update_project,
};
pub use model::{PaymentStatus, Project, ProjectInfo, ReportSummary};
