use serde::{Deserialize, Serialize};

pub const UNKNOWN_PROJECT: &str = "Unknown Project";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Projects shipped in a fresh configuration.
pub fn default_projects() -> Vec<Project> {
    vec![
        Project::new("proj-1", "HRMS Phase 1 Development"),
        Project::new("proj-2", "Marketing Campaign Setup"),
        Project::new("proj-3", "Internal Training & Documentation"),
        Project::new("proj-4", "Client X - Project Alpha"),
    ]
}

/// Read-only id → name lookup.
#[derive(Debug, Clone, Default)]
pub struct ProjectDirectory {
    projects: Vec<Project>,
}

impl ProjectDirectory {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.projects.iter().any(|p| p.id == id)
    }

    pub fn name_of(&self, id: &str) -> &str {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.as_str())
            .unwrap_or(UNKNOWN_PROJECT)
    }
}
