use crate::Section;

use td_core::{Identity, Notification, Project, Task};

use std::fmt;

const NO_PROJECTS: &str = "No projects found.";
const NO_TASKS: &str = "No tasks assigned or created by you.";
const NO_NOTIFICATIONS: &str = "No notifications.";

/// A settled dashboard: every section either loaded or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    pub identity: Identity,
    pub projects: Section<Project>,
    pub tasks: Section<Task>,
    pub notifications: Section<Notification>,
}

impl DashboardData {
    /// True when no section failed
    pub fn is_fully_loaded(&self) -> bool {
        self.projects.is_loaded() && self.tasks.is_loaded() && self.notifications.is_loaded()
    }
}

fn write_section<T>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    section: &Section<T>,
    empty: &str,
    mut item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}")?;
    match section {
        Section::Failed(reason) => writeln!(f, "  {reason}"),
        Section::Loaded(items) if items.is_empty() => writeln!(f, "  {empty}"),
        Section::Loaded(items) => items.iter().try_for_each(|entry| item(f, entry)),
    }
}

impl fmt::Display for DashboardData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome, {}", self.identity.display_name())?;

        write_section(f, "Your Projects", &self.projects, NO_PROJECTS, |f, project| {
            writeln!(f, "  - {}", project.name)?;
            writeln!(f, "    {}", project.description_or_default())
        })?;

        write_section(f, "Your Tasks", &self.tasks, NO_TASKS, |f, task| {
            writeln!(f, "  - {}", task.name)?;
            writeln!(f, "    Status: {}", task.status)?;
            match task.deadline {
                Some(deadline) => writeln!(f, "    Deadline: {}", deadline.format("%Y-%m-%d")),
                None => writeln!(f, "    Deadline: none"),
            }
        })?;

        write_section(
            f,
            "Notifications",
            &self.notifications,
            NO_NOTIFICATIONS,
            |f, notification| writeln!(f, "  - {}", notification.message),
        )
    }
}
