//! Deferred package-installation tasks
//!
//! Rules register install requests here; nothing is executed until the tree
//! has committed. The command layer then drains the queue and invokes the
//! package manager, fire-and-forget.

/// A request to install a set of npm packages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTask {
    pub packages: Vec<String>,
}

impl InstallTask {
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }

    /// The shell command an operator would run by hand
    pub fn command_line(&self) -> String {
        format!("npm install {}", self.packages.join(" "))
    }
}

/// Ordered queue of install requests registered during a run
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: Vec<InstallTask>,
}

impl TaskQueue {
    pub fn add(&mut self, task: InstallTask) {
        self.tasks.push(task);
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &InstallTask> {
        self.tasks.iter()
    }

    pub fn into_tasks(self) -> Vec<InstallTask> {
        self.tasks
    }
}
