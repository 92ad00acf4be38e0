//! In-memory fakes of the external collaborators, shared by unit tests.

use std::ffi::OsString;
use std::sync::Mutex;

use crate::automation::{AutomationError, EditorWindow, WindowAutomation};
use crate::editor::{EditorBackend, EditorError, OpenMode};

/// Scripted raise behavior for one window index.
#[derive(Debug, Clone, Copy)]
pub enum RaiseOutcome {
    Raised,
    Refused,
    Malformed,
    Fails,
}

pub struct FakeAutomation {
    pub windows: Result<Vec<EditorWindow>, ()>,
    pub raise_outcomes: Vec<(usize, RaiseOutcome)>,
    pub menu_fails: bool,
    pub calls: Mutex<Vec<String>>,
    pub raised: Mutex<Vec<EditorWindow>>,
}

impl FakeAutomation {
    pub fn with_windows(windows: Vec<EditorWindow>) -> Self {
        Self {
            windows: Ok(windows),
            raise_outcomes: Vec::new(),
            menu_fails: false,
            calls: Mutex::new(Vec::new()),
            raised: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_enumeration() -> Self {
        Self {
            windows: Err(()),
            ..Self::with_windows(Vec::new())
        }
    }

    pub fn raise(mut self, index: usize, outcome: RaiseOutcome) -> Self {
        self.raise_outcomes.push((index, outcome));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Windows exactly as they were handed to `raise_window`.
    pub fn raised(&self) -> Vec<EditorWindow> {
        self.raised.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl WindowAutomation for FakeAutomation {
    fn list_windows(&self, app_name: &str) -> Result<Vec<EditorWindow>, AutomationError> {
        self.record(format!("list:{}", app_name));
        self.windows
            .clone()
            .map_err(|_| AutomationError::ScriptFailed {
                stderr: "not authorized to send Apple events".to_string(),
            })
    }

    fn raise_window(
        &self,
        _app_name: &str,
        window: &EditorWindow,
    ) -> Result<bool, AutomationError> {
        self.record(format!("raise:{}", window.index));
        self.raised.lock().unwrap().push(window.clone());
        let outcome = self
            .raise_outcomes
            .iter()
            .find(|(index, _)| *index == window.index)
            .map(|(_, outcome)| *outcome)
            .unwrap_or(RaiseOutcome::Raised);

        match outcome {
            RaiseOutcome::Raised => Ok(true),
            RaiseOutcome::Refused => Ok(false),
            RaiseOutcome::Malformed => Err(AutomationError::MalformedOutput {
                output: "maybe".to_string(),
            }),
            RaiseOutcome::Fails => Err(AutomationError::ScriptFailed {
                stderr: "assistive access denied".to_string(),
            }),
        }
    }

    fn select_in_window_menu(&self, _app_name: &str, title: &str) -> Result<(), AutomationError> {
        self.record(format!("menu:{}", title));
        if self.menu_fails {
            return Err(AutomationError::ScriptFailed {
                stderr: "menu item not found".to_string(),
            });
        }
        Ok(())
    }

    fn activate_app(&self, bundle_id: &str) -> Result<(), AutomationError> {
        self.record(format!("activate:{}", bundle_id));
        Ok(())
    }
}

pub struct FakeEditor {
    pub running: bool,
    pub status: Result<String, ()>,
    pub open_fails: bool,
    pub status_queries: Mutex<usize>,
    pub opens: Mutex<Vec<(OpenMode, Vec<OsString>)>>,
}

impl FakeEditor {
    pub fn running_with_status(status: &str) -> Self {
        Self {
            running: true,
            status: Ok(status.to_string()),
            open_fails: false,
            status_queries: Mutex::new(0),
            opens: Mutex::new(Vec::new()),
        }
    }

    pub fn not_running() -> Self {
        Self {
            running: false,
            ..Self::running_with_status("")
        }
    }

    pub fn status_queries(&self) -> usize {
        *self.status_queries.lock().unwrap()
    }

    pub fn opens(&self) -> Vec<(OpenMode, Vec<OsString>)> {
        self.opens.lock().unwrap().clone()
    }
}

impl EditorBackend for FakeEditor {
    fn display_name(&self) -> &'static str {
        "Fake Editor"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn query_status(&self) -> Result<String, EditorError> {
        *self.status_queries.lock().unwrap() += 1;
        self.status.clone().map_err(|_| EditorError::StatusFailed {
            stderr: "status unavailable".to_string(),
        })
    }

    fn open(&self, mode: OpenMode, files: &[OsString]) -> Result<(), EditorError> {
        self.opens.lock().unwrap().push((mode, files.to_vec()));
        if self.open_fails {
            return Err(EditorError::OpenFailed {
                code: Some(1),
                stderr: "launcher crashed".to_string(),
            });
        }
        Ok(())
    }
}
