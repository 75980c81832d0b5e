use std::path::PathBuf;

use crate::data;
use crate::engine::{BudgetEditor, DateRange, EditorMode};
use crate::job::{JobOutcome, JobPhase, JobPlan, JobUpdate, StatementJob};
use crate::store::Store;

use super::util::ListCursor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    Transactions,
    Upload,
    Budgets,
    Settings,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[
            Self::Dashboard,
            Self::Transactions,
            Self::Upload,
            Self::Budgets,
            Self::Settings,
        ]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::Transactions => write!(f, "Transactions"),
            Self::Upload => write!(f, "Upload"),
            Self::Budgets => write!(f, "Budgets"),
            Self::Settings => write!(f, "Settings"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Search,
    Editing,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Search => write!(f, "SEARCH"),
            Self::Editing => write!(f, "EDIT"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    ResetData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UploadStep {
    SelectFile,
    Details,
    Processing,
    Complete,
    Cancelled,
    Failed,
}

impl std::fmt::Display for UploadStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SelectFile => write!(f, "Select File"),
            Self::Details => write!(f, "Details"),
            Self::Processing => write!(f, "Processing"),
            Self::Complete => write!(f, "Complete"),
            Self::Cancelled => write!(f, "Cancelled"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// Date-range presets offered by the filter overlay, in row order after
/// the category toggles.
pub(crate) const FILTER_PRESETS: [&str; 3] = ["Last 7 days", "Last 30 days", "Last 3 months"];

/// Resolve a preset index into a concrete range ending today.
pub(crate) fn preset_range(preset: usize) -> DateRange {
    let today = chrono::Local::now().date_naive();
    let days = match preset {
        0 => 7,
        1 => 30,
        _ => 90,
    };
    DateRange::between(today - chrono::Duration::days(days), today)
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) search_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) month_label: &'static str,

    /// All collections and filter/sort state live here; the UI never
    /// computes its own views.
    pub(crate) store: Store,

    // Transactions
    pub(crate) transaction_cursor: ListCursor,

    // Filter overlay (staged until Apply)
    pub(crate) show_filter: bool,
    pub(crate) filter_cursor: ListCursor,
    pub(crate) filter_options: Vec<String>,
    pub(crate) filter_selected: Vec<String>,
    pub(crate) filter_range: DateRange,

    // Budgets
    pub(crate) budget_cursor: ListCursor,
    pub(crate) editor: Option<BudgetEditor>,

    // Upload flow
    pub(crate) upload_step: UploadStep,
    pub(crate) selected_file: Option<PathBuf>,
    /// Captured for the simulated run and discarded with the flow; the
    /// file is never actually opened.
    pub(crate) password: String,
    pub(crate) password_visible: bool,
    pub(crate) job: Option<StatementJob>,
    pub(crate) job_phase: JobPhase,
    pub(crate) job_ratio: f64,
    pub(crate) job_outcome: Option<JobOutcome>,

    // File browser
    pub(crate) file_browser_path: PathBuf,
    pub(crate) file_browser_entries: Vec<PathBuf>,
    pub(crate) file_browser_cursor: ListCursor,
    pub(crate) file_browser_filter: String,
    pub(crate) file_browser_show_hidden: bool,
    pub(crate) file_browser_input_focused: bool,

    // Settings
    pub(crate) settings_index: usize,
    pub(crate) dark_mode: bool,
    pub(crate) notifications: bool,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            search_input: String::new(),
            status_message: String::new(),
            show_help: false,
            month_label: data::MONTH_LABEL,

            store: Store::new(),

            transaction_cursor: ListCursor::default(),

            show_filter: false,
            filter_cursor: ListCursor::default(),
            filter_options: Vec::new(),
            filter_selected: Vec::new(),
            filter_range: DateRange::default(),

            budget_cursor: ListCursor::default(),
            editor: None,

            upload_step: UploadStep::SelectFile,
            selected_file: None,
            password: String::new(),
            password_visible: false,
            job: None,
            job_phase: JobPhase::Upload,
            job_ratio: 0.0,
            job_outcome: None,

            file_browser_path: directories::UserDirs::new()
                .map(|d| d.home_dir().to_path_buf())
                .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))),
            file_browser_entries: Vec::new(),
            file_browser_cursor: ListCursor::default(),
            file_browser_filter: String::new(),
            file_browser_show_hidden: false,
            file_browser_input_focused: false,

            settings_index: 0,
            dark_mode: false,
            notifications: true,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    // Per-list page sizes, derived from the content height measured at
    // the last render. The subtractions mirror each screen's fixed chrome.

    pub(crate) fn transaction_page(&self) -> usize {
        self.visible_rows.saturating_sub(7).max(1)
    }

    pub(crate) fn budget_page(&self) -> usize {
        self.visible_rows.saturating_sub(8).max(1)
    }

    pub(crate) fn file_browser_page(&self) -> usize {
        self.visible_rows.saturating_sub(6).max(1)
    }

    // ── Filter overlay ────────────────────────────────────────

    pub(crate) fn open_filter_overlay(&mut self) {
        self.filter_options = self.store.known_categories();
        self.filter_selected = self.store.filter.categories.clone();
        self.filter_range = self.store.filter.date_range;
        self.filter_cursor = ListCursor::default();
        self.show_filter = true;
    }

    /// Commit the staged selections to the store.
    pub(crate) fn apply_filter_overlay(&mut self) {
        self.store.set_categories(self.filter_selected.clone());
        self.store.set_date_range(self.filter_range);
        self.show_filter = false;
        self.transaction_cursor.to_top();
        self.set_status(format!("{} transactions match", self.store.visible.len()));
    }

    /// Category toggles, then the presets, then the clear-range row.
    pub(crate) fn filter_row_count(&self) -> usize {
        self.filter_options.len() + FILTER_PRESETS.len() + 1
    }

    // ── Budget editor ─────────────────────────────────────────

    pub(crate) fn open_editor_create(&mut self) {
        self.editor = Some(BudgetEditor::create());
        self.input_mode = InputMode::Editing;
    }

    pub(crate) fn open_editor_edit(&mut self) {
        if let Some(budget) = self.store.budgets.get(self.budget_cursor.index) {
            self.editor = Some(BudgetEditor::edit(budget));
            self.input_mode = InputMode::Editing;
        } else {
            self.set_status("No budget selected");
        }
    }

    /// Validate the draft and commit it. On a validation failure the form
    /// stays open showing its inline message.
    pub(crate) fn commit_editor(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };
        let Some((category, amount)) = editor.submit() else {
            return;
        };
        let mode = editor.mode.clone();
        match mode {
            EditorMode::Create => {
                self.store.add_budget(&category, amount);
                self.set_status(format!("Added budget: {category}"));
            }
            EditorMode::Edit { id } => {
                if self.store.update_budget(&id, category.clone(), amount) {
                    self.set_status(format!("Updated budget: {category}"));
                } else {
                    self.set_status("Budget no longer exists");
                }
            }
        }
        self.editor = None;
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn cancel_editor(&mut self) {
        self.editor = None;
        self.input_mode = InputMode::Normal;
    }

    // ── Upload flow ───────────────────────────────────────────

    pub(crate) fn start_upload(&mut self) {
        let Some(path) = self.selected_file.clone() else {
            self.set_status("Select a statement first");
            return;
        };
        // Presence check only; statement bytes are never read. A file
        // that vanished between selection and Enter fails here.
        if std::fs::metadata(&path).is_err() {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("statement");
            let reason = format!("Could not read {name}");
            self.set_status(format!("Upload failed: {reason}"));
            self.job_outcome = Some(JobOutcome::Failed(reason));
            self.upload_step = UploadStep::Failed;
            return;
        }
        self.job_phase = JobPhase::Upload;
        self.job_ratio = 0.0;
        self.job_outcome = None;
        self.job = Some(StatementJob::spawn(JobPlan::default()));
        self.upload_step = UploadStep::Processing;
        self.set_status("Processing statement...");
    }

    pub(crate) fn cancel_upload(&mut self) {
        if let Some(job) = &self.job {
            job.cancel();
            self.set_status("Cancelling upload...");
        }
    }

    /// Back to a clean picker; also the retry path after any terminal
    /// outcome, which is why everything job-related resets here.
    pub(crate) fn reset_upload(&mut self) {
        self.upload_step = UploadStep::SelectFile;
        self.selected_file = None;
        self.password.clear();
        self.password_visible = false;
        self.job = None;
        self.job_outcome = None;
        self.job_ratio = 0.0;
        self.job_phase = JobPhase::Upload;
        self.refresh_file_browser();
    }

    pub(crate) fn has_active_job(&self) -> bool {
        self.job.is_some()
    }

    /// Drain worker events and fold them into UI state. All mutation
    /// happens here on the UI thread.
    pub(crate) fn poll_job(&mut self) {
        let updates = match &self.job {
            Some(job) => job.drain(),
            None => return,
        };
        for update in updates {
            match update {
                JobUpdate::Progress { phase, ratio } => {
                    self.job_phase = phase;
                    self.job_ratio = ratio;
                }
                JobUpdate::Finished(outcome) => {
                    self.job = None;
                    self.upload_step = match &outcome {
                        JobOutcome::Completed => UploadStep::Complete,
                        JobOutcome::Cancelled => UploadStep::Cancelled,
                        JobOutcome::Failed(_) => UploadStep::Failed,
                    };
                    match &outcome {
                        JobOutcome::Completed => {
                            self.job_ratio = 1.0;
                            self.set_status("Statement processed successfully");
                        }
                        JobOutcome::Cancelled => self.set_status("Upload cancelled"),
                        JobOutcome::Failed(reason) => {
                            self.set_status(format!("Upload failed: {reason}"));
                        }
                    }
                    self.job_outcome = Some(outcome);
                }
            }
        }
    }

    // ── File browser ──────────────────────────────────────────

    pub(crate) fn refresh_file_browser(&mut self) {
        let mut entries: Vec<PathBuf> = Vec::new();

        if let Some(parent) = self.file_browser_path.parent() {
            entries.push(parent.to_path_buf());
        }

        if let Ok(read_dir) = std::fs::read_dir(&self.file_browser_path) {
            let is_hidden = |p: &PathBuf| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with('.'))
            };

            let all: Vec<PathBuf> = read_dir
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    (self.file_browser_show_hidden || !is_hidden(p))
                        && (p.is_dir()
                            || p.extension()
                                .and_then(|e| e.to_str())
                                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf")))
                })
                .collect();

            // Dirs first, then files, each sorted alphabetically
            let mut dirs: Vec<PathBuf> = all.iter().filter(|p| p.is_dir()).cloned().collect();
            let mut files: Vec<PathBuf> = all.iter().filter(|p| !p.is_dir()).cloned().collect();
            dirs.sort();
            files.sort();
            entries.extend(dirs);
            entries.extend(files);
        }

        self.file_browser_entries = entries;
        self.file_browser_cursor = ListCursor::default();
        self.file_browser_filter.clear();
        self.file_browser_input_focused = false;
    }

    /// Indices into `file_browser_entries` that pass the type-to-filter
    /// text. The parent (`..`) entry always passes.
    pub(crate) fn file_browser_filtered(&self) -> Vec<usize> {
        if self.file_browser_filter.is_empty() {
            return (0..self.file_browser_entries.len()).collect();
        }
        let filter = self.file_browser_filter.to_ascii_lowercase();
        self.file_browser_entries
            .iter()
            .enumerate()
            .filter(|(_, path)| {
                if Some(path.as_path()) == self.file_browser_path.parent() {
                    return true;
                }
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|name| name.to_ascii_lowercase().contains(&filter))
            })
            .map(|(i, _)| i)
            .collect()
    }
}
