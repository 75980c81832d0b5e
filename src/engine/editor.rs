use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::models::Budget;

/// Gate for the amount field, checked against the whole would-be value:
/// digits with at most one decimal point. Rejected keystrokes are
/// swallowed, not reported.
static AMOUNT_INPUT: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").ok());

fn amount_input_ok(value: &str) -> bool {
    AMOUNT_INPUT.as_ref().is_some_and(|re| re.is_match(value))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum EditorMode {
    Create,
    Edit { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorField {
    Category,
    Amount,
}

/// Modal form for creating or editing a budget. The editor owns the draft
/// text only; committing a validated draft to the collection is the
/// store's job, and cancelling simply drops the editor.
#[derive(Debug, Clone)]
pub(crate) struct BudgetEditor {
    pub(crate) mode: EditorMode,
    pub(crate) category: String,
    pub(crate) amount: String,
    pub(crate) focus: EditorField,
    pub(crate) error: Option<String>,
}

impl BudgetEditor {
    /// Open in create mode with an empty form.
    pub(crate) fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            category: String::new(),
            amount: String::new(),
            focus: EditorField::Category,
            error: None,
        }
    }

    /// Open in edit mode, pre-filled from the existing budget.
    pub(crate) fn edit(budget: &Budget) -> Self {
        Self {
            mode: EditorMode::Edit {
                id: budget.id.clone(),
            },
            category: budget.category.clone(),
            amount: budget.amount.to_string(),
            focus: EditorField::Category,
            error: None,
        }
    }

    pub(crate) fn is_edit(&self) -> bool {
        matches!(self.mode, EditorMode::Edit { .. })
    }

    pub(crate) fn title(&self) -> &'static str {
        if self.is_edit() {
            "Edit Budget"
        } else {
            "Add Budget"
        }
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EditorField::Category => EditorField::Amount,
            EditorField::Amount => EditorField::Category,
        };
    }

    /// Type one character into the focused field.
    pub(crate) fn push_char(&mut self, c: char) {
        self.error = None;
        match self.focus {
            EditorField::Category => self.category.push(c),
            EditorField::Amount => {
                let mut candidate = self.amount.clone();
                candidate.push(c);
                if amount_input_ok(&candidate) {
                    self.amount = candidate;
                }
            }
        }
    }

    pub(crate) fn backspace(&mut self) {
        self.error = None;
        match self.focus {
            EditorField::Category => {
                self.category.pop();
            }
            EditorField::Amount => {
                self.amount.pop();
            }
        }
    }

    /// Continuous validation: trimmed category present and amount a
    /// positive number. Drives the save affordance.
    pub(crate) fn is_valid(&self) -> bool {
        !self.category.trim().is_empty()
            && parse_amount(&self.amount).is_some_and(|a| a > Decimal::ZERO)
    }

    /// Validate and extract the draft as (category, amount). On failure
    /// the inline message is recorded, None comes back, and the form stays
    /// open untouched.
    pub(crate) fn submit(&mut self) -> Option<(String, Decimal)> {
        let category = self.category.trim();
        if category.is_empty() {
            self.error = Some("Please enter a category name".into());
            return None;
        }
        match parse_amount(&self.amount) {
            Some(amount) if amount > Decimal::ZERO => Some((category.to_string(), amount)),
            _ => {
                self.error = Some("Please enter a valid amount".into());
                None
            }
        }
    }
}

/// Parse the amount field, accepting anything the keystroke gate can
/// produce, including a bare leading or trailing dot.
fn parse_amount(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    let mut normalized = String::with_capacity(trimmed.len() + 1);
    if trimmed.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(trimmed);
    if normalized.ends_with('.') {
        normalized.push('0');
    }
    normalized.parse::<Decimal>().ok()
}
