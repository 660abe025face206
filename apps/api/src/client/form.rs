//! Profile form state machine.
//!
//! Status moves `Idle → Submitting → (Succeeded | Failed)` and drops back to
//! `Idle` on the next edit or retry. The active input is either a URL or the
//! manual fields; the other mode's last input is parked until switched back.

use thiserror::Error;

use crate::client::clipboard::{Clipboard, ClipboardError};
use crate::optimizer::models::{AnalyzeRequest, OptimizationResult, ProfileInput};

pub const COPY_SUCCESS: &str = "Content copied to clipboard";
pub const COPY_FAILURE: &str = "Failed to copy to clipboard";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Enter a profile URL or at least one profile field")]
    Blank,

    #[error("An analysis is already in progress")]
    InFlight,
}

/// Manual-entry fields. Both lists always hold at least one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualFields {
    pub headline: String,
    pub summary: String,
    experience: Vec<String>,
    skills: Vec<String>,
}

impl Default for ManualFields {
    fn default() -> Self {
        Self {
            headline: String::new(),
            summary: String::new(),
            experience: vec![String::new()],
            skills: vec![String::new()],
        }
    }
}

impl ManualFields {
    pub fn items(&self, list: ListField) -> &[String] {
        match list {
            ListField::Experience => &self.experience,
            ListField::Skills => &self.skills,
        }
    }

    fn items_mut(&mut self, list: ListField) -> &mut Vec<String> {
        match list {
            ListField::Experience => &mut self.experience,
            ListField::Skills => &mut self.skills,
        }
    }

    fn is_blank(&self) -> bool {
        self.headline.trim().is_empty()
            && self.summary.trim().is_empty()
            && self.experience.iter().all(|e| e.trim().is_empty())
            && self.skills.iter().all(|s| s.trim().is_empty())
    }

    fn to_profile(&self) -> ProfileInput {
        ProfileInput {
            headline: self.headline.clone(),
            summary: self.summary.clone(),
            experience: self.experience.clone(),
            skills: self.skills.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Experience,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Url,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormInput {
    Url(String),
    Manual(ManualFields),
}

impl FormInput {
    pub fn kind(&self) -> InputKind {
        match self {
            FormInput::Url(_) => InputKind::Url,
            FormInput::Manual(_) => InputKind::Manual,
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            FormInput::Url(url) => url.trim().is_empty(),
            FormInput::Manual(fields) => fields.is_blank(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A dismissible message shown over the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: "Success".to_string(),
            description: description.into(),
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSection {
    Headline,
    Keywords,
    Experience,
    Summary,
}

impl ResultSection {
    pub const ALL: [ResultSection; 4] = [
        ResultSection::Headline,
        ResultSection::Keywords,
        ResultSection::Experience,
        ResultSection::Summary,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ResultSection::Headline => "Optimized Headline",
            ResultSection::Keywords => "Recommended Keywords",
            ResultSection::Experience => "Experience Bullet Points",
            ResultSection::Summary => "Profile Summary",
        }
    }

    /// Text placed on the clipboard for this section.
    pub fn copy_text(self, result: &OptimizationResult) -> String {
        match self {
            ResultSection::Headline => result.headline.clone(),
            ResultSection::Keywords => result.keywords.join(", "),
            ResultSection::Experience => result.experience.join("\n"),
            ResultSection::Summary => result.summary.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileForm {
    input: FormInput,
    /// The inactive mode's input, always the other variant.
    parked: FormInput,
    status: FormStatus,
    result: Option<OptimizationResult>,
    notification: Option<Notification>,
    copied: Option<ResultSection>,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileForm {
    /// A fresh form in URL mode.
    pub fn new() -> Self {
        Self {
            input: FormInput::Url(String::new()),
            parked: FormInput::Manual(ManualFields::default()),
            status: FormStatus::Idle,
            result: None,
            notification: None,
            copied: None,
        }
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn result(&self) -> Option<&OptimizationResult> {
        self.result.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn copied_section(&self) -> Option<ResultSection> {
        self.copied
    }

    // ────────────────────────────────────────────────────────────────────────
    // Editing
    // ────────────────────────────────────────────────────────────────────────

    /// Switches input mode. Each mode keeps what was last entered in it.
    pub fn select_input(&mut self, kind: InputKind) {
        if self.input.kind() == kind {
            return;
        }
        std::mem::swap(&mut self.input, &mut self.parked);
        self.touch();
    }

    /// Sets the URL. Ignored outside URL mode.
    pub fn set_url(&mut self, url: impl Into<String>) {
        if let FormInput::Url(current) = &mut self.input {
            *current = url.into();
            self.touch();
        }
    }

    pub fn set_headline(&mut self, headline: impl Into<String>) {
        if let Some(fields) = self.manual_mut() {
            fields.headline = headline.into();
            self.touch();
        }
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        if let Some(fields) = self.manual_mut() {
            fields.summary = summary.into();
            self.touch();
        }
    }

    /// Overwrites one slot. Out-of-range indexes are ignored.
    pub fn set_item(&mut self, list: ListField, index: usize, value: impl Into<String>) {
        let updated = self
            .manual_mut()
            .and_then(|fields| fields.items_mut(list).get_mut(index))
            .map(|slot| *slot = value.into())
            .is_some();
        if updated {
            self.touch();
        }
    }

    /// Appends an empty slot.
    pub fn add_item(&mut self, list: ListField) {
        if let Some(fields) = self.manual_mut() {
            fields.items_mut(list).push(String::new());
            self.touch();
        }
    }

    /// Removes a slot; removing the last one leaves a single empty slot.
    pub fn remove_item(&mut self, list: ListField, index: usize) {
        let Some(fields) = self.manual_mut() else {
            return;
        };
        let items = fields.items_mut(list);
        if index >= items.len() {
            return;
        }
        items.remove(index);
        if items.is_empty() {
            items.push(String::new());
        }
        self.touch();
    }

    fn manual_mut(&mut self) -> Option<&mut ManualFields> {
        match &mut self.input {
            FormInput::Manual(fields) => Some(fields),
            FormInput::Url(_) => None,
        }
    }

    /// Any edit returns a finished form to idle. The last result stays visible.
    fn touch(&mut self) {
        if self.status != FormStatus::Submitting {
            self.status = FormStatus::Idle;
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Submission
    // ────────────────────────────────────────────────────────────────────────

    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Submitting && !self.input.is_blank()
    }

    /// The request body for the active input mode.
    pub fn to_request(&self) -> AnalyzeRequest {
        match &self.input {
            FormInput::Url(url) => AnalyzeRequest::from_url(url.clone()),
            FormInput::Manual(fields) => AnalyzeRequest::from_profile(fields.to_profile()),
        }
    }

    /// Enters `Submitting` and returns the body to send. The previous result
    /// is discarded.
    pub fn begin_submit(&mut self) -> Result<AnalyzeRequest, FormError> {
        if self.status == FormStatus::Submitting {
            return Err(FormError::InFlight);
        }
        if self.input.is_blank() {
            return Err(FormError::Blank);
        }
        self.status = FormStatus::Submitting;
        self.result = None;
        self.copied = None;
        Ok(self.to_request())
    }

    /// Records the outcome of the in-flight request. Ignored when nothing is
    /// in flight.
    pub fn complete(&mut self, outcome: Result<OptimizationResult, String>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.status = FormStatus::Succeeded;
            }
            Err(message) => {
                self.notification = Some(Notification::error(message));
                self.status = FormStatus::Failed;
            }
        }
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Copies one result section. Failure only raises a notification; the
    /// result itself is untouched.
    pub fn copy_section(
        &mut self,
        section: ResultSection,
        clipboard: &dyn Clipboard,
    ) -> Result<(), ClipboardError> {
        let Some(result) = &self.result else {
            return Ok(());
        };
        match clipboard.copy_text(&section.copy_text(result)) {
            Ok(()) => {
                self.copied = Some(section);
                self.notification = Some(Notification::success(COPY_SUCCESS));
                Ok(())
            }
            Err(e) => {
                self.notification = Some(Notification::error(COPY_FAILURE));
                Err(e)
            }
        }
    }

    /// Clears the "copied" marker on a section.
    pub fn clear_copied(&mut self) {
        self.copied = None;
    }
}
