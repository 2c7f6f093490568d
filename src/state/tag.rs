/// Document tags used to name converted images
///
/// A tag names the document type inside an employee folder, so a scan in
/// `EmployeeFolder/` tagged `Photo_ID` becomes `EmployeeFolder_Photo_ID.jpg`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    EmployeePhoto,
    PhotoId,
    ReferralLetter,
    ProofOfBankAccount,
    DrugFreeCard,
    Osha10,
    Osha30,
    FirstAidCpr,
    /// Free-text label asked for at conversion time
    Other,
}

impl Tag {
    /// All tags in display order
    pub const ALL: [Tag; 9] = [
        Tag::EmployeePhoto,
        Tag::PhotoId,
        Tag::ReferralLetter,
        Tag::ProofOfBankAccount,
        Tag::DrugFreeCard,
        Tag::Osha10,
        Tag::Osha30,
        Tag::FirstAidCpr,
        Tag::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tag::EmployeePhoto => "Employee_Photo",
            Tag::PhotoId => "Photo_ID",
            Tag::ReferralLetter => "Referral_Letter",
            Tag::ProofOfBankAccount => "Proof_of_Bank_Account",
            Tag::DrugFreeCard => "Drug_Free_Card",
            Tag::Osha10 => "OSHA_10",
            Tag::Osha30 => "OSHA_30",
            Tag::FirstAidCpr => "First_Aid/CPR",
            Tag::Other => "Other",
        }
    }

    /// Whether the label has to be typed in by the user
    pub fn needs_prompt(self) -> bool {
        self == Tag::Other
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Make a label safe to embed in a file name.
///
/// Path separators and characters rejected by common filesystems become `-`.
/// Returns `None` for a label that is empty after trimming.
pub fn sanitize_label(label: &str) -> Option<String> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(
        trimmed
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
                c if c.is_control() => '-',
                c => c,
            })
            .collect(),
    )
}

/// Label to name output files after, once the user answered the prompt.
///
/// `None` means the prompt was cancelled. Cancelling and submitting an empty
/// answer both convert untagged.
pub fn prompt_label(answer: Option<&str>) -> Option<String> {
    answer.and_then(sanitize_label)
}

/// What a conversion should do about its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelRequest {
    /// Convert right away with this label (`None` = untagged)
    Ready(Option<String>),
    /// The name prompt was opened; convert once it is answered
    Prompt,
}

/// Active tag plus the name prompt shown for [`Tag::Other`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagState {
    active: Option<Tag>,
    prompt: Option<String>,
}

impl TagState {
    pub fn active(&self) -> Option<Tag> {
        self.active
    }

    /// Text typed so far, while the prompt is open
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn is_prompting(&self) -> bool {
        self.prompt.is_some()
    }

    /// Switch the active tag. An open prompt is abandoned without converting,
    /// since its answer was asked for under the previous tag.
    /// Returns whether a prompt was abandoned.
    pub fn select(&mut self, tag: Tag) -> bool {
        self.active = Some(tag);
        self.prompt.take().is_some()
    }

    /// Start a conversion: hand back the label, or open the prompt when the
    /// active tag needs one
    pub fn request_label(&mut self) -> LabelRequest {
        match self.active {
            Some(tag) if tag.needs_prompt() => {
                self.prompt = Some(String::new());
                LabelRequest::Prompt
            }
            tag => LabelRequest::Ready(tag.map(|tag| tag.label().to_string())),
        }
    }

    /// Ignored unless the prompt is open
    pub fn set_input(&mut self, input: String) {
        if let Some(prompt) = self.prompt.as_mut() {
            *prompt = input;
        }
    }

    /// Close the prompt with its current text. `None` if no prompt was open.
    pub fn submit(&mut self) -> Option<LabelRequest> {
        let input = self.prompt.take()?;
        Some(LabelRequest::Ready(prompt_label(Some(&input))))
    }

    /// Close the prompt without an answer. `None` if no prompt was open.
    pub fn cancel(&mut self) -> Option<LabelRequest> {
        self.prompt.take()?;
        Some(LabelRequest::Ready(prompt_label(None)))
    }
}
