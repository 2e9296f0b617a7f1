//! Courtroom prompt construction

/// Parameters handed to the authoring collaborator
#[derive(Debug, Clone)]
pub struct PromptParameters {
    /// Flavor of the generated case
    pub theme: String,
    /// How many evidence items to request
    pub evidence_slots: usize,
}

impl PromptParameters {
    pub fn new(theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            evidence_slots: 3,
        }
    }

    pub fn with_evidence_slots(mut self, slots: usize) -> Self {
        self.evidence_slots = slots;
        self
    }

    /// Render the generation prompt for this request
    pub fn render(&self) -> String {
        format!(
            "Generate a funny, dramatic court case for \"Reddit Jury\".\n\
             Create {} pieces of specific evidence:\n\
             1. Physical Evidence (e.g. A suspicious screenshot)\n\
             2. Witness Testimony (e.g. A neighbor's comment)\n\
             3. Character Note (e.g. The defendant's post history)\n\
             \n\
             Requirements:\n\
             - The evidence should be slightly contradictory or ambiguous.\n\
             - Theme: {}.\n\
             \n\
             Return as strictly JSON.",
            self.evidence_slots, self.theme
        )
    }
}

impl Default for PromptParameters {
    fn default() -> Self {
        Self::new("Reddit tropes (mods, karma, cake day, sub rules)")
    }
}
