//! Reviewer persona registry.
//!
//! A fixed, process-wide table mapping each persona to its system prompt and
//! display metadata. Resolution is total over the closed set: an unknown or
//! missing identifier falls back to the default persona instead of failing.

use serde::Serialize;

pub mod prompts;

/// Identifier for one of the four reviewer personas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaId {
    SeniorPm,
    EngineeringLead,
    Executive,
    PmCoach,
}

/// Display metadata for a persona, served to clients building a selector.
#[derive(Debug, Clone, Serialize)]
pub struct PersonaMeta {
    pub id: PersonaId,
    pub label: &'static str,
    pub emoji: &'static str,
    pub subtitle: &'static str,
}

pub const DEFAULT_PERSONA: PersonaId = PersonaId::SeniorPm;

pub const PERSONA_LIST: [PersonaMeta; 4] = [
    PersonaMeta {
        id: PersonaId::SeniorPm,
        label: "Senior PM Review",
        emoji: "\u{1F3E2}",
        subtitle: "Feedback as if from a Staff PM at Google, Meta, or Booking.com",
    },
    PersonaMeta {
        id: PersonaId::EngineeringLead,
        label: "Engineering Lead Review",
        emoji: "\u{2699}\u{FE0F}",
        subtitle: "Feedback as if from a senior engineer deciding whether to start building",
    },
    PersonaMeta {
        id: PersonaId::Executive,
        label: "Executive Review",
        emoji: "\u{1F4CA}",
        subtitle: "Feedback as if from a CPO or investor assessing strategic impact",
    },
    PersonaMeta {
        id: PersonaId::PmCoach,
        label: "PM Coach Review",
        emoji: "\u{1F393}",
        subtitle: "Developmental feedback on your PM thinking and craft",
    },
];

impl PersonaId {
    /// Resolves an optional wire identifier to a persona.
    /// Unknown or missing identifiers resolve to the default persona.
    pub fn resolve(id: Option<&str>) -> Self {
        match id {
            Some("senior-pm") => PersonaId::SeniorPm,
            Some("engineering-lead") => PersonaId::EngineeringLead,
            Some("executive") => PersonaId::Executive,
            Some("pm-coach") => PersonaId::PmCoach,
            _ => DEFAULT_PERSONA,
        }
    }

    /// The full system prompt this persona sends to the model.
    pub fn system_prompt(self) -> &'static str {
        match self {
            PersonaId::SeniorPm => prompts::SENIOR_PM_PROMPT,
            PersonaId::EngineeringLead => prompts::ENGINEERING_LEAD_PROMPT,
            PersonaId::Executive => prompts::EXECUTIVE_PROMPT,
            PersonaId::PmCoach => prompts::PM_COACH_PROMPT,
        }
    }
}
