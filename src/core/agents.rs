//! Agent directory filtering and contact lookup.

/// Attributes of one agent card (`data-name`, `data-specialty`,
/// `data-languages`, `data-phone`, `data-email`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentProfile {
    pub name: String,
    pub specialty: String,
    /// Comma-separated, as written in the attribute.
    pub languages: String,
    pub phone: String,
    pub email: String,
}

impl AgentProfile {
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.split(',').map(str::trim).any(|l| l == language)
    }
}

/// Agent search box and dropdowns. Blank fields are unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentFilterCriteria {
    pub query: String,
    pub language: String,
    pub specialty: String,
}

impl AgentFilterCriteria {
    pub fn new(
        query: impl Into<String>,
        language: impl Into<String>,
        specialty: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            language: language.into(),
            specialty: specialty.into(),
        }
    }
}

/// Whether an agent card stays visible under the criteria.
pub fn matches(agent: &AgentProfile, criteria: &AgentFilterCriteria) -> bool {
    let query = criteria.query.trim().to_lowercase();
    if !query.is_empty()
        && !(agent.name.to_lowercase().contains(&query)
            || agent.specialty.to_lowercase().contains(&query))
    {
        return false;
    }
    if !criteria.language.is_empty() && !agent.speaks(&criteria.language) {
        return false;
    }
    if !criteria.specialty.is_empty() && agent.specialty != criteria.specialty {
        return false;
    }
    true
}

/// First agent whose name equals `name` exactly.
pub fn find_agent<'a, I>(agents: I, name: &str) -> Option<&'a AgentProfile>
where
    I: IntoIterator<Item = &'a AgentProfile>,
{
    agents.into_iter().find(|a| a.name == name)
}

/// Heading and contact line shown in the agent-contact dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSummary {
    pub agent_name: String,
    pub heading: String,
    pub info: String,
}

impl ContactSummary {
    pub fn for_agent(agent: &AgentProfile) -> Self {
        Self {
            agent_name: agent.name.clone(),
            heading: format!("Contact {}", agent.name),
            info: format!("Phone: {} • Email: {}", agent.phone, agent.email),
        }
    }
}

/// Confirmation shown after the (simulated) contact form send.
pub fn confirmation_message(agent_name: &str, visitor_email: &str) -> String {
    format!("Message sent to {agent_name}. We'll connect with you at {visitor_email}.")
}
