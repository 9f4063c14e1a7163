//! Agent - A playable character in the reference catalog
//!
//! Agents are static reference data. They are built once when the
//! catalog is assembled and never change afterwards.

/// Unique identifier for an Agent (e.g. `"jett"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Agent - static reference entry
///
/// `role` is kept as a plain string: the set of roles is small but open,
/// and filtering compares it verbatim.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Unique identifier (Entity identity)
    id: AgentId,
    /// Display name
    name: String,
    /// Role label ("Duelist", "Initiator", ...)
    role: String,
    /// Short flavour text
    description: String,
    /// Ability names, in the order they are bound in game
    abilities: Vec<String>,
    /// Portrait image reference
    image_url: String,
}

impl Agent {
    /// Create a new Agent
    pub fn new(
        id: AgentId,
        name: impl Into<String>,
        role: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            description: description.into(),
            abilities: Vec::new(),
            image_url: String::new(),
        }
    }

    /// Builder: add abilities
    pub fn with_abilities<I, S>(mut self, abilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abilities.extend(abilities.into_iter().map(Into::into));
        self
    }

    /// Builder: set image reference
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn abilities(&self) -> &[String] {
        &self.abilities
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}

impl PartialEq for Agent {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Agent {}
