//! Weapon - A purchasable weapon in the reference catalog

/// Category label for main weapons
pub const PRIMARY: &str = "Primary";
/// Category label for pistols
pub const SIDEARM: &str = "Sidearm";

/// Unique identifier for a Weapon (e.g. `"vandal"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WeaponId(String);

impl WeaponId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for WeaponId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weapon - static reference entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weapon {
    id: WeaponId,
    name: String,
    /// [`PRIMARY`] or [`SIDEARM`]
    category: String,
    /// Credits needed to buy it
    cost: u32,
    damage: u32,
    accuracy: u32,
    image_url: String,
}

impl Weapon {
    /// Create a new Weapon with zeroed ratings
    pub fn new(id: WeaponId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            cost: 0,
            damage: 0,
            accuracy: 0,
            image_url: String::new(),
        }
    }

    /// Builder: set cost
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    /// Builder: set damage and accuracy ratings
    pub fn with_ratings(mut self, damage: u32, accuracy: u32) -> Self {
        self.damage = damage;
        self.accuracy = accuracy;
        self
    }

    /// Builder: set image reference
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> &WeaponId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn damage(&self) -> u32 {
        self.damage
    }

    pub fn accuracy(&self) -> u32 {
        self.accuracy
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }
}
