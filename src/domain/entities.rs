//! Domain entities: players and teams

/// A player as loaded from the roster, prior to team assignment.
///
/// Immutable once loaded; ownership moves from the roster into exactly
/// one [`Team`] during balancing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    /// Guardian name(s), verbatim from the roster
    pub guardians: String,
    pub height_inches: u32,
    pub experienced: bool,
}

impl PlayerRecord {
    /// First name, used in letter salutations.
    ///
    /// Falls back to the full name if it contains no whitespace.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// The roster-column form of the experience flag.
    pub fn experience_label(&self) -> &'static str {
        if self.experienced {
            "YES"
        } else {
            "NO"
        }
    }
}

/// A team being assembled during balancing.
///
/// Players can only be added through [`Team::push`], which recomputes the
/// average height on every insertion. Insertion order is assignment order
/// and is preserved in all output.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    name: String,
    players: Vec<PlayerRecord>,
    average_height: f64,
}

impl Team {
    /// Create an empty team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            players: Vec::new(),
            average_height: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Players in assignment order.
    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Arithmetic mean of the current players' heights in inches.
    /// 0.0 for an empty team.
    pub fn average_height(&self) -> f64 {
        self.average_height
    }

    /// Add a player and recompute the average height.
    pub fn push(&mut self, player: PlayerRecord) {
        self.players.push(player);
        let total: u32 = self.players.iter().map(|p| p.height_inches).sum();
        self.average_height = f64::from(total) / self.players.len() as f64;
    }
}
