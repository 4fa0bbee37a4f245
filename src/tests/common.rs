use schema::{MoveCategory, MoveContribution, PokemonType};

/// A builder for rosters used by coverage tests.
///
/// # Example
/// ```ignore
/// let roster = TestRosterBuilder::new()
///     .member()
///     .with_move(PokemonType::Fire, MoveCategory::Physical)
///     .member()
///     .build();
/// ```
#[derive(Default)]
pub struct TestRosterBuilder {
    members: Vec<Vec<MoveContribution>>,
}

impl TestRosterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new roster member with no moves.
    pub fn member(mut self) -> Self {
        self.members.push(Vec::new());
        self
    }

    /// Adds a move to the most recently started member.
    pub fn with_move(self, move_type: PokemonType, category: MoveCategory) -> Self {
        self.with_contribution(MoveContribution::new(move_type, category))
    }

    /// Adds a move with an unvalidated type string to the most recently started member.
    pub fn with_raw_move(self, move_type: &str, category: MoveCategory) -> Self {
        self.with_contribution(MoveContribution::from_raw(move_type, category))
    }

    fn with_contribution(mut self, contribution: MoveContribution) -> Self {
        match self.members.last_mut() {
            Some(moves) => moves.push(contribution),
            None => panic!("call member() before adding moves"),
        }
        self
    }

    pub fn build(self) -> Vec<Vec<MoveContribution>> {
        self.members
    }
}
