use self::direction::Direction;

pub mod direction;
pub mod sign;

/// Contract of every block that carries an orientation.
///
/// `data` is the canonical field, `direction` is derived from it on every
/// mutation. The two are never allowed to drift apart: a mutator either
/// leaves the block untouched or leaves both fields consistent.
pub trait DirectionalBlock {
    fn id(&self) -> u8;

    /// The orientation byte as stored by the world format.
    fn data(&self) -> u8;

    /// The orientation currently implied by `data`.
    fn direction(&self) -> Direction;

    /// Validates that `data` decodes under the current mode before storing
    /// it. On failure the block is left unchanged.
    fn set_data(&mut self, data: u8) -> eyre::Result<()>;

    /// Fails (does not clamp) for directions illegal under the current mode.
    fn set_direction(&mut self, direction: Direction) -> eyre::Result<()>;

    /// Advances the orientation by one discrete step of the active mode's
    /// granularity.
    ///
    /// # Panics
    /// Panics if the current state is outside the mode's closed legal set,
    /// e.g. after an unrepaired mode switch.
    fn turn(&mut self, clockwise: bool);
}
