//! Swing domain: movement states.

/// Lifecycle of the player between anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwingState {
    /// Parked on anchor 0 until the first key press
    #[default]
    Start,
    /// Orbiting the current anchor
    Swinging,
    /// Launch frame; immediately becomes `Flying`
    Jumping,
    /// Ballistic flight under gravity
    Flying,
    /// Bind frame on a new anchor; immediately becomes `Swinging`
    Landing,
}

impl std::fmt::Display for SwingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SwingState::Start => "Start",
            SwingState::Swinging => "Swinging",
            SwingState::Jumping => "Jumping",
            SwingState::Flying => "Flying",
            SwingState::Landing => "Landing",
        };
        f.write_str(name)
    }
}
