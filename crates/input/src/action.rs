use snake_common::Direction;

/// A high-level action produced by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Request a heading change. The game may reject it.
    Turn(Direction),
    /// Show or hide the stats overlay.
    ToggleHud,
    /// Close the game.
    Quit,
}

/// Physical keys the game cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    F1,
    Escape,
}

/// Key to action table.
#[derive(Debug, Clone)]
pub struct Bindings {
    table: Vec<(Key, Action)>,
}

impl Default for Bindings {
    /// WASD and arrows steer, F1 toggles the overlay, Escape quits.
    fn default() -> Self {
        use Direction::*;
        Self {
            table: vec![
                (Key::W, Action::Turn(Up)),
                (Key::ArrowUp, Action::Turn(Up)),
                (Key::S, Action::Turn(Down)),
                (Key::ArrowDown, Action::Turn(Down)),
                (Key::A, Action::Turn(Left)),
                (Key::ArrowLeft, Action::Turn(Left)),
                (Key::D, Action::Turn(Right)),
                (Key::ArrowRight, Action::Turn(Right)),
                (Key::F1, Action::ToggleHud),
                (Key::Escape, Action::Quit),
            ],
        }
    }
}

impl Bindings {
    /// Rebind `key`. Any previous binding for that key is replaced.
    pub fn bind(&mut self, key: Key, action: Action) {
        self.table.retain(|(k, _)| *k != key);
        self.table.push((key, action));
        tracing::debug!(?key, ?action, "key bound");
    }

    /// Action for a key press, if the key is bound.
    pub fn action_for(&self, key: Key) -> Option<Action> {
        self.table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, action)| *action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_steer() {
        let b = Bindings::default();
        assert_eq!(b.action_for(Key::W), Some(Action::Turn(Direction::Up)));
        assert_eq!(b.action_for(Key::ArrowUp), Some(Action::Turn(Direction::Up)));
        assert_eq!(b.action_for(Key::S), Some(Action::Turn(Direction::Down)));
        assert_eq!(b.action_for(Key::ArrowDown), Some(Action::Turn(Direction::Down)));
        assert_eq!(b.action_for(Key::A), Some(Action::Turn(Direction::Left)));
        assert_eq!(b.action_for(Key::ArrowLeft), Some(Action::Turn(Direction::Left)));
        assert_eq!(b.action_for(Key::D), Some(Action::Turn(Direction::Right)));
        assert_eq!(
            b.action_for(Key::ArrowRight),
            Some(Action::Turn(Direction::Right))
        );
    }

    #[test]
    fn hud_and_quit_bindings() {
        let b = Bindings::default();
        assert_eq!(b.action_for(Key::F1), Some(Action::ToggleHud));
        assert_eq!(b.action_for(Key::Escape), Some(Action::Quit));
    }

    #[test]
    fn rebinding_replaces_previous_action() {
        let mut b = Bindings::default();
        b.bind(Key::W, Action::Quit);
        assert_eq!(b.action_for(Key::W), Some(Action::Quit));
        assert_eq!(b.action_for(Key::ArrowUp), Some(Action::Turn(Direction::Up)));
    }
}
