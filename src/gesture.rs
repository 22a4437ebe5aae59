/// What a press on the transport row asks the playhead to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportAction {
    Cut(usize),
    SetLoop { start: usize, end: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// At least one transport key is down. `first_column` is the key that opened the gesture.
    Held { first_column: usize, count: usize },
}

/// Turns transport-row presses into cuts (single tap) and loop-sets (second key while held).
#[derive(Debug, Clone, Default)]
pub struct TransportGestureTracker {
    state: GestureState,
}

impl TransportGestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn keys_held(&self) -> usize {
        match self.state {
            GestureState::Idle => 0,
            GestureState::Held { count, .. } => count,
        }
    }

    pub fn on_key(&mut self, column: usize, pressed: bool) -> Option<TransportAction> {
        use GestureState::*;

        if pressed {
            match self.state {
                Idle => {
                    self.state = Held {
                        first_column: column,
                        count: 1,
                    };
                    Some(TransportAction::Cut(column))
                }
                Held {
                    first_column,
                    count,
                } => {
                    self.state = Held {
                        first_column,
                        count: count + 1,
                    };
                    (count + 1 == 2).then_some(TransportAction::SetLoop {
                        start: first_column,
                        end: column,
                    })
                }
            }
        } else {
            self.state = match self.state {
                Idle => {
                    log::trace!("transport release at {column} with nothing held");
                    Idle
                }
                Held { count: 1, .. } => Idle,
                Held {
                    first_column,
                    count,
                } => Held {
                    first_column,
                    count: count - 1,
                },
            };
            None
        }
    }
}
