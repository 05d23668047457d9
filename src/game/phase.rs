//! file: phase.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:44:54 Sunday
//! brief:

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    Feedback,
    GameOver,
}

/// Triggers the session reacts to. Clock-driven transitions go through
/// `GameSession::tick` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    StartGame,
    SelectOption(usize),
    ReturnToMenu,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

impl Feedback {
    pub fn from_correct(correct: bool) -> Self {
        if correct {
            Feedback::Correct
        } else {
            Feedback::Wrong
        }
    }

    pub fn is_correct(self) -> bool {
        matches!(self, Feedback::Correct)
    }

    pub fn message(self) -> (&'static str, u32) {
        match self {
            Feedback::Correct => ("CORRECT!", 0x00ff00),
            Feedback::Wrong => ("WRONG!", 0xff0000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sessions_begin_at_the_menu() {
        assert_eq!(Phase::default(), Phase::Menu);
    }

    #[test]
    fn feedback_messages() {
        assert!(Feedback::from_correct(true).is_correct());
        assert!(!Feedback::from_correct(false).is_correct());
        assert_eq!(Feedback::Correct.message(), ("CORRECT!", 0x00ff00));
        assert_eq!(Feedback::Wrong.message(), ("WRONG!", 0xff0000));
    }
}
