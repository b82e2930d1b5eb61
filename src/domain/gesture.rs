// Gesture labels, playable moves and the round outcome table.

/// Classified hand shape for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    /// No playable shape was read; the frame takes no round action.
    Unknown,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
            Self::Unknown => "Unknown",
        }
    }
}

/// A gesture that can take part in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rock => "Rock",
            Self::Paper => "Paper",
            Self::Scissors => "Scissors",
        }
    }

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
}

impl TryFrom<Gesture> for Move {
    type Error = Gesture;

    fn try_from(gesture: Gesture) -> Result<Self, Self::Error> {
        match gesture {
            Gesture::Rock => Ok(Move::Rock),
            Gesture::Paper => Ok(Move::Paper),
            Gesture::Scissors => Ok(Move::Scissors),
            Gesture::Unknown => Err(gesture),
        }
    }
}

impl From<Move> for Gesture {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Rock => Gesture::Rock,
            Move::Paper => Gesture::Paper,
            Move::Scissors => Gesture::Scissors,
        }
    }
}

/// Result of one resolved round, from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlayerWin => "player_win",
            Self::ComputerWin => "computer_win",
            Self::Tie => "tie",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::PlayerWin => "You win this round!",
            Self::ComputerWin => "Computer wins this round!",
            Self::Tie => "It's a tie!",
        }
    }
}

/// Resolves a player move against a computer move.
pub fn resolve(player: Move, computer: Move) -> Outcome {
    if player == computer {
        Outcome::Tie
    } else if player.beats() == computer {
        Outcome::PlayerWin
    } else {
        Outcome::ComputerWin
    }
}

/// Side that won the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchWinner {
    Player,
    Computer,
}

impl MatchWinner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Computer => "computer",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Player => "Congratulations, You Won the Game!",
            Self::Computer => "Sorry, Computer Won the Game.",
        }
    }
}
