//! The chopsticks rules engine.
//!
//! `GameState` owns the match and is its only mutator:
//! - Legality predicates (`can_attack`, `can_split`, `is_valid_attack`)
//! - Move resolution (`execute_move`)
//! - Turn advancement and game-over detection
//!
//! Everything is synchronous and deterministic given `(state, move)`.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, instrument, warn};

use super::error::{MoveEffect, MoveError, MoveOutcome, SnapshotError, TurnEnd};
use crate::core::{
    Hand, HandSide, HandSides, Move, MoveRecord, Phase, Player, PlayerId, PlayerPair, PlayerView,
    RawMove, RulesConfig, Snapshot, FINGER_MODULUS,
};

/// Legal moves in one position. At most four attacks plus two splits.
pub type MoveList = SmallVec<[Move; 6]>;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Both players out of hands at once.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Authoritative match state plus the rules that mutate it.
///
/// ## Example
///
/// ```
/// use chopsticks::core::{HandSide, Move, PlayerId};
/// use chopsticks::rules::GameState;
///
/// let mut game = GameState::new();
/// assert!(game.can_attack(HandSide::Left));
///
/// let outcome = game.execute_move(Move::attack(HandSide::Left, HandSide::Right)).unwrap();
/// assert_eq!(outcome.mover, PlayerId::One);
/// assert_eq!(game.player(PlayerId::Two).right.fingers, 2);
/// assert_eq!(game.current_player_id(), PlayerId::Two);
/// ```
#[derive(Clone, Debug)]
pub struct GameState {
    config: RulesConfig,
    players: PlayerPair<Player>,
    current: PlayerId,
    phase: Phase,

    /// Starts at 1, bumped on every accepted move.
    turn_number: u32,

    history: Vector<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh match with the default rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Fresh match: every hand at one finger, player 1 to move.
    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            config,
            players: PlayerPair::default(),
            current: PlayerId::One,
            phase: Phase::Playing,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Rebuild a match from a snapshot.
    ///
    /// Hands are checked against the finger range and the dead-hands-hold-0
    /// rule, and the phase must agree with the hands: `GameOver` exactly
    /// when a player has no alive hand. The `is_current` flags are ignored
    /// in favour of `current_player`. History starts empty.
    pub fn restore(snapshot: &Snapshot, config: RulesConfig) -> Result<Self, SnapshotError> {
        let players = PlayerPair::new(|id| snapshot.player(id).player());

        for (id, player) in players.iter() {
            for side in HandSide::BOTH {
                let hand = player.hand(side);
                if hand.fingers >= FINGER_MODULUS {
                    return Err(SnapshotError::FingersOutOfRange {
                        player: id,
                        side,
                        fingers: hand.fingers,
                    });
                }
                if !hand.alive && hand.fingers != 0 {
                    return Err(SnapshotError::DeadHandWithFingers {
                        player: id,
                        side,
                        fingers: hand.fingers,
                    });
                }
            }
            if snapshot.phase == Phase::Playing && !player.has_alive_hand() {
                return Err(SnapshotError::PlayingWithoutHands(id));
            }
        }
        if snapshot.phase == Phase::GameOver && players.iter().all(|(_, p)| p.has_alive_hand()) {
            return Err(SnapshotError::GameOverWithoutElimination);
        }
        if snapshot.turn_number == 0 {
            return Err(SnapshotError::TurnNumberZero);
        }

        Ok(Self {
            config,
            players,
            current: snapshot.current_player,
            phase: snapshot.phase,
            turn_number: snapshot.turn_number,
            history: Vector::new(),
        })
    }

    /// Decode a bincode snapshot and rebuild the match from it.
    pub fn restore_bytes(bytes: &[u8], config: RulesConfig) -> Result<Self, SnapshotError> {
        let snapshot = Snapshot::from_bytes(bytes)?;
        Self::restore(&snapshot, config)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Seat of the player to move.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The player waiting.
    #[must_use]
    pub fn opponent_player(&self) -> &Player {
        &self.players[self.current.opponent()]
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Accepted moves, oldest first. Empty when history is switched off.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Alive hand slots of a player, `[left, right]` filtered.
    #[must_use]
    pub fn alive_hands(&self, id: PlayerId) -> HandSides {
        self.players[id].alive_hands()
    }

    /// Dead hand slots of a player, `[left, right]` filtered.
    #[must_use]
    pub fn dead_hands(&self, id: PlayerId) -> HandSides {
        self.players[id].dead_hands()
    }

    // === Legality ===

    /// The current player's `hand` is alive with fingers to spend.
    #[must_use]
    pub fn can_attack(&self, hand: HandSide) -> bool {
        self.current_player().hand(hand).is_armed()
    }

    /// The current player's `hand` is alive with a nonzero even count and
    /// the player has a dead hand to revive.
    #[must_use]
    pub fn can_split(&self, hand: HandSide) -> bool {
        let player = self.current_player();
        player.hand(hand).is_splittable() && player.has_dead_hand()
    }

    /// Which of the current player's hands a split of `hand` would revive.
    ///
    /// A dead `hand` names itself, though `can_split` never lets that case
    /// through. Otherwise the other hand if it is dead, else `None`.
    #[must_use]
    pub fn split_target(&self, hand: HandSide) -> Option<HandSide> {
        let player = self.current_player();
        if !player.hand(hand).alive {
            return Some(hand);
        }
        let other = hand.other();
        (!player.hand(other).alive).then_some(other)
    }

    /// The current player's `source` is armed and the opponent's `target`
    /// is alive. Finger values beyond that do not matter.
    #[must_use]
    pub fn is_valid_attack(&self, source: HandSide, target: HandSide) -> bool {
        self.current_player().hand(source).is_armed() && self.opponent_player().hand(target).alive
    }

    /// The current player can make at least one move.
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        HandSide::BOTH
            .into_iter()
            .any(|hand| self.can_attack(hand) || self.can_split(hand))
    }

    /// Every move `execute_move` would accept right now.
    ///
    /// Attacks in `[left, right] x [left, right]` order, then splits.
    /// Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        if self.phase != Phase::Playing {
            return moves;
        }

        for source in HandSide::BOTH {
            for target in HandSide::BOTH {
                if self.is_valid_attack(source, target) {
                    moves.push(Move::attack(source, target));
                }
            }
        }
        for source in HandSide::BOTH {
            if self.can_split(source) {
                moves.push(Move::split(source));
            }
        }

        moves
    }

    // === Moves ===

    /// Validate and apply a move for the current player.
    ///
    /// On success the turn ends (see `end_turn`). On error nothing changed.
    #[instrument(skip(self), fields(player = %self.current, turn = self.turn_number))]
    pub fn execute_move(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        let mover = self.current;

        let effect = match self.resolve(mover, mv) {
            Ok(effect) => effect,
            Err(err) => {
                debug!(%err, "move rejected");
                return Err(err);
            }
        };
        debug!(?effect, "move accepted");

        if self.config.record_history {
            self.history.push_back(MoveRecord::new(mover, mv, self.turn_number));
        }
        self.turn_number = self.turn_number.saturating_add(1);

        let turn_end = self.end_turn();

        Ok(MoveOutcome {
            mover,
            action: mv,
            effect,
            turn_end,
        })
    }

    /// Convert an untyped payload and execute it.
    pub fn execute_raw(&mut self, raw: &RawMove) -> Result<MoveOutcome, MoveError> {
        let mv = Move::try_from(raw).inspect_err(|err| debug!(%err, "payload rejected"))?;
        self.execute_move(mv)
    }

    /// Check preconditions, then mutate. Every check runs before the first write.
    fn resolve(&mut self, mover: PlayerId, mv: Move) -> Result<MoveEffect, MoveError> {
        if self.phase != Phase::Playing {
            return Err(MoveError::WrongPhase);
        }

        match mv {
            Move::Attack { source, target } => {
                let target = target.ok_or(MoveError::MissingTarget)?;
                if !self.is_valid_attack(source, target) {
                    return Err(MoveError::InvalidAttack);
                }

                let incoming = self.players[mover].hand(source).fingers;
                let hand = self.players[mover.opponent()].hand_mut(target);
                let killed = hand.receive(incoming);

                Ok(MoveEffect::Attacked {
                    target,
                    fingers: hand.fingers,
                    killed,
                })
            }
            Move::Split { source } => {
                if !self.can_split(source) {
                    return Err(MoveError::InvalidSplit);
                }
                let revived = self.split_target(source).ok_or(MoveError::NoSplitTarget)?;

                let player = &mut self.players[mover];
                let half = player.hand(source).fingers / 2;
                player.hand_mut(source).fingers = half;
                *player.hand_mut(revived) = Hand::new(half, true);

                Ok(MoveEffect::Split {
                    revived,
                    fingers: half,
                })
            }
        }
    }

    /// Pass the turn after an accepted move.
    ///
    /// 1. Stop if the game is over.
    /// 2. Hand the turn to the opponent.
    /// 3. If the opponent cannot move, hand it straight back. This happens
    ///    once only; a mover left without moves is not treated specially.
    fn end_turn(&mut self) -> TurnEnd {
        if self.check_game_over() {
            let result = self.result().unwrap_or(GameResult::Draw);
            debug!(?result, "game over");
            return TurnEnd::GameOver(result);
        }

        let mover = self.current;
        self.current = mover.opponent();
        if self.has_legal_move() {
            debug!(next = %self.current, "turn passed");
            return TurnEnd::Passed(self.current);
        }

        debug!(stuck = %self.current, "opponent has no legal move, turn returns");
        self.current = mover;

        // The mover's source hand stays armed after any accepted move.
        if !self.has_legal_move() {
            warn!("neither player can move");
        }

        TurnEnd::OpponentStuck
    }

    // === Game Over ===

    /// Set `GameOver` if either player has no alive hand.
    ///
    /// Returns whether the match is over.
    pub fn check_game_over(&mut self) -> bool {
        let eliminated = PlayerId::ALL
            .into_iter()
            .any(|id| !self.players[id].has_alive_hand());

        if eliminated {
            self.phase = Phase::GameOver;
        }
        self.phase == Phase::GameOver
    }

    /// The player still holding an alive hand while the other holds none.
    ///
    /// `None` while both have hands, and `None` if both are out.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        let one = self.players[PlayerId::One].has_alive_hand();
        let two = self.players[PlayerId::Two].has_alive_hand();

        match (one, two) {
            (true, false) => Some(PlayerId::One),
            (false, true) => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// Final result once the phase is `GameOver`.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if self.phase != Phase::GameOver {
            return None;
        }
        Some(self.winner().map_or(GameResult::Draw, GameResult::Winner))
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    // === Lifecycle ===

    /// Back to the starting position. Config is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
        debug!("match reset");
    }

    /// Owned copy of both players, the player to move and the phase.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player1: PlayerView::new(&self.players[PlayerId::One], self.current == PlayerId::One),
            player2: PlayerView::new(&self.players[PlayerId::Two], self.current == PlayerId::Two),
            current_player: self.current,
            phase: self.phase,
            turn_number: self.turn_number,
        }
    }
}
