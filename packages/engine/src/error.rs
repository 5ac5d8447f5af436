//! Error types

/// A result record violates one of its structural invariants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("totalCorrect ({correct}) exceeds totalAttempts ({attempts})")]
    CorrectExceedsAttempts { correct: u32, attempts: u32 },
    #[error("hits ({hits}) + misses ({misses}) != totalTargets ({targets})")]
    TargetCountMismatch { hits: u32, misses: u32, targets: u32 },
    #[error("{times} reaction times recorded for {hits} hits")]
    ReactionTimeCountMismatch { times: usize, hits: u32 },
    #[error("falseAlarms ({false_alarms}) exceeds totalDistractors ({distractors})")]
    FalseAlarmsExceedDistractors { false_alarms: u32, distractors: u32 },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A tracker method was called in a state that does not allow it
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,
    #[error("no sequence awaiting an answer")]
    NoPendingSequence,
    #[error("a sequence is already awaiting an answer")]
    SequencePending,
    #[error("a stimulus window is still open")]
    WindowOpen,
    #[error("stimuli remain to be shown")]
    NotFinished,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("game error: {0}")]
    Game(#[from] GameError),
}
