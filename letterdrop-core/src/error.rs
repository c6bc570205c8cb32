use thiserror::Error;

/// Input rejected before any network request is built.
///
/// These are the only errors the generation and order flows return; remote
/// failures are absorbed by the local fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please describe your situation")]
    EmptySituation,

    #[error("please enter your name")]
    MissingSenderName,

    #[error("please enter your mailing address")]
    MissingSenderAddress,

    #[error("generate a letter before ordering a mailing")]
    NoLetter,
}
