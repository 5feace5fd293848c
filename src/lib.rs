//! Overtone — single-note instrument synthesis.
//!
//! Three generators share one contract: given a validated
//! [`NoteSpec`](instrument::NoteSpec) (frequency, duration in samples,
//! sample rate), each renders a mono `Vec<f32>` of exactly the requested
//! length. [`audio::stereo`] packages the result for two-channel output.

pub mod audio;
pub mod instrument;
pub mod pitch;
pub mod signal;
