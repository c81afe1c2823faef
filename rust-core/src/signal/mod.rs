//! Two-tone signal parameters and synthesis

pub mod params;
pub mod synth;

pub use params::{ParameterForm, SignalParameters, Tone, MAX_SAMPLES};
pub use synth::{synthesize, SampledSignal};
