//! ADSR envelope rendering.
//!
//! This module renders an Attack-Decay-Sustain-Release amplitude curve
//! over a fixed number of samples, for shaping a one-shot tone.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// ADSR envelope parameters.
///
/// Segment times are in seconds; `sustain` is the level held between the
/// decay and release segments. The three timed segments must fit strictly
/// inside the tone duration so the sustain segment keeps a positive length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level (0.0 to 1.0).
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.1,
            decay: 0.1,
            sustain: 0.7,
            release: 0.3,
        }
    }
}

impl Envelope {
    /// Creates new envelope parameters.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Validates the envelope against the total tone duration.
    ///
    /// Segment times must be finite and non-negative, the sustain level
    /// must be in [0, 1], and `attack + decay + release` must be strictly
    /// less than `duration`. Out-of-range values are rejected, never
    /// clamped.
    pub fn validate(&self, duration: f64) -> SynthResult<()> {
        for (name, value) in [
            ("attack", self.attack),
            ("decay", self.decay),
            ("release", self.release),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SynthError::invalid_envelope(format!(
                    "{} time {} must be finite and non-negative",
                    name, value
                )));
            }
        }

        if !self.sustain.is_finite() || !(0.0..=1.0).contains(&self.sustain) {
            return Err(SynthError::invalid_envelope(format!(
                "sustain level {} outside [0, 1]",
                self.sustain
            )));
        }

        let shaped = self.attack + self.decay + self.release;
        if shaped >= duration {
            return Err(SynthError::invalid_envelope(format!(
                "attack + decay + release ({} s) must be shorter than the duration ({} s)",
                shaped, duration
            )));
        }

        Ok(())
    }

    /// Renders the envelope curve over `num_samples` samples.
    ///
    /// Each timed segment spans `round(seconds * sample_rate)` samples:
    /// a linear ramp 0 -> 1, a linear ramp 1 -> sustain, a constant
    /// sustain plateau, and a linear ramp sustain -> 0. Ramp endpoints
    /// are inclusive, so a positive attack starts the curve at exactly 0
    /// and a positive release ends it at exactly 0.
    ///
    /// Fails if the rounded segment counts leave no room for the sustain
    /// plateau; the curve is never silently truncated.
    pub fn render(&self, sample_rate: u32, num_samples: usize) -> SynthResult<Vec<f64>> {
        let sr = sample_rate as f64;
        let attack_samples = (self.attack * sr).round() as usize;
        let decay_samples = (self.decay * sr).round() as usize;
        let release_samples = (self.release * sr).round() as usize;

        let shaped = attack_samples + decay_samples + release_samples;
        if shaped >= num_samples {
            return Err(SynthError::invalid_envelope(format!(
                "segments cover {} of {} samples, leaving no sustain",
                shaped, num_samples
            )));
        }
        let sustain_samples = num_samples - shaped;

        let mut curve = Vec::with_capacity(num_samples);
        curve.extend(ramp(0.0, 1.0, attack_samples));
        curve.extend(ramp(1.0, self.sustain, decay_samples));
        curve.extend(std::iter::repeat(self.sustain).take(sustain_samples));
        curve.extend(ramp(self.sustain, 0.0, release_samples));

        Ok(curve)
    }
}

/// Evenly spaced values from `start` to `end`, endpoints inclusive.
///
/// The final value is pinned to `end` so ramps land exactly on their
/// target level regardless of rounding in the intermediate steps.
fn ramp(start: f64, end: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (len - 1) as f64;
            let mut values: Vec<f64> = (0..len).map(|i| start + step * i as f64).collect();
            values[len - 1] = end;
            values
        }
    }
}
