//! Additive tone synthesis.
//!
//! Builds a bowed-string-like tone by summing sine partials at integer
//! multiples of a base frequency, shaping the sum with an ADSR envelope,
//! and normalizing the result to a fixed peak amplitude.

use std::collections::HashSet;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::error::{SynthError, SynthResult};

/// Peak absolute amplitude of every synthesized waveform.
///
/// Normalizing below full scale keeps headroom ahead of the 16-bit PCM
/// conversion regardless of the harmonic content.
pub const PEAK_TARGET: f64 = 0.8;

/// A single sine partial at an integer multiple of the base frequency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Harmonic {
    /// Multiple of the base frequency (1 = fundamental).
    pub index: u32,
    /// Linear amplitude relative to full scale, in (0, 1].
    pub amplitude: f64,
}

impl Harmonic {
    /// Creates a new harmonic.
    pub fn new(index: u32, amplitude: f64) -> Self {
        Self { index, amplitude }
    }
}

/// Parameters for one synthesized tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToneParams {
    /// Base frequency in Hz.
    pub base_freq: f64,
    /// Tone duration in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Harmonic partials to sum.
    pub harmonics: Vec<Harmonic>,
    /// ADSR envelope applied to the summed signal.
    pub envelope: Envelope,
}

impl ToneParams {
    /// Creates a violin-like preset at the given base frequency.
    ///
    /// The partial table mimics a bowed string: odd harmonics strong,
    /// even harmonics present but weaker, amplitudes falling off with
    /// harmonic index. Defaults to a 2-second tone at 44.1 kHz.
    pub fn violin(base_freq: f64) -> Self {
        Self {
            base_freq,
            duration_seconds: 2.0,
            sample_rate: 44100,
            harmonics: vec![
                Harmonic::new(1, 1.0),
                Harmonic::new(2, 0.5),
                Harmonic::new(3, 0.35),
                Harmonic::new(4, 0.25),
                Harmonic::new(5, 0.2),
                Harmonic::new(6, 0.15),
                Harmonic::new(7, 0.1),
                Harmonic::new(8, 0.08),
            ],
            envelope: Envelope::default(),
        }
    }

    /// Sets the duration.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Sets the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Number of samples the tone spans.
    pub fn num_samples(&self) -> usize {
        (self.duration_seconds * self.sample_rate as f64).round() as usize
    }

    /// Validates the parameters.
    ///
    /// Frequency and duration must be positive and finite, the sample
    /// rate nonzero, harmonic indices distinct and nonzero, amplitudes
    /// in (0, 1], and the envelope must fit inside the duration. Nothing
    /// is clamped; out-of-range parameters are rejected up front.
    pub fn validate(&self) -> SynthResult<()> {
        if !self.base_freq.is_finite() || self.base_freq <= 0.0 {
            return Err(SynthError::InvalidFrequency {
                freq: self.base_freq,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(SynthError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        if self.sample_rate == 0 {
            return Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }

        let mut seen = HashSet::new();
        for harmonic in &self.harmonics {
            if harmonic.index == 0 {
                return Err(SynthError::invalid_harmonic(
                    harmonic.index,
                    "harmonic index must be positive",
                ));
            }
            if !seen.insert(harmonic.index) {
                return Err(SynthError::invalid_harmonic(
                    harmonic.index,
                    "duplicate harmonic index",
                ));
            }
            if !harmonic.amplitude.is_finite()
                || harmonic.amplitude <= 0.0
                || harmonic.amplitude > 1.0
            {
                return Err(SynthError::invalid_harmonic(
                    harmonic.index,
                    format!("amplitude {} outside (0, 1]", harmonic.amplitude),
                ));
            }
        }

        self.envelope.validate(self.duration_seconds)
    }
}

/// Synthesizes a tone from the given parameters.
///
/// The time axis has `round(duration * sample_rate)` samples spaced
/// `1 / sample_rate` apart starting at zero, endpoint excluded. Each
/// harmonic contributes `amplitude * sin(2 * pi * base_freq * index * t)`
/// to the accumulator; the sum is shaped by the envelope and normalized
/// so the peak absolute amplitude equals [`PEAK_TARGET`].
///
/// An empty harmonic list leaves the accumulator identically zero and
/// fails with [`SynthError::DegenerateSignal`].
pub fn synthesize(params: &ToneParams) -> SynthResult<Vec<f64>> {
    params.validate()?;

    let num_samples = params.num_samples();
    let dt = 1.0 / params.sample_rate as f64;
    let two_pi = 2.0 * PI;

    let mut samples = vec![0.0; num_samples];
    for harmonic in &params.harmonics {
        let freq = params.base_freq * harmonic.index as f64;
        for (i, sample) in samples.iter_mut().enumerate() {
            let t = i as f64 * dt;
            *sample += harmonic.amplitude * (two_pi * freq * t).sin();
        }
    }

    let envelope = params.envelope.render(params.sample_rate, num_samples)?;
    for (sample, env) in samples.iter_mut().zip(envelope.iter()) {
        *sample *= env;
    }

    normalize_peak(&mut samples, PEAK_TARGET)?;
    Ok(samples)
}

/// Scales the signal so its peak absolute value equals `target_peak`.
///
/// An identically zero signal has no peak to scale by and fails with
/// [`SynthError::DegenerateSignal`] instead of dividing by zero.
pub fn normalize_peak(samples: &mut [f64], target_peak: f64) -> SynthResult<()> {
    let current_peak = samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b));

    if current_peak == 0.0 {
        return Err(SynthError::DegenerateSignal);
    }

    let gain = target_peak / current_peak;
    for sample in samples.iter_mut() {
        *sample *= gain;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peak(samples: &[f64]) -> f64 {
        samples
            .iter()
            .map(|s| s.abs())
            .fold(0.0_f64, |a, b| a.max(b))
    }

    #[test]
    fn test_length_invariant() {
        let params = ToneParams::violin(440.0);
        let samples = synthesize(&params).expect("should synthesize");
        assert_eq!(samples.len(), 88200);

        let params = ToneParams::violin(440.0).with_duration(1.5);
        let samples = synthesize(&params).expect("should synthesize");
        assert_eq!(samples.len(), 66150);
    }

    #[test]
    fn test_peak_normalization() {
        let params = ToneParams::violin(440.0).with_duration(1.0);
        let samples = synthesize(&params).expect("should synthesize");
        assert!((peak(&samples) - PEAK_TARGET).abs() < 1e-6);
    }

    #[test]
    fn test_peak_normalization_single_quiet_harmonic() {
        let mut params = ToneParams::violin(220.0).with_duration(1.0);
        params.harmonics = vec![Harmonic::new(1, 0.01)];
        let samples = synthesize(&params).expect("should synthesize");
        // Normalization brings even a quiet partial up to the target.
        assert!((peak(&samples) - PEAK_TARGET).abs() < 1e-6);
    }

    #[test]
    fn test_envelope_boundaries() {
        let params = ToneParams::violin(440.0).with_duration(1.0);
        let samples = synthesize(&params).expect("should synthesize");
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[samples.len() - 1], 0.0);
    }

    #[test]
    fn test_determinism() {
        let params = ToneParams::violin(440.0).with_duration(0.8);
        let first = synthesize(&params).expect("should synthesize");
        let second = synthesize(&params).expect("should synthesize");
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_samples_finite() {
        let params = ToneParams::violin(440.0).with_duration(1.0);
        let samples = synthesize(&params).expect("should synthesize");
        assert!(samples.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_empty_harmonics_is_degenerate() {
        let mut params = ToneParams::violin(440.0);
        params.harmonics.clear();
        let err = synthesize(&params).unwrap_err();
        assert!(matches!(err, SynthError::DegenerateSignal));
    }

    #[test]
    fn test_rejects_duplicate_harmonic_index() {
        let mut params = ToneParams::violin(440.0);
        params.harmonics.push(Harmonic::new(3, 0.2));
        let err = synthesize(&params).unwrap_err();
        assert!(matches!(err, SynthError::InvalidHarmonic { index: 3, .. }));
    }

    #[test]
    fn test_rejects_zero_harmonic_index() {
        let mut params = ToneParams::violin(440.0);
        params.harmonics = vec![Harmonic::new(0, 0.5)];
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_amplitude() {
        let mut params = ToneParams::violin(440.0);
        params.harmonics = vec![Harmonic::new(1, 0.0)];
        assert!(params.validate().is_err());

        params.harmonics = vec![Harmonic::new(1, 1.5)];
        assert!(params.validate().is_err());

        params.harmonics = vec![Harmonic::new(1, f64::NAN)];
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_invalid_scalars() {
        let params = ToneParams::violin(0.0);
        assert!(matches!(
            params.validate().unwrap_err(),
            SynthError::InvalidFrequency { .. }
        ));

        let params = ToneParams::violin(440.0).with_duration(-1.0);
        assert!(matches!(
            params.validate().unwrap_err(),
            SynthError::InvalidDuration { .. }
        ));

        let params = ToneParams::violin(440.0).with_sample_rate(0);
        assert!(matches!(
            params.validate().unwrap_err(),
            SynthError::InvalidSampleRate { .. }
        ));
    }

    #[test]
    fn test_rejects_envelope_longer_than_tone() {
        // Default envelope spans 0.5 s; equal to the duration is invalid.
        let params = ToneParams::violin(440.0).with_duration(0.5);
        assert!(matches!(
            params.validate().unwrap_err(),
            SynthError::InvalidEnvelope { .. }
        ));
    }

    #[test]
    fn test_normalize_peak_scales_to_target() {
        let mut samples = vec![0.1, -0.4, 0.2];
        normalize_peak(&mut samples, 0.8).expect("should normalize");
        assert!((peak(&samples) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_peak_rejects_silence() {
        let mut samples = vec![0.0; 16];
        let err = normalize_peak(&mut samples, 0.8).unwrap_err();
        assert!(matches!(err, SynthError::DegenerateSignal));
    }

    #[test]
    fn test_params_json_round_trip() {
        let params = ToneParams::violin(440.0);
        let json = serde_json::to_string(&params).expect("should serialize");
        let parsed: ToneParams = serde_json::from_str(&json).expect("should parse");
        assert_eq!(parsed, params);
    }
}
