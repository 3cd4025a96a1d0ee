//! Tightening trace payload decoding primitives.
//!
//! A tightening trace is the angle/torque sample sequence recorded over one
//! fastening cycle of an EC screwdriver. Tools transmit each channel as a
//! base64 payload of little-endian signed 16-bit counts; dividing a count by
//! the channel's scale divisor recovers the physical value (radians or
//! newton-meters).
//!
//! This crate is intentionally small and I/O-free so front-ends can consume
//! the payload format without pulling in runtime concerns.

#![deny(static_mut_refs)]

pub mod error;

pub use error::{TraceFormatError, TraceResult};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use tracing::debug;

/// Scale divisor converting raw angle counts into radians.
pub const ANGLE_SCALE: u32 = 10_000;
/// Scale divisor converting raw torque counts into newton-meters.
pub const TORQUE_SCALE: u32 = 100_000;

/// Physical channel of a tightening trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceChannel {
    /// Rotation angle, in radians.
    Angle,
    /// Fastening torque, in newton-meters.
    Torque,
}

impl TraceChannel {
    /// Scale divisor for this channel's raw counts.
    pub fn scale(self) -> u32 {
        match self {
            TraceChannel::Angle => ANGLE_SCALE,
            TraceChannel::Torque => TORQUE_SCALE,
        }
    }

    /// Unit suffix for decoded values.
    pub fn unit(self) -> &'static str {
        match self {
            TraceChannel::Angle => "rad",
            TraceChannel::Torque => "Nm",
        }
    }

    /// Human-readable channel label used by front-ends.
    pub fn label(self) -> &'static str {
        match self {
            TraceChannel::Angle => "Angle",
            TraceChannel::Torque => "Torque",
        }
    }
}

/// Decode a base64 payload into raw little-endian i16 counts.
///
/// Sample order follows byte order in the payload.
///
/// # Errors
///
/// Returns [`TraceFormatError::Base64`] when the payload is not valid base64
/// and [`TraceFormatError::OddLength`] when the decoded byte length cannot be
/// split into whole 2-byte samples.
pub fn decode_raw_samples(payload: &str) -> TraceResult<Vec<i16>> {
    let raw = STANDARD.decode(payload)?;
    if !raw.len().is_multiple_of(2) {
        return Err(TraceFormatError::OddLength { len: raw.len() });
    }

    let samples: Vec<i16> = raw
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    debug!(bytes = raw.len(), samples = samples.len(), "decoded trace payload");
    Ok(samples)
}

/// Encode raw counts into a base64 payload (standard alphabet, padded).
pub fn encode_raw_samples(samples: &[i16]) -> String {
    let mut raw = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        raw.extend_from_slice(&sample.to_le_bytes());
    }
    STANDARD.encode(raw)
}

/// Convert one raw count into its physical value.
///
/// `scale` must be a positive divisor; division happens in f64 so the result
/// keeps full IEEE-754 precision (no integer division).
pub fn scale_sample(raw: i16, scale: u32) -> f64 {
    f64::from(raw) / f64::from(scale)
}

/// Decode a base64 payload into physical values using `scale`.
///
/// # Errors
///
/// Propagates the payload errors of [`decode_raw_samples`].
pub fn decode_scaled_samples(payload: &str, scale: u32) -> TraceResult<Vec<f64>> {
    Ok(decode_raw_samples(payload)?
        .into_iter()
        .map(|raw| scale_sample(raw, scale))
        .collect())
}

/// Decode one channel of a trace using the channel's own scale divisor.
///
/// # Errors
///
/// Propagates the payload errors of [`decode_raw_samples`].
pub fn decode_channel(payload: &str, channel: TraceChannel) -> TraceResult<Vec<f64>> {
    decode_scaled_samples(payload, channel.scale())
}
