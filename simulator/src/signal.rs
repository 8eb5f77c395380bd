//! Synthetic sensor readings.

/// Every Nth reading simulates an unavailable sensor (negative value).
const DROPOUT_EVERY: u32 = 37;

/// Value the sampler reports when the sensor did not answer.
const NO_READING: f32 = -1.0;

/// Slowly drifting temperature-like signal with a faster ripple on top.
pub fn sensor_reading(
    t: f32,
    sample: u32,
) -> f32 {
    if sample % DROPOUT_EVERY == DROPOUT_EVERY - 1 {
        return NO_READING;
    }

    let drift = fake_signal(t, 18.0, 26.0, 0.05);
    let ripple = fake_signal(t, -0.6, 0.6, 1.3);
    (drift + ripple).max(0.0)
}

fn fake_signal(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
