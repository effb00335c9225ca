//! Movement domain: critically damped smoothing toward a moving target.

/// Lower bound on the smoothing time so `omega` stays finite.
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Move `current` toward `target` like a critically damped spring.
///
/// `velocity` is the caller-owned accumulator carried between calls; it must
/// start at zero. The result never overshoots `target`.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Pade-style approximation of exp(-omega * dt).
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        // Clamped exactly onto the target, so the accumulator settles.
        *velocity = 0.0;
    }

    output
}
