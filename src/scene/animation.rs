use glam::Vec3;

use crate::options::SceneOptions;

/// Bobbing motion of the test cube around an anchor point.
///
/// Phase advances by `delta_ms / period_ms`; the offset from the anchor is
/// `(sin t, sin 2t, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeAnimation {
    phase: f32,
    period_ms: f32,
    anchor: Vec3,
}

impl CubeAnimation {
    /// Start at phase zero. A non-positive period is treated as 1 ms.
    #[must_use]
    pub fn new(anchor: Vec3, period_ms: f32) -> Self {
        Self {
            phase: 0.0,
            period_ms: if period_ms > 0.0 { period_ms } else { 1.0 },
            anchor,
        }
    }

    /// Animation configured from the `[scene]` options.
    #[must_use]
    pub fn from_options(options: &SceneOptions) -> Self {
        Self::new(Vec3::from_array(options.anchor), options.period_ms)
    }

    /// Advance the phase.
    pub fn advance(&mut self, delta_ms: u32) {
        self.phase += delta_ms as f32 / self.period_ms;
    }

    /// Current phase in radians.
    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Current world position of the cube center.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.anchor
            + Vec3::new(self.phase.sin(), (self.phase * 2.0).sin(), 0.0)
    }
}

impl Default for CubeAnimation {
    fn default() -> Self {
        Self::from_options(&SceneOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_anchor() {
        let anim = CubeAnimation::default();
        assert_eq!(anim.position(), Vec3::new(0.0, 1.5, -5.0));
    }

    #[test]
    fn phase_is_linear_in_time() {
        let mut anim = CubeAnimation::default();
        anim.advance(400);
        assert!((anim.phase() - 1.0).abs() < 1e-6);
        let expected = Vec3::new(1.0_f32.sin(), 2.0_f32.sin() + 1.5, -5.0);
        assert!(anim.position().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn zero_period_does_not_divide_by_zero() {
        let mut anim = CubeAnimation::new(Vec3::ZERO, 0.0);
        anim.advance(3);
        assert!(anim.phase().is_finite());
    }
}
