/// Easing functions used to map normalized transition progress.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Sinusoidal ease-in.
    InSine,
    /// Sinusoidal ease-out.
    OutSine,
    /// Sinusoidal ease-in/out.
    InOutSine,
    /// Caller-supplied easing. Not representable in JSON.
    #[serde(skip)]
    Custom(fn(f64) -> f64),
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// Built-in curves map `0 -> 0` and `1 -> 1` exactly; custom curves may overshoot.
    pub fn apply(self, t: f64) -> f64 {
        use std::f64::consts::FRAC_PI_2;

        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InSine => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - (t * FRAC_PI_2).cos()
                }
            }
            Self::OutSine => {
                if t >= 1.0 {
                    1.0
                } else {
                    (t * FRAC_PI_2).sin()
                }
            }
            Self::InOutSine => {
                if t >= 1.0 {
                    1.0
                } else {
                    (1.0 - (std::f64::consts::PI * t).cos()) / 2.0
                }
            }
            Self::Custom(f) => f(t),
        }
    }

    /// Return `true` for [`Ease::Custom`].
    pub fn is_custom(self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
