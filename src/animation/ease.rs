use std::f64::consts::PI;

use crate::foundation::error::{ZoomError, ZoomResult};

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;
const BACK_C3: f64 = BACK_C1 + 1.0;
const ELASTIC_PERIOD: f64 = 0.5;
const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Timing curve used to distribute the render duration across frames.
///
/// Serialized and parsed using the lowercase ids returned by [`EasingMode::id`]
/// (`linear`, `inquad`, ..., `inoutbounce`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingMode {
    /// Constant rate.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Cubic ease-in.
    InCubic,
    /// Quartic ease-in.
    InQuart,
    /// Quintic ease-in.
    InQuint,
    /// Sinusoidal ease-in.
    InSine,
    /// Exponential ease-in.
    InExpo,
    /// Circular ease-in.
    InCirc,
    /// Elastic ease-in (overshoots below 0).
    InElastic,
    /// Back ease-in (overshoots below 0).
    InBack,
    /// Bouncing ease-in.
    InBounce,
    /// Quadratic ease-out.
    OutQuad,
    /// Cubic ease-out.
    OutCubic,
    /// Quartic ease-out.
    OutQuart,
    /// Quintic ease-out.
    OutQuint,
    /// Sinusoidal ease-out.
    OutSine,
    /// Exponential ease-out.
    OutExpo,
    /// Circular ease-out.
    OutCirc,
    /// Elastic ease-out (overshoots above 1).
    OutElastic,
    /// Back ease-out (overshoots above 1).
    OutBack,
    /// Bouncing ease-out.
    OutBounce,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Quartic ease-in/out.
    InOutQuart,
    /// Quintic ease-in/out.
    InOutQuint,
    /// Sinusoidal ease-in/out.
    InOutSine,
    /// Exponential ease-in/out.
    InOutExpo,
    /// Circular ease-in/out.
    InOutCirc,
    /// Elastic ease-in/out (overshoots on both sides).
    InOutElastic,
    /// Back ease-in/out (overshoots on both sides).
    InOutBack,
    /// Bouncing ease-in/out.
    InOutBounce,
}

impl EasingMode {
    /// Every mode, in declaration order.
    pub const ALL: [Self; 31] = [
        Self::Linear,
        Self::InQuad,
        Self::InCubic,
        Self::InQuart,
        Self::InQuint,
        Self::InSine,
        Self::InExpo,
        Self::InCirc,
        Self::InElastic,
        Self::InBack,
        Self::InBounce,
        Self::OutQuad,
        Self::OutCubic,
        Self::OutQuart,
        Self::OutQuint,
        Self::OutSine,
        Self::OutExpo,
        Self::OutCirc,
        Self::OutElastic,
        Self::OutBack,
        Self::OutBounce,
        Self::InOutQuad,
        Self::InOutCubic,
        Self::InOutQuart,
        Self::InOutQuint,
        Self::InOutSine,
        Self::InOutExpo,
        Self::InOutCirc,
        Self::InOutElastic,
        Self::InOutBack,
        Self::InOutBounce,
    ];

    /// Apply this easing curve to normalized progress `t`.
    ///
    /// `t` is clamped to `[0, 1]` and the endpoints are exact: `0 -> 0`, `1 -> 1`.
    /// Elastic and Back curves may return values outside `[0, 1]` in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        (self.curve())(t)
    }

    /// Curve implementation backing this mode.
    pub fn curve(self) -> fn(f64) -> f64 {
        match self {
            Self::Linear => linear,
            Self::InQuad => in_quad,
            Self::InCubic => in_cubic,
            Self::InQuart => in_quart,
            Self::InQuint => in_quint,
            Self::InSine => in_sine,
            Self::InExpo => in_expo,
            Self::InCirc => in_circ,
            Self::InElastic => in_elastic,
            Self::InBack => in_back,
            Self::InBounce => in_bounce,
            Self::OutQuad => out_quad,
            Self::OutCubic => out_cubic,
            Self::OutQuart => out_quart,
            Self::OutQuint => out_quint,
            Self::OutSine => out_sine,
            Self::OutExpo => out_expo,
            Self::OutCirc => out_circ,
            Self::OutElastic => out_elastic,
            Self::OutBack => out_back,
            Self::OutBounce => out_bounce,
            Self::InOutQuad => in_out_quad,
            Self::InOutCubic => in_out_cubic,
            Self::InOutQuart => in_out_quart,
            Self::InOutQuint => in_out_quint,
            Self::InOutSine => in_out_sine,
            Self::InOutExpo => in_out_expo,
            Self::InOutCirc => in_out_circ,
            Self::InOutElastic => in_out_elastic,
            Self::InOutBack => in_out_back,
            Self::InOutBounce => in_out_bounce,
        }
    }

    /// Return `true` when the curve never decreases over `[0, 1]`.
    pub fn is_monotonic(self) -> bool {
        !matches!(
            self,
            Self::InElastic
                | Self::OutElastic
                | Self::InOutElastic
                | Self::InBack
                | Self::OutBack
                | Self::InOutBack
                | Self::InBounce
                | Self::OutBounce
                | Self::InOutBounce
        )
    }

    /// Return `true` when intermediate outputs can leave `[0, 1]`.
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Self::InElastic
                | Self::OutElastic
                | Self::InOutElastic
                | Self::InBack
                | Self::OutBack
                | Self::InOutBack
        )
    }

    /// Lowercase identifier used on the command line and in serialized settings.
    pub fn id(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "inquad",
            Self::InCubic => "incubic",
            Self::InQuart => "inquart",
            Self::InQuint => "inquint",
            Self::InSine => "insine",
            Self::InExpo => "inexpo",
            Self::InCirc => "incirc",
            Self::InElastic => "inelastic",
            Self::InBack => "inback",
            Self::InBounce => "inbounce",
            Self::OutQuad => "outquad",
            Self::OutCubic => "outcubic",
            Self::OutQuart => "outquart",
            Self::OutQuint => "outquint",
            Self::OutSine => "outsine",
            Self::OutExpo => "outexpo",
            Self::OutCirc => "outcirc",
            Self::OutElastic => "outelastic",
            Self::OutBack => "outback",
            Self::OutBounce => "outbounce",
            Self::InOutQuad => "inoutquad",
            Self::InOutCubic => "inoutcubic",
            Self::InOutQuart => "inoutquart",
            Self::InOutQuint => "inoutquint",
            Self::InOutSine => "inoutsine",
            Self::InOutExpo => "inoutexpo",
            Self::InOutCirc => "inoutcirc",
            Self::InOutElastic => "inoutelastic",
            Self::InOutBack => "inoutback",
            Self::InOutBounce => "inoutbounce",
        }
    }
}

impl std::fmt::Display for EasingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for EasingMode {
    type Err = ZoomError;

    fn from_str(s: &str) -> ZoomResult<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.id() == wanted)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|m| m.id()).collect();
                ZoomError::usage(format!(
                    "unknown easing mode '{s}' (expected one of: {})",
                    valid.join(", ")
                ))
            })
    }
}

fn linear(t: f64) -> f64 {
    t
}

fn in_quad(t: f64) -> f64 {
    t * t
}

fn out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

fn in_cubic(t: f64) -> f64 {
    t * t * t
}

fn out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

fn in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn in_quart(t: f64) -> f64 {
    t.powi(4)
}

fn out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

fn in_out_quart(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

fn in_quint(t: f64) -> f64 {
    t.powi(5)
}

fn out_quint(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(5)
}

fn in_out_quint(t: f64) -> f64 {
    if t < 0.5 {
        16.0 * t.powi(5)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(5) / 2.0
    }
}

fn in_sine(t: f64) -> f64 {
    1.0 - (t * PI / 2.0).cos()
}

fn out_sine(t: f64) -> f64 {
    (t * PI / 2.0).sin()
}

fn in_out_sine(t: f64) -> f64 {
    -((PI * t).cos() - 1.0) / 2.0
}

fn in_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * t - 10.0)
    }
}

fn out_expo(t: f64) -> f64 {
    if t == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * t)
    }
}

fn in_out_expo(t: f64) -> f64 {
    if t == 0.0 {
        0.0
    } else if t == 1.0 {
        1.0
    } else if t < 0.5 {
        2f64.powf(20.0 * t - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
    }
}

fn in_circ(t: f64) -> f64 {
    1.0 - (1.0 - t * t).max(0.0).sqrt()
}

fn out_circ(t: f64) -> f64 {
    (1.0 - (t - 1.0).powi(2)).max(0.0).sqrt()
}

fn in_out_circ(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - (1.0 - (2.0 * t).powi(2)).max(0.0).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * t + 2.0).powi(2)).max(0.0).sqrt() + 1.0) / 2.0
    }
}

fn elastic_sine(t: f64) -> f64 {
    ((t - ELASTIC_PERIOD / 4.0) * (2.0 * PI / ELASTIC_PERIOD)).sin()
}

fn in_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let t = t - 1.0;
    -(2f64.powf(10.0 * t) * elastic_sine(t))
}

fn out_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    2f64.powf(-10.0 * t) * elastic_sine(t) + 1.0
}

fn in_out_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let t = 2.0 * t - 1.0;
    if t < 0.0 {
        -0.5 * 2f64.powf(10.0 * t) * elastic_sine(t)
    } else {
        0.5 * 2f64.powf(-10.0 * t) * elastic_sine(t) + 1.0
    }
}

fn in_back(t: f64) -> f64 {
    BACK_C3 * t * t * t - BACK_C1 * t * t
}

fn out_back(t: f64) -> f64 {
    1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
}

fn in_out_back(t: f64) -> f64 {
    if t < 0.5 {
        ((2.0 * t).powi(2) * ((BACK_C2 + 1.0) * 2.0 * t - BACK_C2)) / 2.0
    } else {
        ((2.0 * t - 2.0).powi(2) * ((BACK_C2 + 1.0) * (t * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
    }
}

fn out_bounce(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

fn in_bounce(t: f64) -> f64 {
    1.0 - out_bounce(1.0 - t)
}

fn in_out_bounce(t: f64) -> f64 {
    if t < 0.5 {
        (1.0 - out_bounce(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + out_bounce(2.0 * t - 1.0)) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
