use std::collections::BTreeMap;

use crate::foundation::core::{Rgba8, Vec2};

/// Interpolation contract for animatable value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Rgba8 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// A single visual property of a scene element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrValue {
    /// Scalar such as a width, an opacity or a coordinate.
    Number(f64),
    /// 2D position or translation.
    Point(Vec2),
    /// Fill or stroke color.
    Color(Rgba8),
    /// Label text. Switches discretely.
    Text(String),
}

impl AttrValue {
    /// Scalar payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Point payload, if this is a point.
    pub fn as_point(&self) -> Option<Vec2> {
        match self {
            Self::Point(v) => Some(*v),
            _ => None,
        }
    }

    /// Color payload, if this is a color.
    pub fn as_color(&self) -> Option<Rgba8> {
        match self {
            Self::Color(v) => Some(*v),
            _ => None,
        }
    }

    /// Text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Return `false` when a numeric component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Number(v) => v.is_finite(),
            Self::Point(p) => p.x.is_finite() && p.y.is_finite(),
            Self::Color(_) | Self::Text(_) => true,
        }
    }
}

impl Lerp for AttrValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Number(x), Self::Number(y)) => Self::Number(<f64 as Lerp>::lerp(x, y, t)),
            (Self::Point(x), Self::Point(y)) => Self::Point(<Vec2 as Lerp>::lerp(x, y, t)),
            (Self::Color(x), Self::Color(y)) => Self::Color(<Rgba8 as Lerp>::lerp(x, y, t)),
            // text and mismatched kinds hold until the end
            _ => {
                if t >= 1.0 {
                    b.clone()
                } else {
                    a.clone()
                }
            }
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Vec2> for AttrValue {
    fn from(v: Vec2) -> Self {
        Self::Point(v)
    }
}

impl From<Rgba8> for AttrValue {
    fn from(v: Rgba8) -> Self {
        Self::Color(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// Named attributes of a scene element, ordered by name.
pub type Attributes = BTreeMap<String, AttrValue>;

/// Build an [`Attributes`] map from `(name, value)` pairs.
pub fn attributes<S, V>(pairs: impl IntoIterator<Item = (S, V)>) -> Attributes
where
    S: Into<String>,
    V: Into<AttrValue>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// How a tween turns `(from, to, eased progress)` into a value.
#[derive(Clone, Copy, Debug, Default)]
pub enum Interpolator {
    /// Component-wise [`Lerp`] on [`AttrValue`].
    #[default]
    Auto,
    /// Hold `from` until the transition completes.
    Discrete,
    /// Caller-supplied interpolation.
    Custom(fn(&AttrValue, &AttrValue, f64) -> AttrValue),
}

impl Interpolator {
    /// Value at eased progress `t`.
    pub fn interpolate(self, from: &AttrValue, to: &AttrValue, t: f64) -> AttrValue {
        match self {
            Self::Auto => AttrValue::lerp(from, to, t),
            Self::Discrete => {
                if t >= 1.0 {
                    to.clone()
                } else {
                    from.clone()
                }
            }
            Self::Custom(f) => f(from, to, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
