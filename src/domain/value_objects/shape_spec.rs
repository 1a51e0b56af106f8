//! ShapeSpec value object - a shape described as text
//!
//! Grammar (kind names are case-insensitive):
//!
//! ```text
//! square:<length>
//! rectangle:<width>x<height>     (alias: rect)
//! circle:<radius>
//! cube:<edge>
//! none                           (alias: noshape)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::Dimension;
use crate::domain::entities::{Circle, Cube, NoShape, Rectangle, Square};
use crate::domain::ports::{Shape, ThreeDimensionalShape};
use crate::error::{ShapeError, ShapeResult};

/// Kind of shape, without its dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Rectangle,
    Circle,
    Cube,
    NoShape,
}

impl ShapeKind {
    /// Canonical spec keyword
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Cube => "cube",
            ShapeKind::NoShape => "none",
        }
    }

    /// Whether the kind also has a volume
    pub fn is_three_dimensional(&self) -> bool {
        matches!(self, ShapeKind::Cube)
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(ShapeKind::Square),
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            "circle" => Ok(ShapeKind::Circle),
            "cube" => Ok(ShapeKind::Cube),
            "none" | "noshape" => Ok(ShapeKind::NoShape),
            _ => Err(ShapeError::UnknownShape {
                name: s.trim().to_string(),
            }),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed, validated shape description
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeSpec {
    Square {
        length: Dimension,
    },
    Rectangle {
        width: Dimension,
        height: Dimension,
    },
    Circle {
        radius: Dimension,
    },
    Cube {
        edge: Dimension,
    },
    #[serde(rename = "none")]
    NoShape,
}

impl ShapeSpec {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeSpec::Square { .. } => ShapeKind::Square,
            ShapeSpec::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeSpec::Circle { .. } => ShapeKind::Circle,
            ShapeSpec::Cube { .. } => ShapeKind::Cube,
            ShapeSpec::NoShape => ShapeKind::NoShape,
        }
    }

    /// Build the area-bearing entity
    pub fn to_shape(&self) -> Box<dyn Shape> {
        match *self {
            ShapeSpec::Square { length } => Box::new(Square::new(length.get())),
            ShapeSpec::Rectangle { width, height } => {
                Box::new(Rectangle::new(width.get(), height.get()))
            }
            ShapeSpec::Circle { radius } => Box::new(Circle::new(radius.get())),
            ShapeSpec::Cube { edge } => Box::new(Cube::new(edge.get())),
            ShapeSpec::NoShape => Box::new(NoShape::new()),
        }
    }

    /// Build the volume-bearing entity, for kinds that have one
    pub fn to_solid(&self) -> Option<Box<dyn ThreeDimensionalShape>> {
        match *self {
            ShapeSpec::Cube { edge } => Some(Box::new(Cube::new(edge.get()))),
            _ => None,
        }
    }
}

impl FromStr for ShapeSpec {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind_str, args) = match s.split_once(':') {
            Some((kind, args)) => (kind, Some(args)),
            None => (s, None),
        };
        let kind: ShapeKind = kind_str.parse()?;

        let missing = || ShapeError::InvalidDimension {
            input: s.trim().to_string(),
            reason: format!("{} needs a dimension (e.g. {})", kind, example(kind)),
        };

        match kind {
            ShapeKind::NoShape => match args.map(str::trim) {
                None | Some("") => Ok(ShapeSpec::NoShape),
                Some(extra) => Err(ShapeError::InvalidDimension {
                    input: extra.to_string(),
                    reason: "none takes no dimensions".to_string(),
                }),
            },
            ShapeKind::Square => Ok(ShapeSpec::Square {
                length: args.ok_or_else(missing)?.parse()?,
            }),
            ShapeKind::Circle => Ok(ShapeSpec::Circle {
                radius: args.ok_or_else(missing)?.parse()?,
            }),
            ShapeKind::Cube => Ok(ShapeSpec::Cube {
                edge: args.ok_or_else(missing)?.parse()?,
            }),
            ShapeKind::Rectangle => {
                let args = args.ok_or_else(missing)?;
                let (width, height) = args
                    .split_once(&['x', 'X'][..])
                    .ok_or_else(|| ShapeError::InvalidDimension {
                        input: args.trim().to_string(),
                        reason: "expected <width>x<height>".to_string(),
                    })?;
                Ok(ShapeSpec::Rectangle {
                    width: width.parse()?,
                    height: height.parse()?,
                })
            }
        }
    }
}

fn example(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Square => "square:10",
        ShapeKind::Rectangle => "rectangle:10x20",
        ShapeKind::Circle => "circle:12",
        ShapeKind::Cube => "cube:3",
        ShapeKind::NoShape => "none",
    }
}

impl fmt::Display for ShapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeSpec::Square { length } => write!(f, "square:{}", length),
            ShapeSpec::Rectangle { width, height } => write!(f, "rectangle:{}x{}", width, height),
            ShapeSpec::Circle { radius } => write!(f, "circle:{}", radius),
            ShapeSpec::Cube { edge } => write!(f, "cube:{}", edge),
            ShapeSpec::NoShape => f.write_str("none"),
        }
    }
}

/// Parse a list of specs, stopping at the first invalid one
pub fn parse_all<S: AsRef<str>>(inputs: &[S]) -> ShapeResult<Vec<ShapeSpec>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
