//! Domain Layer
//!
//! Pure geometry: no I/O, no formatting.
//!
//! ## Structure
//!
//! - `ports/` - Capability traits (Shape, ThreeDimensionalShape, AreaCalculator)
//! - `entities/` - Concrete shapes (Square, Rectangle, Circle, Cube, NoShape)
//! - `value_objects/` - Validated inputs (Dimension, ShapeSpec)
//! - `services/` - Aggregation (SumAreaCalculator, total_volume)
//!
//! ## Design Principles
//!
//! 1. **Small capabilities** - Area and volume are separate traits; a shape only
//!    implements what it can honestly answer
//! 2. **Immutable values** - Shapes are constructed once and never mutated
//! 3. **Ports & Adapters** - Consumers depend on `AreaCalculator`, not on a concrete type

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
