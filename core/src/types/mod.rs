//! Data model: declared shapes, live values, and the `Composite` bridge
//! from Rust types.

pub mod scalar;
pub mod shape;
pub mod value;
pub mod composite;

pub use scalar::{Scalar, ScalarKind};
pub use shape::{FieldShape, JsonTag, Kind, Shape, ShapeRef, StructShape};
pub use value::{StructValue, Value};
pub use composite::Composite;

#[doc(hidden)]
pub use composite::__field_shape;
