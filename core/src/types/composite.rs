//! `Composite` — Rust types that can describe their shape and produce a
//! `Value` snapshot of themselves.
//!
//! Standard containers map onto the namespace model as follows:
//!
//! | Rust | Shape |
//! |------|-------|
//! | integers, floats, `bool`, `String` | scalar |
//! | `Vec<T>` | slice |
//! | `[T; N]` | array |
//! | `HashMap<String, T>`, `BTreeMap<String, T>` | map |
//! | `Option<T>` | pointer (`None` is nil) |
//! | `Box<T>` | pointer (never nil) |
//! | `serde_json::Value` | interface |
//!
//! Element, value and pointee shapes are deferred, so a struct may hold
//! itself in any of these containers.
//!
//! Plain structs implement the trait with [`impl_composite!`].

use std::collections::{BTreeMap, HashMap};

use super::scalar::ScalarKind;
use super::shape::Shape;
use super::value::Value;


pub trait Composite {
    /// The declared shape of the type.
    fn shape() -> Shape
    where
        Self: Sized;

    /// A snapshot of this instance.
    fn to_value(&self) -> Value;
}


macro_rules! scalar_composite {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Composite for $ty {
                fn shape() -> Shape {
                    Shape::Scalar(ScalarKind::$kind)
                }

                fn to_value(&self) -> Value {
                    Value::from(self.clone())
                }
            }
        )*
    };
}

scalar_composite! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
}

impl Composite for &str {
    fn shape() -> Shape {
        Shape::STR
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl<T: Composite> Composite for Vec<T> {
    fn shape() -> Shape {
        Shape::deferred_slice(T::shape)
    }

    fn to_value(&self) -> Value {
        Value::slice(T::shape(), self.iter().map(Composite::to_value).collect())
    }
}

impl<T: Composite, const N: usize> Composite for [T; N] {
    fn shape() -> Shape {
        Shape::deferred_array(T::shape, N)
    }

    fn to_value(&self) -> Value {
        Value::array(T::shape(), self.iter().map(Composite::to_value).collect())
    }
}

impl<T: Composite> Composite for HashMap<String, T> {
    fn shape() -> Shape {
        Shape::deferred_map(T::shape)
    }

    fn to_value(&self) -> Value {
        Value::map(T::shape(), self.iter().map(|(k, v)| (k.clone(), v.to_value())))
    }
}

impl<T: Composite> Composite for BTreeMap<String, T> {
    fn shape() -> Shape {
        Shape::deferred_map(T::shape)
    }

    fn to_value(&self) -> Value {
        Value::map(T::shape(), self.iter().map(|(k, v)| (k.clone(), v.to_value())))
    }
}

impl<T: Composite> Composite for Option<T> {
    fn shape() -> Shape {
        Shape::deferred_pointer(T::shape)
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => Value::Pointer {
                pointee: T::shape(),
                target: Some(Box::new(v.to_value())),
            },
            None => Value::nil(T::shape()),
        }
    }
}

impl<T: Composite> Composite for Box<T> {
    fn shape() -> Shape {
        Shape::deferred_pointer(T::shape)
    }

    fn to_value(&self) -> Value {
        Value::Pointer {
            pointee: T::shape(),
            target: Some(Box::new(self.as_ref().to_value())),
        }
    }
}

impl Composite for serde_json::Value {
    fn shape() -> Shape {
        Shape::Interface
    }

    fn to_value(&self) -> Value {
        match self {
            serde_json::Value::Null => Value::Interface(None),
            other => Value::interface(Value::from_json(other)),
        }
    }
}

/// A value already in namespace form passes through unchanged.
impl Composite for Value {
    fn shape() -> Shape {
        Shape::Interface
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}


/// Shape of a struct field, inferred from a projection onto it.
#[doc(hidden)]
pub fn __field_shape<S, F: Composite>(_project: impl Fn(&S) -> &F) -> Shape {
    F::shape()
}


/// Implement [`Composite`] for a plain struct.
///
/// Each field is listed as `rust_field => "DeclaredName"`, optionally
/// followed by `json "tag"`:
///
/// ```
/// use plugin_ns_core::impl_composite;
///
/// struct Delta { eins: i64 }
/// struct Uno { alpha: bool, delta: Option<Delta> }
///
/// impl_composite!(Delta { eins => "Eins" });
/// impl_composite!(Uno {
///     alpha => "Alpha" json "alpha_f",
///     delta => "Delta" json "delta_f,omitempty",
/// });
/// ```
#[macro_export]
macro_rules! impl_composite {
    ($ty:ident { $($field:ident => $name:literal $(json $tag:literal)?),* $(,)? }) => {
        impl $crate::types::Composite for $ty {
            fn shape() -> $crate::types::Shape {
                let shape = $crate::types::StructShape::new(stringify!($ty));
                $(
                    let tag: Option<&str> = None $(.or(Some($tag)))?;
                    let field_shape = $crate::types::__field_shape(|s: &$ty| &s.$field);
                    let shape = match tag {
                        Some(t) => shape.tagged($name, t, field_shape),
                        None => shape.field($name, field_shape),
                    };
                )*
                shape.build()
            }

            fn to_value(&self) -> $crate::types::Value {
                let shape = <$ty as $crate::types::Composite>::shape();
                let mut value = match $crate::types::StructValue::of(&shape) {
                    Some(v) => v,
                    None => return $crate::types::Value::zero(&shape),
                };
                $(
                    value.set($name, $crate::types::Composite::to_value(&self.$field));
                )*
                $crate::types::Value::Struct(value)
            }
        }
    };
}
