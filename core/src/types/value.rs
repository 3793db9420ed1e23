//! Live composite values.
//!
//! `Value` is the data the namespace builder walks and the value resolver
//! navigates. Every container and pointer carries its declared element or
//! pointee `Shape`, so absent data (nil pointers, empty containers) can
//! still be described.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::scalar::Scalar;
use super::shape::{FieldShape, Kind, Shape, StructShape};
use crate::namespace::fields;


// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Struct(StructValue),
    Slice { elem: Shape, items: Vec<Value> },
    Array { elem: Shape, items: Vec<Value> },
    Map { value: Shape, entries: BTreeMap<String, Value> },
    /// `target == None` is a nil pointer that still knows its pointee shape.
    Pointer { pointee: Shape, target: Option<Box<Value>> },
    /// Dynamically typed slot; `None` is the nil interface.
    Interface(Option<Box<Value>>),
}

impl Value {
    pub fn slice(elem: Shape, items: Vec<Value>) -> Value {
        Value::Slice { elem, items }
    }

    pub fn array(elem: Shape, items: Vec<Value>) -> Value {
        Value::Array { elem, items }
    }

    pub fn map<K: Into<String>>(value: Shape, entries: impl IntoIterator<Item = (K, Value)>) -> Value {
        Value::Map {
            value,
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Non-nil pointer to `target`.
    pub fn pointer_to(target: Value) -> Value {
        Value::Pointer {
            pointee: target.shape(),
            target: Some(Box::new(target)),
        }
    }

    /// Nil pointer to a value of shape `pointee`.
    pub fn nil(pointee: Shape) -> Value {
        Value::Pointer { pointee, target: None }
    }

    pub fn interface(inner: Value) -> Value {
        Value::Interface(Some(Box::new(inner)))
    }

    /// The zero value of a declared shape.
    ///
    /// Pointers come out nil, slices and maps empty, arrays filled with
    /// zero elements, structs with every field zeroed.
    pub fn zero(shape: &Shape) -> Value {
        match shape {
            Shape::Scalar(kind) => Value::Scalar(Scalar::zero(*kind)),
            Shape::Struct(s) => Value::Struct(StructValue::zero(Arc::clone(s))),
            Shape::Slice(elem) => Value::Slice {
                elem: elem.shape(),
                items: Vec::new(),
            },
            Shape::Array(elem, len) => {
                let elem = elem.shape();
                let items = (0..*len).map(|_| Value::zero(&elem)).collect();
                Value::Array { elem, items }
            }
            Shape::Map(value) => Value::Map {
                value: value.shape(),
                entries: BTreeMap::new(),
            },
            Shape::Pointer(p) => Value::Pointer {
                pointee: p.shape(),
                target: None,
            },
            Shape::Interface => Value::Interface(None),
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Scalar(_) => Kind::Scalar,
            Value::Struct(_) => Kind::Struct,
            Value::Slice { .. } => Kind::Slice,
            Value::Array { .. } => Kind::Array,
            Value::Map { .. } => Kind::Map,
            Value::Pointer { .. } => Kind::Pointer,
            Value::Interface(_) => Kind::Interface,
        }
    }

    /// The declared shape of this value.
    pub fn shape(&self) -> Shape {
        match self {
            Value::Scalar(s) => Shape::Scalar(s.kind()),
            Value::Struct(s) => Shape::Struct(Arc::clone(&s.shape)),
            Value::Slice { elem, .. } => Shape::slice(elem.clone()),
            Value::Array { elem, items } => Shape::array(elem.clone(), items.len()),
            Value::Map { value, .. } => Shape::map(value.clone()),
            Value::Pointer { pointee, .. } => Shape::pointer(pointee.clone()),
            Value::Interface(_) => Shape::Interface,
        }
    }

    /// Follow pointers and interfaces to the first concrete value.
    /// `None` if the chain ends in nil.
    pub fn deref(&self) -> Option<&Value> {
        let mut current = self;
        loop {
            match current {
                Value::Pointer { target: Some(t), .. } => current = t.as_ref(),
                Value::Interface(Some(inner)) => current = inner.as_ref(),
                Value::Pointer { target: None, .. } | Value::Interface(None) => return None,
                _ => return Some(current),
            }
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Pointer { target: None, .. } | Value::Interface(None))
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Number of elements or entries for containers.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Slice { items, .. } | Value::Array { items, .. } => Some(items.len()),
            Value::Map { entries, .. } => Some(entries.len()),
            _ => None,
        }
    }

    // -----------------------------------------------------------------
    // JSON bridge
    // -----------------------------------------------------------------

    /// Convert a decoded JSON document into a value.
    ///
    /// Objects become maps of interfaces, arrays slices of interfaces,
    /// `null` the nil interface. Integers keep `i64`/`u64`, other numbers
    /// become `f64`.
    pub fn from_json(json: &serde_json::Value) -> Value {
        use serde_json::Value as J;
        match json {
            J::Null => Value::Interface(None),
            J::Bool(b) => Value::Scalar(Scalar::Bool(*b)),
            J::Number(n) => {
                let scalar = if let Some(i) = n.as_i64() {
                    Scalar::I64(i)
                } else if let Some(u) = n.as_u64() {
                    Scalar::U64(u)
                } else {
                    Scalar::F64(n.as_f64().unwrap_or(0.0))
                };
                Value::Scalar(scalar)
            }
            J::String(s) => Value::Scalar(Scalar::Str(s.clone())),
            J::Array(items) => Value::Slice {
                elem: Shape::Interface,
                items: items.iter().map(|v| Value::interface(Value::from_json(v))).collect(),
            },
            J::Object(map) => Value::Map {
                value: Shape::Interface,
                entries: map
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::interface(Value::from_json(v))))
                    .collect(),
            },
        }
    }

    /// Render as JSON. Struct fields use their JSON names; excluded fields
    /// are dropped. Nil pointers and interfaces render as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as J;
        match self {
            Value::Scalar(s) => s.to_json(),
            Value::Struct(s) => {
                let mut obj = serde_json::Map::new();
                for (field, value) in s.iter() {
                    if let Some(name) = fields::json_name(field) {
                        obj.insert(name.to_string(), value.to_json());
                    }
                }
                J::Object(obj)
            }
            Value::Slice { items, .. } | Value::Array { items, .. } => {
                J::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map { entries, .. } => J::Object(
                entries.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            Value::Pointer { target: Some(t), .. } => t.to_json(),
            Value::Interface(Some(inner)) => inner.to_json(),
            Value::Pointer { target: None, .. } | Value::Interface(None) => J::Null,
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Value {
        Value::Scalar(s)
    }
}

impl From<StructValue> for Value {
    fn from(s: StructValue) -> Value {
        Value::Struct(s)
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Value {
                    Value::Scalar(Scalar::$variant(v))
                }
            }
        )*
    };
}

scalar_from! {
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

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::Scalar(Scalar::Str(v.to_string()))
    }
}


// ---------------------------------------------------------------------------
// StructValue
// ---------------------------------------------------------------------------

/// A struct instance: its field table plus one value per declared field.
#[derive(Debug, Clone)]
pub struct StructValue {
    shape: Arc<StructShape>,
    values: Vec<Value>,
}

impl StructValue {
    /// An instance with every field at its zero value.
    pub fn zero(shape: Arc<StructShape>) -> StructValue {
        let values = shape.fields.iter().map(|f| Value::zero(&f.shape)).collect();
        StructValue { shape, values }
    }

    /// Zero instance of a struct shape; `None` for non-struct shapes.
    pub fn of(shape: &Shape) -> Option<StructValue> {
        match shape {
            Shape::Struct(s) => Some(StructValue::zero(Arc::clone(s))),
            _ => None,
        }
    }

    /// Builder form of `set`. Unknown field names are ignored.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> StructValue {
        self.set(field, value);
        self
    }

    /// Replace a field value by declared name. Returns false if no such field.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) -> bool {
        match self.shape.field_index(field) {
            Some(i) => {
                self.values[i] = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.shape.field_index(field).map(|i| &self.values[i])
    }

    pub fn shape(&self) -> &Arc<StructShape> {
        &self.shape
    }

    pub fn type_name(&self) -> &str {
        &self.shape.name
    }

    /// Fields in declaration order with their current values.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldShape, &Value)> {
        self.shape.fields.iter().zip(self.values.iter())
    }
}

impl PartialEq for StructValue {
    fn eq(&self, other: &StructValue) -> bool {
        self.shape.name == other.shape.name && self.values == other.values
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scalar::ScalarKind;

    fn delta() -> Shape {
        StructShape::new("delta").field("Eins", Shape::I64).build()
    }

    fn uno() -> Shape {
        StructShape::new("uno")
            .field("Alpha", Shape::BOOL)
            .field("Delta", Shape::pointer(delta()))
            .field("Beta", Shape::map(Shape::I64))
            .build()
    }

    #[test]
    fn zero_struct_has_nil_pointer_and_empty_map() {
        let v = Value::zero(&uno());
        let s = v.as_struct().unwrap();
        assert_eq!(s.get("Alpha"), Some(&Value::from(false)));
        assert!(s.get("Delta").unwrap().is_nil());
        assert_eq!(s.get("Beta").unwrap().len(), Some(0));
    }

    #[test]
    fn zero_array_is_filled() {
        let v = Value::zero(&Shape::array(Shape::STR, 3));
        assert_eq!(v.len(), Some(3));
    }

    #[test]
    fn zero_pointer_keeps_pointee_shape() {
        let v = Value::zero(&Shape::pointer(Shape::pointer(delta())));
        assert!(v.is_nil());
        assert_eq!(v.shape().type_name(), "**delta");
    }

    #[test]
    fn shape_round_trips_through_zero() {
        for shape in [uno(), Shape::slice(delta()), Shape::map(Shape::STR), Shape::U64] {
            assert_eq!(Value::zero(&shape).shape(), shape);
        }
    }

    #[test]
    fn set_and_get_fields() {
        let mut s = StructValue::of(&uno()).unwrap();
        assert!(s.set("Alpha", true));
        assert!(!s.set("Missing", 1i64));
        assert_eq!(s.get("Alpha"), Some(&Value::from(true)));
        assert_eq!(s.iter().count(), 3);
    }

    #[test]
    fn deref_follows_chains() {
        let inner = Value::from(7u32);
        let v = Value::pointer_to(Value::pointer_to(inner.clone()));
        assert_eq!(v.deref(), Some(&inner));
        assert_eq!(Value::interface(inner.clone()).deref(), Some(&inner));
        assert_eq!(Value::nil(Shape::I64).deref(), None);
        assert_eq!(Value::pointer_to(Value::Interface(None)).deref(), None);
    }

    #[test]
    fn from_json_document() {
        let json = serde_json::json!({"a": 1, "b": [true, null], "c": {"d": 1.5}});
        let v = Value::from_json(&json);
        assert_eq!(v.kind(), Kind::Map);
        assert_eq!(v.len(), Some(3));
        if let Value::Map { entries, .. } = &v {
            let a = entries["a"].deref().unwrap();
            assert_eq!(a.as_scalar().unwrap().kind(), ScalarKind::I64);
            assert_eq!(entries["b"].deref().unwrap().len(), Some(2));
        }
        assert_eq!(v.to_json(), json);
    }

    #[test]
    fn struct_to_json_uses_tag_names() {
        let shape = StructShape::new("s")
            .tagged("Id", "id", Shape::STR)
            .tagged("Hidden", "-", Shape::BOOL)
            .field("Count", Shape::I64)
            .build();
        let v = Value::from(StructValue::of(&shape).unwrap().with("Id", "x").with("Count", 2i64));
        assert_eq!(v.to_json(), serde_json::json!({"id": "x", "Count": 2}));
    }
}
