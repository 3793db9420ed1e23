//! Declared-type descriptions (the type classifier).
//!
//! A `Shape` describes what a slot *can* hold independent of any instance.
//! The namespace builder needs it to walk absent data: a nil pointer still
//! knows its pointee shape, an empty slice still knows its element shape.
//!
//! Shapes are cheap to clone; composite parts are shared behind `Arc`.
//! Element and pointee shapes may also be produced on demand, which is how
//! a type that contains itself (through a pointer, a slice or a map) gets a
//! finite description.

use std::fmt;
use std::sync::Arc;

use super::scalar::ScalarKind;


// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// Structural kind of a shape or value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Scalar,
    Struct,
    Slice,
    Array,
    Map,
    Pointer,
    /// Dynamically typed slot; structure is only known from live content.
    Interface,
}

impl Kind {
    /// Slices, arrays and maps.
    pub fn is_container(&self) -> bool {
        matches!(self, Kind::Slice | Kind::Array | Kind::Map)
    }
}


// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// A declared type.
#[derive(Debug, Clone)]
pub enum Shape {
    Scalar(ScalarKind),
    Struct(Arc<StructShape>),
    Slice(ShapeRef),
    Array(ShapeRef, usize),
    /// String-keyed map with the given value shape.
    Map(ShapeRef),
    Pointer(ShapeRef),
    Interface,
}

impl Shape {
    pub const BOOL: Shape = Shape::Scalar(ScalarKind::Bool);
    pub const I64: Shape = Shape::Scalar(ScalarKind::I64);
    pub const U64: Shape = Shape::Scalar(ScalarKind::U64);
    pub const F64: Shape = Shape::Scalar(ScalarKind::F64);
    pub const STR: Shape = Shape::Scalar(ScalarKind::Str);

    pub fn slice(elem: Shape) -> Shape {
        Shape::Slice(ShapeRef::resolved(elem))
    }

    pub fn array(elem: Shape, len: usize) -> Shape {
        Shape::Array(ShapeRef::resolved(elem), len)
    }

    pub fn map(value: Shape) -> Shape {
        Shape::Map(ShapeRef::resolved(value))
    }

    pub fn pointer(pointee: Shape) -> Shape {
        Shape::Pointer(ShapeRef::resolved(pointee))
    }

    /// Pointer whose pointee is produced on demand, for self-referential types.
    pub fn deferred_pointer(pointee: fn() -> Shape) -> Shape {
        Shape::Pointer(ShapeRef::Deferred(pointee))
    }

    /// Slice whose element shape is produced on demand.
    pub fn deferred_slice(elem: fn() -> Shape) -> Shape {
        Shape::Slice(ShapeRef::Deferred(elem))
    }

    pub fn deferred_array(elem: fn() -> Shape, len: usize) -> Shape {
        Shape::Array(ShapeRef::Deferred(elem), len)
    }

    /// Map whose value shape is produced on demand.
    pub fn deferred_map(value: fn() -> Shape) -> Shape {
        Shape::Map(ShapeRef::Deferred(value))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Shape::Scalar(_) => Kind::Scalar,
            Shape::Struct(_) => Kind::Struct,
            Shape::Slice(_) => Kind::Slice,
            Shape::Array(..) => Kind::Array,
            Shape::Map(_) => Kind::Map,
            Shape::Pointer(_) => Kind::Pointer,
            Shape::Interface => Kind::Interface,
        }
    }

    /// Element shape of a slice/array, value shape of a map.
    pub fn element(&self) -> Option<Shape> {
        match self {
            Shape::Slice(elem) | Shape::Array(elem, _) | Shape::Map(elem) => Some(elem.shape()),
            _ => None,
        }
    }

    /// Pointee shape of a pointer.
    pub fn pointee(&self) -> Option<Shape> {
        match self {
            Shape::Pointer(p) => Some(p.shape()),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructShape> {
        match self {
            Shape::Struct(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// True if this is a numeric scalar shape.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Shape::Scalar(k) if k.is_numeric())
    }

    /// Human-readable type name, e.g. `[]*uno`, `map[string]i64`.
    ///
    /// Struct shapes render as their type name only, so the name of a
    /// self-referential type is finite.
    pub fn type_name(&self) -> String {
        match self {
            Shape::Scalar(k) => k.as_str().to_string(),
            Shape::Struct(s) => s.name.clone(),
            Shape::Slice(elem) => format!("[]{}", elem.shape().type_name()),
            Shape::Array(elem, len) => format!("[{}]{}", len, elem.shape().type_name()),
            Shape::Map(value) => format!("map[string]{}", value.shape().type_name()),
            Shape::Pointer(p) => format!("*{}", p.shape().type_name()),
            Shape::Interface => "interface".to_string(),
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Shape) -> bool {
        self.type_name() == other.type_name()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}


/// Shape of a pointer target or container element, held or made on demand.
#[derive(Debug, Clone)]
pub enum ShapeRef {
    Resolved(Arc<Shape>),
    Deferred(fn() -> Shape),
}

impl ShapeRef {
    pub fn resolved(shape: Shape) -> ShapeRef {
        ShapeRef::Resolved(Arc::new(shape))
    }

    pub fn shape(&self) -> Shape {
        match self {
            ShapeRef::Resolved(shape) => (**shape).clone(),
            ShapeRef::Deferred(make) => make(),
        }
    }
}


// ---------------------------------------------------------------------------
// StructShape / FieldShape
// ---------------------------------------------------------------------------

/// Field descriptor table of a struct type.
#[derive(Debug, Clone)]
pub struct StructShape {
    pub name: String,
    pub fields: Vec<FieldShape>,
}

impl StructShape {
    pub fn new(name: impl Into<String>) -> Self {
        StructShape {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add an untagged field.
    pub fn field(mut self, name: impl Into<String>, shape: Shape) -> Self {
        self.fields.push(FieldShape {
            name: name.into(),
            tag: None,
            shape,
        });
        self
    }

    /// Add a field carrying a JSON tag such as `"uno_f,omitempty"` or `"-"`.
    pub fn tagged(mut self, name: impl Into<String>, tag: &str, shape: Shape) -> Self {
        self.fields.push(FieldShape {
            name: name.into(),
            tag: Some(JsonTag::parse(tag)),
            shape,
        });
        self
    }

    /// Finish the table and wrap it as a shape.
    pub fn build(self) -> Shape {
        Shape::Struct(Arc::new(self))
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}


/// One declared struct field.
#[derive(Debug, Clone)]
pub struct FieldShape {
    /// Declared field name.
    pub name: String,
    pub tag: Option<JsonTag>,
    pub shape: Shape,
}


/// A parsed JSON tag: `name[,modifier...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonTag {
    pub name: String,
    pub modifiers: Vec<String>,
}

impl JsonTag {
    pub fn parse(raw: &str) -> JsonTag {
        let mut parts = raw.split(',');
        let name = parts.next().unwrap_or("").trim().to_string();
        let modifiers = parts
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .collect();
        JsonTag { name, modifiers }
    }

    /// `-` as the name part hides the field from JSON-named namespaces.
    pub fn is_excluded(&self) -> bool {
        self.name == "-"
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}
