#![deny(missing_docs)]

//! # Type Graph Models
//!
//! Definition of the read-only type graph consumed by the resolution engine.
//!
//! These structures are externally constructed views: the upstream graph
//! builder validates them and guarantees the inheritance relation among
//! object types is acyclic. The engine only queries them; nothing here is
//! mutated after construction, so a frozen graph is safe to share across
//! threads.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A node in the type graph.
///
/// Closed set of body shapes: a new shape must break every `match` over this
/// enum rather than fall through silently.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// A structured type with named fields and at most one supertype.
    Object(Arc<ObjectType>),
    /// Exactly one of an ordered set of member types.
    Union(UnionType),
    /// A fixed-order sequence of member types.
    Tuple(TupleType),
    /// A leaf type, optionally carrying a literal value.
    Scalar(ScalarType),
}

/// A structured type with named fields and an optional single supertype.
#[derive(Clone, PartialEq)]
pub struct ObjectType {
    /// Type name, unique within one graph.
    pub name: String,
    /// Fields declared directly on this type, in declaration order.
    pub fields: IndexMap<String, Field>,
    /// Supertype, if any. Single inheritance.
    pub base: Option<Arc<ObjectType>>,
    /// Whether the upstream marking mechanism flagged this type as an error
    /// shape. Opaque to the engine.
    pub is_error: bool,
}

// Manual Debug implementation: rendering the base chain in full repeats
// every inherited level, so the base is shown by name only.
impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("base", &self.base.as_ref().map(|b| b.name.as_str()))
            .field("is_error", &self.is_error)
            .finish()
    }
}

impl ObjectType {
    /// Creates an object type with no fields, no supertype and no error
    /// marking.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            base: None,
            is_error: false,
        }
    }

    /// Adds a directly-declared field. Re-declaring a name replaces the
    /// earlier declaration in place.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    /// Sets the supertype.
    pub fn with_base(mut self, base: Arc<ObjectType>) -> Self {
        self.base = Some(base);
        self
    }

    /// Marks this type as an error shape.
    pub fn mark_error(mut self) -> Self {
        self.is_error = true;
        self
    }

    /// Freezes this type into a shareable graph node.
    pub fn into_node(self) -> TypeNode {
        TypeNode::Object(Arc::new(self))
    }
}

impl From<ObjectType> for TypeNode {
    fn from(model: ObjectType) -> Self {
        model.into_node()
    }
}

impl From<Arc<ObjectType>> for TypeNode {
    fn from(model: Arc<ObjectType>) -> Self {
        TypeNode::Object(model)
    }
}

/// Exactly one of an insertion-ordered set of member types.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnionType {
    /// Union members in declaration order.
    pub variants: Vec<UnionVariant>,
}

impl UnionType {
    /// Creates an empty union.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an unnamed variant.
    pub fn with_variant(mut self, ty: impl Into<TypeNode>) -> Self {
        self.variants.push(UnionVariant {
            name: None,
            ty: ty.into(),
        });
        self
    }

    /// Appends a named variant.
    pub fn with_named_variant(mut self, name: impl Into<String>, ty: impl Into<TypeNode>) -> Self {
        self.variants.push(UnionVariant {
            name: Some(name.into()),
            ty: ty.into(),
        });
        self
    }
}

impl From<UnionType> for TypeNode {
    fn from(union: UnionType) -> Self {
        TypeNode::Union(union)
    }
}

/// One member of a union, optionally named.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionVariant {
    /// Variant name, when declared.
    pub name: Option<String>,
    /// Member type.
    pub ty: TypeNode,
}

/// A fixed-order sequence of member types.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TupleType {
    /// Elements in declaration order.
    pub elements: Vec<TypeNode>,
}

impl TupleType {
    /// Creates an empty tuple.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element.
    pub fn with_element(mut self, ty: impl Into<TypeNode>) -> Self {
        self.elements.push(ty.into());
        self
    }
}

impl From<TupleType> for TypeNode {
    fn from(tuple: TupleType) -> Self {
        TypeNode::Tuple(tuple)
    }
}

/// Primitive classification of a scalar leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    /// Text scalar.
    String,
    /// Numeric scalar.
    Number,
    /// Anything else (booleans, opaque primitives).
    Other,
}

/// A leaf type, optionally carrying a literal value such as a status code.
///
/// Literals are kept as raw JSON values; the engine never parses them, it
/// only pattern-matches the string/number shapes it recognizes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarType {
    /// Primitive kind.
    pub kind: ScalarKind,
    /// Literal value, when the scalar denotes one (e.g. `200`, `"404"`).
    pub literal: Option<Value>,
}

impl ScalarType {
    /// A string scalar carrying a literal value.
    pub fn string_literal(value: impl Into<String>) -> Self {
        Self {
            kind: ScalarKind::String,
            literal: Some(Value::String(value.into())),
        }
    }

    /// A numeric scalar carrying a literal value.
    pub fn number_literal(value: i64) -> Self {
        Self {
            kind: ScalarKind::Number,
            literal: Some(Value::from(value)),
        }
    }

    /// A scalar of the given kind with no literal.
    pub fn plain(kind: ScalarKind) -> Self {
        Self {
            kind,
            literal: None,
        }
    }

    /// An uncategorized scalar carrying an arbitrary literal.
    pub fn opaque(literal: Value) -> Self {
        Self {
            kind: ScalarKind::Other,
            literal: Some(literal),
        }
    }
}

impl From<ScalarType> for TypeNode {
    fn from(scalar: ScalarType) -> Self {
        TypeNode::Scalar(scalar)
    }
}

/// A named field of an object type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Declared field type.
    pub ty: TypeNode,
    /// Whether the external annotation mechanism designates this field as
    /// the status-code carrier. Opaque to the engine.
    pub is_status_code: bool,
}

impl Field {
    /// Creates an untagged field.
    pub fn new(name: impl Into<String>, ty: impl Into<TypeNode>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_status_code: false,
        }
    }

    /// Tags the field as the designated status-code carrier.
    pub fn status_code(mut self) -> Self {
        self.is_status_code = true;
        self
    }
}

/// A single declared response of an operation.
///
/// Headers and other transport concerns are resolved upstream; only the
/// body shape reaches the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Declared body shape.
    pub body: TypeNode,
}

impl Response {
    /// Creates a response from its body shape.
    pub fn new(body: impl Into<TypeNode>) -> Self {
        Self { body: body.into() }
    }
}

/// An operation and its declared responses.
///
/// Declaration order is load-bearing: classification and search return the
/// first qualifying match, so reordering responses changes results.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Identifier hosts use to address the operation; also the site
    /// reference attached to diagnostics.
    pub name: String,
    /// Responses in declaration order.
    pub responses: Vec<Response>,
}

impl Operation {
    /// Creates an operation with no responses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            responses: Vec::new(),
        }
    }

    /// Appends a response declared with the given body shape.
    pub fn with_response(mut self, body: impl Into<TypeNode>) -> Self {
        self.responses.push(Response::new(body));
        self
    }
}
