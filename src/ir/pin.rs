//! # Pin Type Model
//!
//! Canonical pin value categories and the compatibility rules between them.

use serde::{Deserialize, Serialize};

/// Canonical pin value category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PinType {
    #[default]
    Exec,
    Boolean,
    Byte,
    Integer,
    Integer64,
    Float,
    Double,
    Real,
    String,
    Name,
    Text,
    Vector,
    Vector2D,
    Vector4D,
    Rotator,
    Transform,
    Quat,
    Object,
    Class,
    Interface,
    Struct,
    Enum,
    Delegate,
    MulticastDelegate,
    Array,
    Set,
    Map,
    SoftObject,
    SoftClass,
    AssetId,
    Material,
    Texture,
    StaticMesh,
    SkeletalMesh,
    Pose,
    Animation,
    BlendSpace,
    FieldPath,
    Bitmask,
    #[serde(rename = "Self")]
    SelfRef,
    Index,
    Wildcard,
}

impl PinType {
    pub const ALL: &'static [PinType] = &[
        PinType::Exec,
        PinType::Boolean,
        PinType::Byte,
        PinType::Integer,
        PinType::Integer64,
        PinType::Float,
        PinType::Double,
        PinType::Real,
        PinType::String,
        PinType::Name,
        PinType::Text,
        PinType::Vector,
        PinType::Vector2D,
        PinType::Vector4D,
        PinType::Rotator,
        PinType::Transform,
        PinType::Quat,
        PinType::Object,
        PinType::Class,
        PinType::Interface,
        PinType::Struct,
        PinType::Enum,
        PinType::Delegate,
        PinType::MulticastDelegate,
        PinType::Array,
        PinType::Set,
        PinType::Map,
        PinType::SoftObject,
        PinType::SoftClass,
        PinType::AssetId,
        PinType::Material,
        PinType::Texture,
        PinType::StaticMesh,
        PinType::SkeletalMesh,
        PinType::Pose,
        PinType::Animation,
        PinType::BlendSpace,
        PinType::FieldPath,
        PinType::Bitmask,
        PinType::SelfRef,
        PinType::Index,
        PinType::Wildcard,
    ];

    /// Map a host-editor pin category (and subcategory) to a canonical type.
    ///
    /// Unknown categories become [`PinType::Wildcard`].
    pub fn from_category(category: &str, sub_category: &str) -> PinType {
        match category {
            "exec" => PinType::Exec,
            "bool" => PinType::Boolean,
            "byte" => PinType::Byte,
            "int" => PinType::Integer,
            "int64" => PinType::Integer64,
            "float" => PinType::Float,
            "double" => PinType::Double,
            "real" => PinType::Real,
            "string" => PinType::String,
            "name" => PinType::Name,
            "text" => PinType::Text,
            "object" => PinType::Object,
            "class" => PinType::Class,
            "interface" => PinType::Interface,
            "struct" => PinType::Struct,
            "enum" => PinType::Enum,
            "delegate" => PinType::Delegate,
            "mcdelegate" => PinType::MulticastDelegate,
            "fieldpath" => PinType::FieldPath,
            "wildcard" => PinType::Wildcard,
            "softobject" => PinType::SoftObject,
            "softclass" => PinType::SoftClass,
            _ => match sub_category {
                "bitmask" => PinType::Bitmask,
                "self" => PinType::SelfRef,
                "index" => PinType::Index,
                _ => PinType::Wildcard,
            },
        }
    }

    pub fn is_exec(&self) -> bool {
        matches!(self, PinType::Exec)
    }

    /// Container categories whose element type lives in the pin subtype.
    pub fn is_container(&self) -> bool {
        matches!(self, PinType::Array | PinType::Set | PinType::Map)
    }

    /// Categories that need a subtype to name their object/struct type.
    pub fn needs_subtype(&self) -> bool {
        matches!(
            self,
            PinType::Object | PinType::Class | PinType::Interface | PinType::Struct
        )
    }

    pub fn is_soft_reference(&self) -> bool {
        matches!(self, PinType::SoftObject | PinType::SoftClass)
    }

    pub fn is_delegate(&self) -> bool {
        matches!(self, PinType::Delegate | PinType::MulticastDelegate)
    }

    pub fn is_compatible_with(self, other: PinType) -> bool {
        are_compatible(self, other)
    }
}

/// Whether a value of type `a` may flow into a pin of type `b`.
///
/// The relation is symmetric.
pub fn are_compatible(a: PinType, b: PinType) -> bool {
    use PinType::*;

    if a == Wildcard || b == Wildcard {
        return true;
    }

    let pair = |x: PinType, y: PinType| (a == x && b == y) || (a == y && b == x);

    // Soft and hard references to the same kind
    if pair(SoftObject, Object) || pair(SoftClass, Class) {
        return true;
    }

    // Numeric widening
    if pair(Integer, Float)
        || pair(Integer, Integer64)
        || pair(Float, Double)
        || pair(Real, Float)
        || pair(Real, Double)
    {
        return true;
    }

    // Vector family
    if pair(Vector, Vector4D) || pair(Vector2D, Vector) {
        return true;
    }

    a == b
}

/// Pin-level compatibility: category compatibility plus container shape and
/// subtype agreement. An empty subtype matches anything.
pub fn are_pins_compatible(a: &Pin, b: &Pin) -> bool {
    if !are_compatible(a.pin_type, b.pin_type) {
        return false;
    }

    if a.is_container() || b.is_container() {
        if a.container_flags() != b.container_flags() {
            return false;
        }
        return subtypes_match(&a.sub_type, &b.sub_type);
    }

    if a.pin_type.needs_subtype() || b.pin_type.needs_subtype() {
        return subtypes_match(&a.sub_type, &b.sub_type);
    }

    true
}

fn subtypes_match(a: &str, b: &str) -> bool {
    a.is_empty() || b.is_empty() || a == b
}

/// One typed input or output slot of an IR node.
///
/// Empty strings and `false` flags are omitted from the text form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub id: String,
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "PinType::is_exec")]
    pub pin_type: PinType,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub_type: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub connected: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_reference: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_const: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_array: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_map: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_set: bool,
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

impl Pin {
    pub fn new(id: impl Into<String>, name: impl Into<String>, pin_type: PinType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pin_type,
            ..Default::default()
        }
    }

    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = sub_type.into();
        self
    }

    pub fn is_exec(&self) -> bool {
        self.pin_type.is_exec()
    }

    /// `(is_array, is_set, is_map)`
    pub fn container_flags(&self) -> (bool, bool, bool) {
        (self.is_array, self.is_set, self.is_map)
    }

    /// Number of container flags set. More than one is ambiguous but tolerated.
    pub fn container_flag_count(&self) -> usize {
        [self.is_array, self.is_set, self.is_map]
            .iter()
            .filter(|flag| **flag)
            .count()
    }

    pub fn is_container(&self) -> bool {
        self.pin_type.is_container() || self.container_flag_count() > 0
    }
}
