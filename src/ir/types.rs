//! User-defined struct and enum definitions carried alongside the graphs.

use super::pin::is_false;
use serde::{Deserialize, Serialize};

/// Value category of a struct member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MemberType {
    Bool,
    Byte,
    #[default]
    Int,
    Float,
    String,
    Name,
    Text,
    Vector,
    Vector2D,
    Rotator,
    Transform,
    Class,
    Object,
    Struct,
    Enum,
    Array,
    Set,
    Map,
    Custom,
}

impl MemberType {
    /// Member types that must name the type they refer to.
    pub fn requires_type_name(&self) -> bool {
        matches!(
            self,
            MemberType::Struct | MemberType::Enum | MemberType::Object | MemberType::Class
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructMember {
    pub name: String,

    #[serde(rename = "type")]
    pub member_type: MemberType,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub type_name: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_array: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_set: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub is_map: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<MemberType>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key_type_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub default_value: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructDef {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(default)]
    pub members: Vec<StructMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,
}
