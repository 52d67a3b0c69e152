//! # Blueprint Intermediate Representation
//!
//! The normalized tree produced by translation and consumed by validation
//! and serialization:
//!
//! ```text
//! Blueprint
//! ├── metadata
//! ├── graphs[]
//! │   ├── nodes[] ── input_pins[] / output_pins[]
//! │   └── flows { execution[], data{} }
//! ├── structs[]
//! └── enums[]
//! ```

pub mod blueprint;
pub mod flow;
pub mod node;
pub mod pin;
pub mod types;

pub use blueprint::{Blueprint, Graph, GraphKind, Metadata, ProgramKind, IR_VERSION};
pub use flow::{exec_chain_nodes, Flows, PinRef};
pub use node::{Node, NodeCategory};
pub use pin::{are_compatible, are_pins_compatible, Pin, PinType};
pub use types::{EnumDef, EnumValue, MemberType, StructDef, StructMember};
