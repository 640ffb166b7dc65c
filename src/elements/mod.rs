//! Domain data model: nodes, elements, supports, sections and materials

mod element;
mod material;
mod node;
mod section;
mod support;

pub use element::{Element, ElementCategory};
pub use material::{material_by_id, materials, Material};
pub use node::Node;
pub use section::{section_by_id, sections, Section, SectionCategory};
pub use support::SupportKind;
