//! Element configuration value objects.
//!
//! Responsibilities:
//! - describe sizing, padding, alignment and decoration for one element
//! - stay plain `Copy` data so declarations cost nothing to build every frame
//! - keep the engine-facing aggregate ([`ElementDeclaration`]) separate from
//!   the authoring surface in `kiln-ui`

mod declaration;
mod floating;
mod layout;
mod padding;
mod sizing;
mod text;
mod visual;

pub use declaration::ElementDeclaration;
pub use floating::{AttachPoint, AttachTo, FloatingConfig, PointerCapture};
pub use layout::{AlignX, AlignY, ChildAlignment, LayoutConfig, LayoutDirection};
pub use padding::Padding;
pub use sizing::{Sizing, SizingAxis};
pub use text::{TextAlignment, TextConfig, TextWrapMode};
pub use visual::{BorderConfig, ClipConfig, ImageConfig, ImageHandle};
