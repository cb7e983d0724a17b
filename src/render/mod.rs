mod color;
mod primitives;
mod svg;

pub use color::Color;
pub use primitives::{
    CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextAnchor, TextPrimitive, class,
};
pub use svg::{SvgDocument, SvgNode, escape_xml};
