//! Orbit design-system core.
//!
//! Semantic style props (spacing levels, color roles, radii, flex keywords) are
//! resolved against a [`Theme`] into a deterministic string of utility classes.
//! Props may be responsive: a map from [`Breakpoint`] to token, emitted in
//! cascade order so wider breakpoints override narrower ones.
//!
//! ```
//! use orbit::prelude::*;
//!
//! let theme = Theme::orbit();
//! let props = StyleProps::new()
//!     .padding(SpacingToken::S3)
//!     .justify_content(
//!         Responsive::from(JustifyContent::Start).at(Breakpoint::Lg, JustifyContent::Between),
//!     );
//! assert_eq!(resolve(&theme, &props).as_str(), "p-3 justify-start lg:justify-between");
//! ```

pub mod breakpoint;
pub mod components;
pub mod element;
pub mod error;
pub mod props;
pub mod resolve;
pub mod tokens;

pub use breakpoint::{Breakpoint, BreakpointMap, ClassTable, Responsive};
pub use element::{ClassHost, Element, Node, Tag};
pub use error::{PropsError, UnknownCategory, UnknownToken};
pub use props::{StyleProp, StyleProps, BOX_PROPS, TEXT_PROPS};
pub use resolve::{resolve, resolve_json, resolve_recognized, ClassString};
pub use tokens::{Category, Theme, Token, TokenKey};

pub mod prelude {
    pub use crate::breakpoint::{Breakpoint, Responsive};
    pub use crate::components::{create_box, create_stack, create_text, Primitive, Props};
    pub use crate::element::{ClassHost, Element, Node, Tag};
    pub use crate::props::{StyleProp, StyleProps};
    pub use crate::resolve::{resolve, resolve_json, ClassString};
    pub use crate::tokens::*;
}
