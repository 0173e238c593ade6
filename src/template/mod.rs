//! Template processing engine
//!
//! This module contains the core template pipeline components:
//! - `locator`: Finds every template file below a root directory
//! - `processor`: Renders one template with the strategy its file mode selects
//! - `tree`: Collects rendered templates into the output tree

pub mod locator;
pub mod processor;
pub mod tree;

pub use locator::{locate, TemplateRef};
pub use processor::TemplateProcessor;
pub use tree::{build_tree, CollisionPolicy, OutputTree};
