//! Variable resolution module
//!
//! Provides parsing and resolution of `{{variable}}` syntax in strings.
//!
//! # Usage
//!
//! ```
//! use materia_application::variable_resolver::{merge_scope, resolve_template};
//! use materia_domain::Variable;
//!
//! let environment = vec![Variable::new("host", "localhost")];
//! let globals = vec![Variable::new("host", "example.com"), Variable::new("port", "8080")];
//!
//! let scope = merge_scope(&environment, &globals);
//! assert_eq!(resolve_template("http://{{host}}:{{port}}/api", &scope), "http://localhost:8080/api");
//! ```

pub mod body;
pub mod engine;
pub mod parser;
pub mod scope;

pub use body::{is_json_content_type, resolve_body_template};
pub use engine::{
    MAX_EXPANDED_LEN, MAX_EXPANSION_DEPTH, ResolutionResult, TemplateError, resolve, resolve_template,
    resolve_template_checked,
};
pub use parser::{VariableReference, extract_variable_names, has_variables, parse_variables};
pub use scope::{Scope, merge_scope};
