//! Query processing module
//!
//! A [`Query`] cursor seeds a working set by label and [`Filter`], then
//! walks the graph one hop at a time:
//!
//! ```
//! use nanograph::{props, Filter, Graph};
//!
//! let mut graph = Graph::new();
//! let john = graph.create_vertex("PERSON", Some(props! { "name" => "John Doe" })).unwrap();
//! let jane = graph.create_vertex("PERSON", Some(props! { "name" => "Jane Doe" })).unwrap();
//! graph.create_edge("MARRIED", &john, &jane, None).unwrap();
//!
//! let spouse = graph
//!     .find_vertices("PERSON", Filter::property("name", "John Doe"))
//!     .over("MARRIED", Filter::Any)
//!     .to("PERSON", Filter::Any)
//!     .get_first()
//!     .unwrap();
//! assert_eq!(spouse.id(), &jane);
//! ```

pub mod cursor;
pub mod filter;

// Re-export main types
pub use cursor::{Query, Selection};
pub use filter::{matches, Condition, Filter, PropertyFilter, ID_KEY};
