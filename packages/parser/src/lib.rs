//! Streaming parser for MeSH (Medical Subject Headings) descriptor
//! distributions.
//!
//! The distribution is a single large XML document holding tens of
//! thousands of `DescriptorRecord` elements. This crate reads it as a
//! stream: a tree of stateful element handlers mirrors the schema,
//! accumulates one record at a time, and hands each completed
//! [`MeshRecord`] to a caller-supplied [`RecordSink`] before moving on.
//! Memory use is bounded by the largest record, not the document.
//!
//! External DTD references are resolved against copies bundled with the
//! crate; nothing is ever fetched over the network.
//!
//! # Example
//!
//! ```
//! use mesh_parser::{MeshParser, MeshRecord};
//!
//! fn main() -> mesh_parser::Result<()> {
//!     let xml = r"<DescriptorRecordSet>
//!         <DescriptorRecord>
//!           <DescriptorUI>D000001</DescriptorUI>
//!           <DescriptorName><String>Calcimycin</String></DescriptorName>
//!         </DescriptorRecord>
//!       </DescriptorRecordSet>";
//!
//!     let mut names = Vec::new();
//!     let mut sink = |record: MeshRecord| {
//!         names.push(record.descriptor().name().to_string());
//!         Ok(())
//!     };
//!     MeshParser::new().parse_str(xml, &mut sink)?;
//!
//!     assert_eq!(names, ["Calcimycin"]);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod handler;
pub mod model;
pub mod schema;

pub use config::{ParserConfig, ValidationPolicy};
pub use driver::{MeshParser, RecordSink};
pub use error::{MeshError, Result};
pub use model::{
    AllowableQualifier, Concept, ConceptRelation, DescriptorClass, EntryCombination, LexicalTag,
    MeshDate, MeshRecord, NameUi, RecordOriginators, RelationName, Term,
};
