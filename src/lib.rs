//! roster: an in-memory student and course registry with a GraphQL API
//!
//! - [`schema`]: student and course records and their partial updates
//! - [`store`]: the collection store and its seed data
//! - [`graphql`]: the query and mutation resolvers

pub mod graphql;
pub mod schema;
pub mod store;

pub use graphql::{build_schema, RosterSchema};
pub use schema::{Course, CoursePatch, Record, RecordKind, Student, StudentPatch};
pub use store::{MemoryStore, Seed, Store, StoreError, StoreResult};
