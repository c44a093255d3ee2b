//! `SeaORM` entity definitions.

pub mod clients;
pub mod documents;
pub mod gl_entries;

pub mod prelude {
    //! Entity re-exports.
    pub use super::clients::Entity as Clients;
    pub use super::documents::Entity as Documents;
    pub use super::gl_entries::Entity as GlEntries;
}
