mod profile;
mod store;

pub use profile::ProfileService;
pub use profile::ProfileState;
pub use store::ProfileStore;
