mod docs;
mod home;
mod not_found;

pub use docs::{DocsIndexPage, GuidePage};
pub use home::HomePage;
pub use not_found::NotFound;
