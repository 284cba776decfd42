pub mod entry;
pub mod site;
pub mod timeline;

pub use entry::Entry;
pub use site::SiteInfo;
pub use timeline::Timeline;
