//! Configuration module

mod site;

pub use site::CommentsConfig;
pub use site::CommentsProvider;
pub use site::DisqusConfig;
pub use site::GiscusConfig;
pub use site::SiteConfig;
pub use site::UtterancesConfig;
