mod command;
pub mod wikibase;

pub use command::{run, unchecked_run};
pub use wikibase::FakeWikibase;
