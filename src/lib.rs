pub mod art;
mod codec;
pub mod error;
pub mod handle;
pub mod list;
pub mod run;
pub mod translate;
mod helpers;

pub use error::{Error, Result};
pub use list::{Bytes, RunList};
pub use run::Run;
pub use translate::Translation;
