#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod accept;
mod catalog;
mod cookie;
mod engine;
mod error;
mod locale;
mod select;

pub use accept::{LanguageRange, parse_ranges};
pub use catalog::LocaleCatalog;
pub use cookie::{cookie_locale, extract_cookie_value};
pub use engine::{LocaleSource, Negotiation, Signal, Stage, StageFault, negotiate};
pub use error::{CoreError, CoreResult};
pub use locale::LocaleCode;
pub use select::select;
