pub mod checkup;

pub use checkup::{AddressOutcome, AddressReport, CheckupProcessor, CheckupReport};
