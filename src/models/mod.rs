//! Data models for Atlas

mod country;

pub use country::{
    Car, CoatOfArms, Country, CountryName, Currency, Flags, Idd, Maps, parse_utc_offset,
};
