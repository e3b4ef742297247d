pub mod locale;
pub mod network;
pub mod prefs;
