pub mod use_auth;
pub mod use_calendar;
