mod calendar;
mod client;
mod document;
mod hr;
mod okr;
mod org;
mod user;
