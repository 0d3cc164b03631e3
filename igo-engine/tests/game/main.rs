mod common;

mod ko;
mod properties;
mod scoring;
mod sessions;
