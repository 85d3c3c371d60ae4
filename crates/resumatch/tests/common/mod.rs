#![allow(dead_code)]

use resumatch_core::{Config, Screener};
use resumatch_text::EnglishModel;
use std::sync::Arc;

pub use resumatch_extract::fixtures::build_pdf;

pub const JOB_DESCRIPTION: &str = "We are looking for a backend engineer with Python, Django \
     and REST API experience. Docker and PostgreSQL are a plus.";

pub const STRONG_RESUME: &str = "Backend engineer with six years of Python and Django. \
     Designed REST APIs, containerized services with Docker, tuned PostgreSQL queries.";

pub const PARTIAL_RESUME: &str = "Frontend developer working with React and TypeScript. \
     Consumed REST APIs built by the backend team.";

pub const UNRELATED_RESUME: &str = "Pastry chef specializing in laminated doughs, \
     wedding cakes and seasonal menus.";

pub fn screener() -> Screener<EnglishModel> {
    Screener::new(Config::new(), Arc::new(EnglishModel::load(None).unwrap()))
}
