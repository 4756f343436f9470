//! CSS selectors for the course page shape
//!
//! These are parsed once at first access and cached forever.
//! Hardcoded selectors should NEVER fail to parse - if they do, it's a bug.

use scraper::Selector;
use std::sync::LazyLock;

use crate::utils::{
    SECTION_HEADING_SELECTOR, TASK_BODY_SELECTOR, TASK_SELECTOR, TASK_TITLE_SELECTOR,
    UNWANTED_SELECTORS,
};

fn parse(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(selector) => selector,
        Err(e) => panic!("BUG: hardcoded CSS selector '{css}' is invalid: {e}"),
    }
}

pub(crate) static SECTION_HEADINGS: LazyLock<Selector> =
    LazyLock::new(|| parse(SECTION_HEADING_SELECTOR));

pub(crate) static TASKS: LazyLock<Selector> = LazyLock::new(|| parse(TASK_SELECTOR));

pub(crate) static TASK_TITLE: LazyLock<Selector> = LazyLock::new(|| parse(TASK_TITLE_SELECTOR));

pub(crate) static TASK_BODY: LazyLock<Selector> = LazyLock::new(|| parse(TASK_BODY_SELECTOR));

pub(crate) static UNWANTED: LazyLock<Vec<Selector>> =
    LazyLock::new(|| UNWANTED_SELECTORS.iter().map(|css| parse(css)).collect());
