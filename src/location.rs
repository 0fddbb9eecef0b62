//! Locator resolution
//!
//! Turns a recorded `strategy=selector` locator into a PHP expression. The
//! Codeception API takes strict locators (`["css" => "#submit"]`); raw
//! driver callbacks need `WebDriverBy` expressions instead.

use crate::error::{Error, Result};
use crate::format::{interpolate, quote};

/// Resolves recorded locators into target-language expressions
pub trait LocatorResolver: Send + Sync {
    /// Expression accepted by the high-level test API
    fn resolve(&self, locator: &str) -> Result<String>;

    /// Expression accepted by the raw driver
    fn resolve_driver(&self, locator: &str) -> Result<String>;
}

/// Locator strategies the recorder produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Id,
    Name,
    Css,
    Xpath,
    LinkText,
    PartialLinkText,
}

impl Strategy {
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "id" => Some(Strategy::Id),
            "name" => Some(Strategy::Name),
            "css" => Some(Strategy::Css),
            "xpath" => Some(Strategy::Xpath),
            "link" | "linkText" => Some(Strategy::LinkText),
            "partialLinkText" => Some(Strategy::PartialLinkText),
            _ => None,
        }
    }
}

/// Split `strategy=selector`; a bare `//...` is xpath
pub fn parse_locator(locator: &str) -> Result<(Strategy, &str)> {
    if locator.starts_with("//") {
        return Ok((Strategy::Xpath, locator));
    }
    let (prefix, selector) = locator.split_once('=').ok_or_else(|| {
        Error::Locator(format!(
            "locator `{}` must be of the form strategy=selector",
            locator
        ))
    })?;
    let strategy = Strategy::from_prefix(prefix)
        .ok_or_else(|| Error::Locator(format!("unknown locator strategy `{}`", prefix)))?;
    Ok((strategy, selector))
}

/// Default resolver for the Codeception WebDriver module
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeceptionLocator;

impl LocatorResolver for CodeceptionLocator {
    fn resolve(&self, locator: &str) -> Result<String> {
        let (strategy, selector) = parse_locator(locator)?;
        let key = match strategy {
            Strategy::Id => "id",
            Strategy::Name => "name",
            Strategy::Css => "css",
            Strategy::Xpath => "xpath",
            Strategy::LinkText => "link",
            Strategy::PartialLinkText => {
                return Err(Error::Locator(format!(
                    "`{}`: partial link text has no strict locator form",
                    locator
                )))
            }
        };
        Ok(format!("[\"{}\" => {}]", key, quote(&interpolate(selector))))
    }

    fn resolve_driver(&self, locator: &str) -> Result<String> {
        let (strategy, selector) = parse_locator(locator)?;
        let method = match strategy {
            Strategy::Id => "id",
            Strategy::Name => "name",
            Strategy::Css => "cssSelector",
            Strategy::Xpath => "xpath",
            Strategy::LinkText => "linkText",
            Strategy::PartialLinkText => "partialLinkText",
        };
        Ok(format!(
            "\\Facebook\\WebDriver\\WebDriverBy::{}({})",
            method,
            quote(&interpolate(selector))
        ))
    }
}
