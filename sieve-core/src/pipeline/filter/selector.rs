use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const GREATER_THAN_PREFIX: &str = "GT";

/// A filter named on the command line, e.g. `EVEN` or `GT5`.
///
/// `GT<n>` splits into name `GT` and argument `n`; anything else is taken
/// whole as the name. Unknown names are only rejected by the factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelector {
    pub name: String,
    pub arg: String,
}

impl FromStr for FilterSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = match s.strip_prefix(GREATER_THAN_PREFIX) {
            Some(arg) => FilterSelector {
                name: GREATER_THAN_PREFIX.to_string(),
                arg: arg.to_string(),
            },
            None => FilterSelector {
                name: s.to_string(),
                arg: String::new(),
            },
        };
        Ok(selector)
    }
}

impl fmt::Display for FilterSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.arg)
    }
}
