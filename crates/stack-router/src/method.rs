//! HTTP verbs understood by the router
//!
//! The set is closed: every route entry stores its verbs as `Method` values and
//! `Router::all` registers every variant at once, in declaration order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! methods {
    ($($variant:ident => $token:literal,)+) => {
        /// A known HTTP verb
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum Method {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl Method {
            /// Every known verb, in registration order for `Router::all`
            pub const ALL: &'static [Method] = &[$(Method::$variant,)+];

            /// Lower-case token as stored in route method mappings
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Method::$variant => $token,)+
                }
            }
        }

        impl FromStr for Method {
            type Err = ParseMethodError;

            /// Parses a verb token, ignoring ASCII case
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.to_ascii_lowercase();
                match lower.as_str() {
                    $($token => Ok(Method::$variant),)+
                    _ => Err(ParseMethodError(s.to_string())),
                }
            }
        }
    };
}

methods! {
    Acl => "acl",
    Bind => "bind",
    Checkout => "checkout",
    Connect => "connect",
    Copy => "copy",
    Delete => "delete",
    Get => "get",
    Head => "head",
    Link => "link",
    Lock => "lock",
    MSearch => "m-search",
    Merge => "merge",
    MkActivity => "mkactivity",
    MkCalendar => "mkcalendar",
    MkCol => "mkcol",
    Move => "move",
    Notify => "notify",
    Options => "options",
    Patch => "patch",
    Post => "post",
    PropFind => "propfind",
    PropPatch => "proppatch",
    Purge => "purge",
    Put => "put",
    Rebind => "rebind",
    Report => "report",
    Search => "search",
    Source => "source",
    Subscribe => "subscribe",
    Trace => "trace",
    Unbind => "unbind",
    Unlink => "unlink",
    Unlock => "unlock",
    Unsubscribe => "unsubscribe",
}

/// Returned when a token is not one of the known verbs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown HTTP method: {0}")]
pub struct ParseMethodError(pub String);

impl fmt::Display for Method {
    /// Upper-case form, e.g. `GET` or `M-SEARCH`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.as_str().to_ascii_uppercase())
    }
}
