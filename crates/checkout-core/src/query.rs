//! Return-Visit Query Handling
//!
//! The hosted checkout sends the browser back with `?subscription=success`
//! or `?subscription=cancel`. The parameter is read once and then removed
//! from the address bar so a reload does not replay the notification.

/// Query key set by the callback URLs
pub const SUBSCRIPTION_PARAM: &str = "subscription";

/// Outcome reported by the hosted checkout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionOutcome {
    Success,
    Cancel,
}

impl SubscriptionOutcome {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Cancel => "cancel",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "success" => Some(Self::Success),
            "cancel" => Some(Self::Cancel),
            _ => None,
        }
    }

    /// Read the outcome from a `location.search` string
    pub fn from_search(search: &str) -> Option<Self> {
        query_pairs(search)
            .find(|(key, _)| key == SUBSCRIPTION_PARAM)
            .and_then(|(_, value)| {
                let outcome = Self::parse(&value);
                if outcome.is_none() {
                    tracing::warn!(value = %value, "Ignoring unknown subscription outcome");
                }
                outcome
            })
    }
}

/// Decoded `key=value` pairs of a query string
fn query_pairs(search: &str) -> impl Iterator<Item = (String, String)> + '_ {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key_enc = parts.next().unwrap_or("");
            let val_enc = parts.next().unwrap_or("");
            (decode(key_enc), decode(val_enc))
        })
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// Remove every occurrence of `key` from the query string of `url`
///
/// Other parameters keep their order and encoding; a fragment is kept.
/// The `?` is dropped when nothing remains.
pub fn strip_param(url: &str, key: &str) -> String {
    let (without_fragment, fragment) = match url.find('#') {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    };

    let Some((base, query)) = without_fragment.split_once('?') else {
        return url.to_string();
    };

    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| {
            if pair.is_empty() {
                return false;
            }
            let raw_key = pair.split('=').next().unwrap_or("");
            decode(raw_key) != key
        })
        .collect();

    let mut out = String::from(base);
    if !kept.is_empty() {
        out.push('?');
        out.push_str(&kept.join("&"));
    }
    out.push_str(fragment);
    out
}

/// What a page load learned from its URL
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReturnVisit {
    /// Outcome, if the page was reached from the hosted checkout
    pub outcome: Option<SubscriptionOutcome>,

    /// The URL with the subscription parameter removed
    pub clean_url: String,
}

impl ReturnVisit {
    /// Inspect a full `location.href`
    pub fn from_href(href: &str) -> Self {
        let search = href
            .split('#')
            .next()
            .and_then(|s| s.split_once('?'))
            .map_or("", |(_, q)| q);

        Self {
            outcome: SubscriptionOutcome::from_search(search),
            clean_url: strip_param(href, SUBSCRIPTION_PARAM),
        }
    }

    /// Whether the address bar needs rewriting
    pub fn needs_cleanup(&self, href: &str) -> bool {
        self.clean_url != href
    }
}
