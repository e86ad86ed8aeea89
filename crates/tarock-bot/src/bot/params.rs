use tarock_core::model::bid::Bid;

/// Hand strength a bidder must exceed before taking each rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidThresholds {
    pub small: u32,
    pub under: u32,
    pub over: u32,
    pub solo: u32,
}

impl Default for BidThresholds {
    fn default() -> Self {
        Self {
            small: 8,
            under: 10,
            over: 11,
            solo: 13,
        }
    }
}

impl BidThresholds {
    pub const fn for_bid(&self, bid: Bid) -> u32 {
        match bid {
            Bid::Small => self.small,
            Bid::Under => self.under,
            Bid::Over => self.over,
            Bid::Solo => self.solo,
        }
    }

    /// Higher rungs must not be easier to take than lower ones.
    pub fn is_ascending(&self) -> bool {
        self.small <= self.under && self.under <= self.over && self.over <= self.solo
    }

    /// Defaults overridden by `TAROCK_BID_SMALL`, `TAROCK_BID_UNDER`, `TAROCK_BID_OVER`
    /// and `TAROCK_BID_SOLO`.
    pub fn from_env() -> Self {
        Self::from_reader(|key| std::env::var(key).ok())
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let mut value = |key: &str, fallback: u32| {
            read(key)
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .unwrap_or(fallback)
        };
        Self {
            small: value("TAROCK_BID_SMALL", defaults.small),
            under: value("TAROCK_BID_UNDER", defaults.under),
            over: value("TAROCK_BID_OVER", defaults.over),
            solo: value("TAROCK_BID_SOLO", defaults.solo),
        }
    }
}
