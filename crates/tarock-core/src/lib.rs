#![deny(warnings)]
pub mod game;
pub mod model;
pub mod rng;
pub mod strategy;

pub struct AppInfo;

impl AppInfo {
    pub const fn name() -> &'static str {
        "tarock"
    }

    pub const fn variant() -> &'static str {
        "Three-hand 54-card tarock"
    }

    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::AppInfo;

    #[test]
    fn exposes_static_metadata() {
        assert_eq!(AppInfo::name(), "tarock");
        assert_eq!(AppInfo::variant(), "Three-hand 54-card tarock");
        assert!(!AppInfo::version().is_empty());
    }
}
