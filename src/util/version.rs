pub const APP_NAME: &str = "AXIVAI";
pub const APP_TAGLINE: &str = "AI-Powered Startup Evaluation";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_label() -> String {
    format!("v{APP_VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_carries_package_version() {
        assert_eq!(version_label(), format!("v{}", env!("CARGO_PKG_VERSION")));
    }
}
