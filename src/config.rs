use std::time::Duration;

use chrono::{DateTime, Datelike};

static BUILD_TIME: &str = env!("BUILD_TIME");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

/// Site-wide settings shared through context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub first_name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub github_label: &'static str,
    pub linkedin_url: &'static str,
    pub source_url: &'static str,
    /// Local storage key holding the theme preference.
    pub theme_storage_key: &'static str,
    pub send_delay: Duration,
    pub ack_duration: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Joshua Mutambuki",
            first_name: "Joshua",
            role: "A Full Stack Web Developer",
            tagline: "I build real-world applications using Rust, React, Node.js, and PostgreSQL. Focused on clean code, scalable design, and solving real problems.",
            email: "mutambukijoshua2@gmail.com",
            github_url: "https://github.com/dev-m-josh",
            github_label: "github.com/dev-m-josh",
            linkedin_url: "https://linkedin.com/in/joshuamutambuki",
            source_url: "https://github.com/joshuamutambuki/portfolio",
            theme_storage_key: "theme",
            send_delay: Duration::from_millis(1000),
            ack_duration: Duration::from_millis(3000),
        }
    }
}

impl SiteConfig {
    pub fn mail_href(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn social_links(&self) -> Vec<SocialLink> {
        vec![
            SocialLink {
                name: "GitHub",
                href: self.github_url,
            },
            SocialLink {
                name: "LinkedIn",
                href: self.linkedin_url,
            },
        ]
    }

    /// Year the site was built, so server and browser render the same footer.
    pub fn copyright_year(&self) -> i32 {
        year_from_timestamp(BUILD_TIME).unwrap_or(2025)
    }
}

fn year_from_timestamp(ts: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(ts).ok().map(|dt| dt.year())
}

/// Served from `public/`.
pub const FAVICON: &str = "/favicon.svg";

/// Anchor targets for the navbar and footer.
pub static SECTIONS: [(&str, &str); 6] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Projects", "#projects"),
    ("Resume", "#resume"),
    ("Blog", "#blog"),
    ("Contact", "#contact"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_from_timestamp() {
        assert_eq!(year_from_timestamp("2026-10-17T08:30:00+00:00"), Some(2026));
        assert_eq!(year_from_timestamp("yesterday"), None);
        assert!(SiteConfig::default().copyright_year() >= 2025);
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.send_delay, Duration::from_secs(1));
        assert_eq!(config.ack_duration, Duration::from_secs(3));
        assert_eq!(config.mail_href(), "mailto:mutambukijoshua2@gmail.com");
        assert!(config.social_links().iter().all(SocialLink::is_external));
    }

    #[test]
    fn test_favicon_is_shipped() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(FAVICON.trim_start_matches('/'));
        assert!(path.is_file(), "missing {}", path.display());
    }
}
