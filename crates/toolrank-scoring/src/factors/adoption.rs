use toolrank_core::models::ToolMetrics;

use crate::signals::{count, tiered};

const IDE_INSTALL_TIERS: &[(f64, f64)] = &[
    (50e6, 40.0),
    (10e6, 35.0),
    (1e6, 30.0),
    (500e3, 25.0),
    (100e3, 20.0),
    (10e3, 10.0),
    (1e3, 5.0),
];

const USER_TIERS: &[(f64, f64)] = &[
    (1e6, 30.0),
    (500e3, 25.0),
    (100e3, 20.0),
    (50e3, 15.0),
    (10e3, 10.0),
    (5e3, 5.0),
];

const PACKAGE_DOWNLOAD_TIERS: &[(f64, f64)] = &[
    (1e6, 15.0),
    (500e3, 12.0),
    (100e3, 10.0),
    (50e3, 7.0),
    (10e3, 3.0),
];

const NEWS_MENTION_TIERS: &[(f64, f64)] =
    &[(20.0, 10.0), (15.0, 8.0), (10.0, 6.0), (5.0, 4.0), (2.0, 2.0)];

const STAR_TIERS: &[(f64, f64)] = &[(50e3, 5.0), (20e3, 4.0), (10e3, 3.0), (5e3, 2.0)];

/// Developer adoption. Starts at zero; every point is earned by a signal,
/// and each signal is capped by its own top tier.
pub fn calculate(metrics: &ToolMetrics) -> f64 {
    let adoption = &metrics.adoption;

    let packages = tiered(count(adoption.npm_monthly_downloads), PACKAGE_DOWNLOAD_TIERS).max(
        tiered(count(adoption.pypi_monthly_downloads), PACKAGE_DOWNLOAD_TIERS),
    );

    let score = tiered(count(adoption.ide_installs), IDE_INSTALL_TIERS)
        + tiered(count(adoption.users), USER_TIERS)
        + packages
        + tiered(count(adoption.news_mentions), NEWS_MENTION_TIERS)
        + tiered(count(adoption.github_stars), STAR_TIERS);

    score.min(100.0)
}
